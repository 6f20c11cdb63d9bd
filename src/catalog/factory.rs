use crate::books::factory::create_cache_repository;
use crate::catalog::domain::pacing::Pacer;
use crate::catalog::domain::service::SyncServiceImpl;
use crate::catalog::domain::SyncService;
use crate::core::domain::Configuration;
use crate::core::library::SyncResult;
use crate::gateway::factory::{create_book_lookup, create_identifier_source};
use crate::utils::http::build_http_client;

pub fn create_sync_service(config: &Configuration) -> SyncResult<Box<dyn SyncService>> {
    let client = build_http_client(config)?;
    let source = create_identifier_source(config, client.clone());
    let lookup = create_book_lookup(config, client);
    let cache_repo = create_cache_repository(config);
    Ok(Box::new(SyncServiceImpl::new(source, lookup, cache_repo, Pacer::new(config.pace))))
}
