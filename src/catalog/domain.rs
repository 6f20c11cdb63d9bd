pub mod model;
pub mod pacing;
pub mod service;

use async_trait::async_trait;
use crate::catalog::domain::model::RunSummary;
use crate::core::library::SyncResult;

#[async_trait]
pub trait SyncService: Sync + Send {
    // runs one full fetch, lookup and write cycle
    async fn update_cache(&self) -> SyncResult<RunSummary>;
}
