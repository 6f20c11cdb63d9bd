use async_trait::async_trait;
use tracing::{error, info, warn};
use crate::books::domain::model::BookCache;
use crate::books::repository::CacheRepository;
use crate::catalog::domain::model::RunSummary;
use crate::catalog::domain::pacing::Pacer;
use crate::catalog::domain::SyncService;
use crate::core::library::SyncResult;
use crate::gateway::lookup::BookLookup;
use crate::gateway::source::IdentifierSource;

pub(crate) struct SyncServiceImpl {
    source: Box<dyn IdentifierSource>,
    lookup: Box<dyn BookLookup>,
    cache_repository: Box<dyn CacheRepository>,
    pacer: Pacer,
}

impl SyncServiceImpl {
    pub(crate) fn new(source: Box<dyn IdentifierSource>, lookup: Box<dyn BookLookup>,
                      cache_repository: Box<dyn CacheRepository>, pacer: Pacer) -> Self {
        Self {
            source,
            lookup,
            cache_repository,
            pacer,
        }
    }

    // every source failure collapses to an empty list, the caller only sees "nothing to do"
    async fn fetch_identifiers(&self) -> Vec<String> {
        info!(stage = "source", "fetching isbn list");
        match self.source.fetch_identifiers().await {
            Ok(isbns) => isbns,
            Err(err) => {
                error!(stage = "source", error = %err, retryable = err.retryable(), "error loading isbn list");
                vec![]
            }
        }
    }
}

#[async_trait]
impl SyncService for SyncServiceImpl {
    async fn update_cache(&self) -> SyncResult<RunSummary> {
        let mut summary = RunSummary::start(self.cache_repository.location().as_str());

        let isbns = self.fetch_identifiers().await;
        if isbns.is_empty() {
            error!(stage = "source", "no isbns to process, leaving cache untouched");
            return Ok(summary.aborted());
        }

        info!(stage = "lookup", count = isbns.len(), delay_ms = self.pacer.delay().as_millis() as u64,
            "fetching data for isbns");
        let mut cache = BookCache::new();
        for isbn in &isbns {
            summary.total += 1;
            info!(isbn = isbn.as_str(), "fetching data for isbn");
            match self.lookup.find_by_isbn(isbn).await {
                Ok(Some(book)) => {
                    summary.found += 1;
                    if cache.insert(book).is_some() {
                        warn!(isbn = isbn.as_str(), "duplicate isbn in list, keeping latest data");
                    }
                }
                Ok(None) => {
                    summary.missing += 1;
                }
                Err(err) => {
                    summary.failed += 1;
                    error!(isbn = isbn.as_str(), error = %err, retryable = err.retryable(), "error fetching isbn");
                }
            }
            self.pacer.pause().await;
        }

        let written = self.cache_repository.save(&cache).await?;
        Ok(summary.completed(written))
    }
}
