use std::path::PathBuf;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookCache;
use crate::books::repository::CacheRepository;
use crate::core::library::SyncResult;
use crate::core::repository::Repository;

// JsonFileCacheRepository keeps the whole cache in one pretty-printed json file. Saving
// truncates and rewrites the file in place.
#[derive(Debug)]
pub struct JsonFileCacheRepository {
    path: PathBuf,
}

impl JsonFileCacheRepository {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }
}

#[async_trait]
impl Repository<BookCache> for JsonFileCacheRepository {
    async fn save(&self, cache: &BookCache) -> SyncResult<usize> {
        let json = serde_json::to_string_pretty(cache)?;
        tokio::fs::write(&self.path, json).await?;
        info!(path = %self.path.display(), records = cache.len(), "cache updated successfully");
        Ok(cache.len())
    }
}

#[cfg(test)]
impl JsonFileCacheRepository {
    pub(crate) async fn load(&self) -> SyncResult<BookCache> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl CacheRepository for JsonFileCacheRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
