use async_trait::async_trait;
use crate::core::library::SyncResult;

#[async_trait]
pub trait IdentifierSource: Sync + Send {
    // fetches the ordered isbn list for this run
    async fn fetch_identifiers(&self) -> SyncResult<Vec<String>>;
}
