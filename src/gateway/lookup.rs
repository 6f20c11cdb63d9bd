use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::core::library::SyncResult;

#[async_trait]
pub trait BookLookup: Sync + Send {
    // Ok(None) when the api answered but had no usable item for the isbn
    async fn find_by_isbn(&self, isbn: &str) -> SyncResult<Option<BookRecord>>;
}
