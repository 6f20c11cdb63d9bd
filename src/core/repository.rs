use async_trait::async_trait;
use crate::core::library::SyncResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // replaces whatever was stored before, returns the number of records written
    async fn save(&self, entity: &Entity) -> SyncResult<usize>;
}
