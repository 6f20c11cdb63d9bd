pub mod json_file_repository;

use crate::books::domain::model::BookCache;
use crate::core::repository::Repository;

pub trait CacheRepository: Repository<BookCache> {
    // where the cache lives, for logs and the run summary
    fn location(&self) -> String;
}
