use crate::books::repository::CacheRepository;
use crate::books::repository::json_file_repository::JsonFileCacheRepository;
use crate::core::domain::Configuration;

pub fn create_cache_repository(config: &Configuration) -> Box<dyn CacheRepository> {
    Box::new(JsonFileCacheRepository::new(config.output_path.as_str()))
}
