use reqwest::Client;
use crate::core::domain::Configuration;
use crate::gateway::http::lookup::HttpBookLookup;
use crate::gateway::http::source::HttpIdentifierSource;
use crate::gateway::lookup::BookLookup;
use crate::gateway::source::IdentifierSource;

pub fn create_identifier_source(config: &Configuration, client: Client) -> Box<dyn IdentifierSource> {
    Box::new(HttpIdentifierSource::new(client, config.source_url.as_str()))
}

pub fn create_book_lookup(config: &Configuration, client: Client) -> Box<dyn BookLookup> {
    Box::new(HttpBookLookup::new(client, config.lookup_url.as_str()))
}
