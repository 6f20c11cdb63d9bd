use async_trait::async_trait;
use reqwest::Client;
use tracing::info;
use crate::books::dto::{IsbnEntryDto, to_isbn_list};
use crate::core::library::SyncResult;
use crate::gateway::source::IdentifierSource;
use crate::utils::http::{cache_buster, check_status};

// HttpIdentifierSource reads the isbn list from a static json document.
#[derive(Debug)]
pub struct HttpIdentifierSource {
    client: Client,
    url: String,
}

impl HttpIdentifierSource {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl IdentifierSource for HttpIdentifierSource {
    async fn fetch_identifiers(&self) -> SyncResult<Vec<String>> {
        let res = self.client
            .get(self.url.as_str())
            .query(&[cache_buster()])
            .send()
            .await?;
        let entries: Vec<IsbnEntryDto> = check_status(res, "isbn list")?.json().await?;
        let isbns = to_isbn_list(entries);
        info!(count = isbns.len(), "fetched isbn list");
        Ok(isbns)
    }
}
