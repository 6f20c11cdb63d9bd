use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;
use crate::books::domain::model::BookRecord;
use crate::books::dto::LookupResponseDto;
use crate::core::library::SyncResult;
use crate::gateway::lookup::BookLookup;
use crate::utils::http::check_status;

// HttpBookLookup queries the commerce api proxy, one GET per isbn.
#[derive(Debug)]
pub struct HttpBookLookup {
    client: Client,
    url: String,
}

impl HttpBookLookup {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl BookLookup for HttpBookLookup {
    async fn find_by_isbn(&self, isbn: &str) -> SyncResult<Option<BookRecord>> {
        let res = self.client
            .get(self.url.as_str())
            .query(&[("isbn", isbn)])
            .send()
            .await?;
        let body: LookupResponseDto = check_status(res, format!("isbn {}", isbn).as_str())?.json().await?;
        match body.first_item() {
            Some(item) => Ok(Some(item.to_record(isbn))),
            None => {
                warn!(isbn, "no valid book data");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Json};
    use axum::routing::get;
    use axum::Router;
    use serde_json::json;
    use crate::books::domain::model::{PUBLISHER_FALLBACK, TITLE_FALLBACK};
    use crate::core::domain::Configuration;
    use crate::core::library::SyncError;
    use crate::gateway::http::lookup::HttpBookLookup;
    use crate::gateway::lookup::BookLookup;
    use crate::utils::http::build_http_client;
    use crate::utils::testing::spawn_upstream;

    async fn build_lookup() -> HttpBookLookup {
        let app = Router::new().route("/", get(|Query(params): Query<HashMap<String, String>>| async move {
            match params.get("isbn").map(String::as_str) {
                Some("9784040000001") => Json(json!({
                    "Items": [{"Item": {
                        "title": "異世界の本",
                        "seriesName": "角川文庫",
                        "salesDate": "2023年04月15日"
                    }}]
                })).into_response(),
                Some("9784040000002") => Json(json!({
                    "Items": [{"Item": {"salesDate": "2023年春頃"}}]
                })).into_response(),
                Some("9784040000003") => Json(json!({"Items": [], "count": 0})).into_response(),
                Some("9784040000004") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
                Some("9784040000005") => Json(json!({
                    "Items": [{"Item": {"title": 1984, "seriesName": null, "salesDate": "2019年06月01日"}}]
                })).into_response(),
                Some("a b&c") => Json(json!({"Items": [{"Item": {"title": "encoded"}}]})).into_response(),
                _ => StatusCode::NOT_FOUND.into_response(),
            }
        }));
        let base = spawn_upstream(app).await;
        let client = build_http_client(&Configuration::new()).expect("should build client");
        HttpBookLookup::new(client, format!("{}/", base).as_str())
    }

    #[tokio::test]
    async fn test_should_find_book() {
        let lookup = build_lookup().await;
        let book = lookup.find_by_isbn("9784040000001").await.expect("should lookup").expect("should find book");
        assert_eq!("9784040000001", book.isbn.as_str());
        assert_eq!("異世界の本", book.title.as_str());
        assert_eq!("角川文庫", book.publisher.as_str());
        assert_eq!(Some("2023-04-15".to_string()), book.release_date);
    }

    #[tokio::test]
    async fn test_should_leave_unmatched_date_empty() {
        let lookup = build_lookup().await;
        let book = lookup.find_by_isbn("9784040000002").await.expect("should lookup").expect("should find book");
        assert_eq!(None, book.release_date);
        assert_eq!(TITLE_FALLBACK, book.title.as_str());
        assert_eq!(PUBLISHER_FALLBACK, book.publisher.as_str());
    }

    #[tokio::test]
    async fn test_should_not_find_book_without_items() {
        let lookup = build_lookup().await;
        let res = lookup.find_by_isbn("9784040000003").await.expect("should lookup");
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn test_should_fail_for_error_status() {
        let lookup = build_lookup().await;
        assert!(matches!(lookup.find_by_isbn("9784040000004").await, Err(SyncError::Unavailable{ .. })));
        assert!(matches!(lookup.find_by_isbn("0000000000000").await, Err(SyncError::NotFound{ message: _ })));
    }

    #[tokio::test]
    async fn test_should_find_book_with_non_text_fields() {
        let lookup = build_lookup().await;
        let book = lookup.find_by_isbn("9784040000005").await.expect("should lookup").expect("should find book");
        assert_eq!("1984", book.title.as_str());
        assert_eq!(PUBLISHER_FALLBACK, book.publisher.as_str());
        assert_eq!(Some("2019-06-01".to_string()), book.release_date);
    }

    #[tokio::test]
    async fn test_should_encode_isbn_query() {
        let lookup = build_lookup().await;
        let book = lookup.find_by_isbn("a b&c").await.expect("should lookup").expect("should find book");
        assert_eq!("encoded", book.title.as_str());
    }
}
