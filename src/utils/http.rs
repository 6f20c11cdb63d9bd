use chrono::Utc;
use reqwest::{Client, Response};
use crate::core::domain::Configuration;
use crate::core::library::{SyncError, SyncResult};

pub fn build_http_client(config: &Configuration) -> SyncResult<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .build()?;
    Ok(client)
}

// query parameter that keeps intermediate caches from serving a stale list
pub(crate) fn cache_buster() -> (&'static str, String) {
    ("t", Utc::now().timestamp_millis().to_string())
}

// passes successful responses through, everything else becomes a SyncError
pub(crate) fn check_status(response: Response, context: &str) -> SyncResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let reason = status.canonical_reason().unwrap_or("");
        Err(SyncError::from_status(format!("{} {}", context, reason).as_str(), status.as_u16()))
    }
}

fn retryable_http_error(err: &reqwest::Error) -> (bool, Option<String>) {
    if err.is_timeout() {
        (true, Some("timeout".to_string()))
    } else if err.is_connect() {
        (true, Some("connect".to_string()))
    } else if err.is_decode() {
        (false, Some("decode".to_string()))
    } else if err.is_builder() {
        (false, Some("builder".to_string()))
    } else {
        (false, err.status().map(|s| s.as_u16().to_string()))
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        let (retryable, reason) = retryable_http_error(&err);
        if err.is_decode() {
            SyncError::serialization(format!("response body {:?}", err).as_str())
        } else {
            SyncError::network(format!("{:?}", err).as_str(), reason, retryable)
        }
    }
}
