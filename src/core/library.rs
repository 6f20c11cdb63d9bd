use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SyncError {
    Network {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // Upstream answered but is throttling or failing (429 and 5xx). Nothing in a run retries
    // it, the flag only tells the scheduler a later run may succeed.
    Unavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Status {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl SyncError {
    pub fn network(message: &str, reason_code: Option<String>, retryable: bool) -> SyncError {
        SyncError::Network { message: message.to_string(), reason_code, retryable }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> SyncError {
        SyncError::Unavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> SyncError {
        SyncError::NotFound { message: message.to_string() }
    }

    pub fn status(message: &str, reason_code: Option<String>) -> SyncError {
        SyncError::Status { message: message.to_string(), reason_code }
    }

    // maps a non-success http status to the matching error kind
    pub fn from_status(message: &str, status: u16) -> SyncError {
        let reason = Some(status.to_string());
        if status == 404 {
            SyncError::not_found(
                format!("not found error {} {}", message, status).as_str())
        } else if status == 429 || (500..600).contains(&status) {
            SyncError::unavailable(
                format!("upstream unavailable error {} {}", message, status).as_str(), reason, true)
        } else {
            SyncError::status(
                format!("unexpected status error {} {}", message, status).as_str(), reason)
        }
    }

    pub fn serialization(message: &str) -> SyncError {
        SyncError::Serialization { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> SyncError {
        SyncError::Validation { message: message.to_string(), reason_code }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> SyncError {
        SyncError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            SyncError::Network { retryable, .. } => { *retryable }
            SyncError::Unavailable { retryable, .. } => { *retryable }
            SyncError::NotFound { .. } => { false }
            SyncError::Status { .. } => { false }
            SyncError::Serialization { .. } => { false }
            SyncError::Validation { .. } => { false }
            SyncError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            SyncError::Unavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            SyncError::NotFound { message } => {
                write!(f, "{}", message)
            }
            SyncError::Status { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            SyncError::Serialization { message } => {
                write!(f, "{}", message)
            }
            SyncError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            SyncError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for SyncError {}

/// A specialized Result type for the sync pipeline.
pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use crate::core::library::SyncError;

    #[tokio::test]
    async fn test_should_create_network_error() {
        assert!(matches!(SyncError::network("test", None, true), SyncError::Network{ message: _, reason_code: _, retryable: true }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(SyncError::not_found("test"), SyncError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(SyncError::validation("test", None), SyncError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_classify_status() {
        assert!(matches!(SyncError::from_status("isbn", 404), SyncError::NotFound{ message: _ }));
        assert!(matches!(SyncError::from_status("isbn", 429), SyncError::Unavailable{ retryable: true, .. }));
        assert!(matches!(SyncError::from_status("isbn", 503), SyncError::Unavailable{ retryable: true, .. }));
        assert!(matches!(SyncError::from_status("isbn", 400), SyncError::Status{ message: _, reason_code: Some(_) }));
        assert!(matches!(SyncError::from_status("isbn", 302), SyncError::Status{ message: _, reason_code: Some(_) }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(true, SyncError::network("test", None, true).retryable());
        assert_eq!(false, SyncError::network("test", None, false).retryable());
        assert_eq!(true, SyncError::from_status("test", 500).retryable());
        assert_eq!(false, SyncError::from_status("test", 404).retryable());
        assert_eq!(false, SyncError::serialization("test").retryable());
        assert_eq!(false, SyncError::validation("test", None).retryable());
        assert_eq!(false, SyncError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<Vec<String>>("{").expect_err("should fail to parse");
        assert!(matches!(SyncError::from(err), SyncError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_error() {
        let err = SyncError::from_status("lookup 978", 404);
        assert!(err.to_string().contains("lookup 978"));
    }
}
