use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug)]
pub enum HoldsError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    AccessDenied {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // Failure talking to a collaborator service such as the job-tracking API.
    // Whether it aborts the request depends on the call site: job-id
    // generation during create is critical, status notifications are not.
    Dependency {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl HoldsError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> HoldsError {
        HoldsError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn access_denied(message: &str, reason_code: Option<String>) -> HoldsError {
        HoldsError::AccessDenied { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> HoldsError {
        HoldsError::NotFound { message: message.to_string() }
    }

    pub fn dependency(message: &str, reason_code: Option<String>, retryable: bool) -> HoldsError {
        HoldsError::Dependency { message: message.to_string(), reason_code, retryable }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> HoldsError {
        HoldsError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> HoldsError {
        HoldsError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> HoldsError {
        HoldsError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            HoldsError::Database { retryable, .. } => { *retryable }
            HoldsError::AccessDenied { .. } => { false }
            HoldsError::NotFound { .. } => { false }
            HoldsError::Dependency { retryable, .. } => { *retryable }
            HoldsError::Validation { .. } => { false }
            HoldsError::Serialization { .. } => { false }
            HoldsError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for HoldsError {
    fn from(err: std::io::Error) -> Self {
        HoldsError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for HoldsError {
    fn from(err: serde_json::Error) -> Self {
        HoldsError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for HoldsError {
    fn from(err: String) -> Self {
        HoldsError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for HoldsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HoldsError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            HoldsError::AccessDenied { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            HoldsError::NotFound { message } => {
                write!(f, "{}", message)
            }
            HoldsError::Dependency { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            HoldsError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            HoldsError::Serialization { message } => {
                write!(f, "{}", message)
            }
            HoldsError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for hold-request operations.
pub type HoldsResult<T> = Result<T, HoldsError>;

// Type of a hold request: physical retrieval or electronic document delivery.
// Anything else seen on the wire normalizes to Hold.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Hold,
    Edd,
}

impl Default for RequestType {
    fn default() -> Self {
        RequestType::Hold
    }
}

impl From<String> for RequestType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "hold" => RequestType::Hold,
            "edd" => RequestType::Edd,
            other => {
                tracing::info!("invalid request type {} sent, defaulting to hold", other);
                RequestType::Hold
            }
        }
    }
}

impl<'de> Deserialize<'de> for RequestType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(RequestType::from(value))
    }
}

impl Display for RequestType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RequestType::Hold => write!(f, "hold"),
            RequestType::Edd => write!(f, "edd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::holds::{HoldsError, RequestType};

    #[tokio::test]
    async fn test_should_create_database_error() {
        assert!(matches!(HoldsError::database("test", None, false), HoldsError::Database { message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_access_error() {
        assert!(matches!(HoldsError::access_denied("test", None), HoldsError::AccessDenied { message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(HoldsError::not_found("test"), HoldsError::NotFound { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_dependency_error() {
        assert!(matches!(HoldsError::dependency("test", None, true), HoldsError::Dependency { message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(HoldsError::validation("test", None), HoldsError::Validation { message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(HoldsError::serialization("test"), HoldsError::Serialization { message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(HoldsError::runtime("test", None), HoldsError::Runtime { message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, HoldsError::database("test", None, false).retryable());
        assert_eq!(true, HoldsError::database("test", None, true).retryable());
        assert_eq!(false, HoldsError::access_denied("test", None).retryable());
        assert_eq!(false, HoldsError::not_found("test").retryable());
        assert_eq!(true, HoldsError::dependency("test", None, true).retryable());
        assert_eq!(false, HoldsError::validation("test", None).retryable());
        assert_eq!(false, HoldsError::serialization("test").retryable());
        assert_eq!(false, HoldsError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_format_request_type() {
        let types = vec![RequestType::Hold, RequestType::Edd];
        for request_type in types {
            let str = request_type.to_string();
            let str_type = RequestType::from(str);
            assert_eq!(request_type, str_type);
        }
    }

    #[tokio::test]
    async fn test_should_default_unknown_request_type_to_hold() {
        assert_eq!(RequestType::Hold, RequestType::from("retrieval".to_string()));
        assert_eq!(RequestType::Hold, RequestType::from("".to_string()));
        assert_eq!(RequestType::Hold, RequestType::default());
    }

    #[tokio::test]
    async fn test_should_deserialize_request_type_leniently() {
        let edd: RequestType = serde_json::from_str("\"edd\"").unwrap();
        assert_eq!(RequestType::Edd, edd);
        let legacy: RequestType = serde_json::from_str("\"retrieval\"").unwrap();
        assert_eq!(RequestType::Hold, legacy);
    }
}
