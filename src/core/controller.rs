use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::core::response::ErrorResponse;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

pub type ServerError = (StatusCode, Json<ErrorResponse>);

// shared mapping for body/query decode failures
pub fn json_to_server_error<E: std::fmt::Display>(err: E) -> ServerError {
    (StatusCode::BAD_REQUEST,
     Json(ErrorResponse::new(
         StatusCode::BAD_REQUEST.as_u16(),
         "invalid-request",
         format!("An invalid request was sent to the API. {}", err).as_str())))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        // database/runtime causes go into debugInfo, never the client message
        let (status, error_type, message, debug_info) = match err {
            CommandError::Access { message, reason_code } => {
                (StatusCode::FORBIDDEN,
                 reason_code.unwrap_or_else(|| "invalid-scope".to_string()), message, None)
            }
            CommandError::Database { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database-error".to_string(),
                 "A database error occurred while processing the hold request.".to_string(),
                 Some(message))
            }
            CommandError::Dependency { message, reason_code, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR,
                 reason_code.unwrap_or_else(|| "job-service-error".to_string()),
                 "A dependent service failed while processing the hold request.".to_string(),
                 Some(message))
            }
            CommandError::NotFound { message } => {
                (StatusCode::NOT_FOUND, "hold-request-not-found".to_string(), message, None)
            }
            CommandError::Runtime { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal-error".to_string(),
                 "An unexpected error occurred while processing the hold request.".to_string(),
                 Some(message))
            }
            CommandError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, "invalid-request".to_string(), message, None)
            }
            CommandError::Validation { message, reason_code } => {
                (StatusCode::BAD_REQUEST,
                 reason_code.unwrap_or_else(|| "invalid-request".to_string()), message, None)
            }
        };
        let mut response = ErrorResponse::new(status.as_u16(), error_type.as_str(), message.as_str());
        if let Some(debug_info) = debug_info {
            response = response.with_debug_info(debug_info.as_str());
        }
        (status, Json(response))
    }
}
