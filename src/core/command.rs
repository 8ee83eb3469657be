use async_trait::async_trait;

use crate::core::holds::HoldsError;

#[derive(Debug)]
pub enum CommandError {
    Access {
        message: String,
        reason_code: Option<String>,
    },
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Dependency {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<HoldsError> for CommandError {
    fn from(other: HoldsError) -> Self {
        match other {
            HoldsError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            HoldsError::AccessDenied { message, reason_code } => {
                CommandError::Access { message, reason_code }
            }
            HoldsError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            HoldsError::Dependency { message, reason_code, retryable } => {
                CommandError::Dependency { message, reason_code, retryable }
            }
            HoldsError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            HoldsError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            HoldsError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: true }
            }
        }
    }
}
