use serde::{Deserialize, Serialize};

// Uniform success envelope: a single hold request or a list of them under "data".
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
        }
    }
}

// Uniform error envelope. The type field carries a short machine-readable
// tag such as invalid-request or invalid-scope; statusCode mirrors the HTTP
// status of the response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<String>,
}

impl ErrorResponse {
    pub fn new(status_code: u16, error_type: &str, message: &str) -> Self {
        Self {
            status_code,
            error_type: error_type.to_string(),
            message: message.to_string(),
            debug_info: None,
        }
    }

    pub fn with_debug_info(mut self, debug_info: &str) -> Self {
        self.debug_info = Some(debug_info.to_string());
        self
    }
}
