use serde::{Deserialize, Serialize};

// Configuration abstracts config options for the hold-requests service.
// Read once at startup; read-only afterwards.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub table_name: String,
    // when true, job ids come from the job-tracking service instead of a local UUID
    pub use_job_service: bool,
    pub job_service_url: String,
    // when true, a write-scope failure may still pass if the token subject
    // matches the patron id in the request body
    pub allow_patron_match: bool,
    // PEM-encoded RS256 public key used to verify bearer tokens for the
    // patron-match fallback
    pub oauth_public_key: Option<String>,
}

impl Configuration {
    pub fn new(table_name: &str) -> Self {
        Configuration {
            table_name: table_name.to_string(),
            use_job_service: false,
            job_service_url: "http://localhost:8084".to_string(),
            allow_patron_match: false,
            oauth_public_key: None,
        }
    }

    pub fn from_env() -> Self {
        let table_name = std::env::var("HOLD_REQUESTS_TABLE")
            .unwrap_or_else(|_| "hold_requests".to_string());
        let mut config = Configuration::new(table_name.as_str());
        config.use_job_service = env_flag("USE_JOB_SERVICE");
        if let Ok(url) = std::env::var("JOB_SERVICE_URL") {
            config.job_service_url = url;
        }
        config.allow_patron_match = env_flag("ALLOW_PATRON_MATCH");
        if let Ok(path) = std::env::var("OAUTH_PUBLIC_KEY_PATH") {
            match std::fs::read_to_string(path.as_str()) {
                Ok(pem) => config.oauth_public_key = Some(pem),
                Err(err) => {
                    tracing::warn!("failed to read public key from {}: {}", path, err);
                }
            }
        }
        config
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}
