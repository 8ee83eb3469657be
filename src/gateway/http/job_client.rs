use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::core::holds::{HoldsError, HoldsResult};
use crate::gateway::jobs::JobGateway;

// REST client for the job tracking service.
pub struct HttpJobGateway {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CreateJobResponse {
    id: Option<String>,
}

impl HttpJobGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn jobs_url(&self) -> String {
        format!("{}/jobs", self.base_url)
    }

    pub fn job_url(&self, job_id: &str, suffix: &str) -> String {
        format!("{}/jobs/{}/{}", self.base_url, job_id, suffix)
    }
}

#[async_trait]
impl JobGateway for HttpJobGateway {
    async fn create_job(&self) -> HoldsResult<Option<String>> {
        let response = self.client
            .post(self.jobs_url())
            .json(&json!({}))
            .send()
            .await?
            .error_for_status()?;
        let body: CreateJobResponse = response.json().await?;
        Ok(body.id)
    }

    async fn begin_job(&self, job_id: &str) -> HoldsResult<()> {
        self.client
            .put(self.job_url(job_id, "started"))
            .json(&json!({"message": "Job started for hold request."}))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn finish_job(&self, job_id: &str, success: bool) -> HoldsResult<()> {
        let suffix = if success { "success" } else { "failure" };
        self.client
            .put(self.job_url(job_id, suffix))
            .json(&json!({"message": "Job finished for hold request."}))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl From<reqwest::Error> for HoldsError {
    fn from(err: reqwest::Error) -> Self {
        HoldsError::dependency(
            format!("job service call failed due to {}", err).as_str(),
            Some("job-service-error".to_string()),
            true)
    }
}
