use async_trait::async_trait;

use crate::core::holds::HoldsResult;

// Gateway to the job tracking service. create_job returns None when job
// tracking is disabled, in which case the caller assigns its own job id.
#[async_trait]
pub trait JobGateway: Sync + Send {
    async fn create_job(&self) -> HoldsResult<Option<String>>;
    async fn begin_job(&self, job_id: &str) -> HoldsResult<()>;
    async fn finish_job(&self, job_id: &str, success: bool) -> HoldsResult<()>;
}

pub struct NoopJobGateway;

#[async_trait]
impl JobGateway for NoopJobGateway {
    async fn create_job(&self) -> HoldsResult<Option<String>> {
        Ok(None)
    }

    async fn begin_job(&self, _job_id: &str) -> HoldsResult<()> {
        Ok(())
    }

    async fn finish_job(&self, _job_id: &str, _success: bool) -> HoldsResult<()> {
        Ok(())
    }
}
