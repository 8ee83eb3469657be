use async_trait::async_trait;
use uuid::Uuid;

use crate::core::holds::{HoldsError, HoldsResult};
use crate::requests::domain::HoldRequestService;
use crate::requests::domain::model::{HoldRequestFilter, HoldRequestUpdate, NewHoldRequest};
use crate::requests::domain::validator;
use crate::requests::dto::HoldRequestDto;
use crate::requests::repository::HoldRequestRepository;
use crate::gateway::jobs::JobGateway;
use crate::utils::date::is_valid_day;

pub struct HoldRequestServiceImpl {
    repository: Box<dyn HoldRequestRepository>,
    job_gateway: Box<dyn JobGateway>,
}

impl HoldRequestServiceImpl {
    pub fn new(repository: Box<dyn HoldRequestRepository>,
               job_gateway: Box<dyn JobGateway>) -> Self {
        Self { repository, job_gateway }
    }

    // Asks the job service for an id; a disabled gateway yields None and a
    // local uuid is assigned instead. A failing gateway fails the create.
    async fn assign_job_id(&self) -> HoldsResult<String> {
        match self.job_gateway.create_job().await {
            Ok(Some(job_id)) => Ok(job_id),
            Ok(None) => Ok(Uuid::new_v4().to_string()),
            Err(err) => {
                Err(HoldsError::dependency(
                    format!("failed to create a job for the hold request due to {}", err).as_str(),
                    Some("create-hold-request-error".to_string()),
                    err.retryable()))
            }
        }
    }
}

#[async_trait]
impl HoldRequestService for HoldRequestServiceImpl {
    async fn create(&self, request: NewHoldRequest) -> HoldsResult<HoldRequestDto> {
        let mut request = request;
        validator::validate_for_create(&mut request)?;
        let job_id = self.assign_job_id().await?;
        let entity = self.repository.create(&request, job_id.as_str()).await?;
        tracing::info!("created hold request {} with job {}", entity.id, entity.job_id);
        // job progress updates are non-critical
        if let Err(err) = self.job_gateway.begin_job(entity.job_id.as_str()).await {
            tracing::warn!("failed to start job {} due to {}", entity.job_id, err);
        }
        Ok(HoldRequestDto::from(&entity))
    }

    async fn get(&self, id: i64) -> HoldsResult<HoldRequestDto> {
        let entity = self.repository.get(id).await?;
        Ok(HoldRequestDto::from(&entity))
    }

    async fn query(&self, filter: &HoldRequestFilter) -> HoldsResult<Vec<HoldRequestDto>> {
        if let Some(day) = &filter.created_date {
            if !is_valid_day(day.as_str()) {
                tracing::debug!("createdDate filter {} is not a valid day", day);
                return Ok(vec![]);
            }
        }
        let entities = self.repository.query(filter).await?;
        Ok(entities.iter().map(HoldRequestDto::from).collect())
    }

    async fn update(&self, id: i64, update: HoldRequestUpdate) -> HoldsResult<HoldRequestDto> {
        let patch = validator::validate_for_update(&update)?;
        let entity = self.repository.update(id, &patch).await?;
        tracing::info!("updated hold request {} success {} processed {}",
            entity.id, entity.success, entity.processed);
        if let Err(err) = self.job_gateway.finish_job(entity.job_id.as_str(), entity.success).await {
            tracing::warn!("failed to finish job {} due to {}", entity.job_id, err);
        }
        Ok(HoldRequestDto::from(&entity))
    }
}
