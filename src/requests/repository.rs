use async_trait::async_trait;

use crate::core::holds::HoldsResult;
use crate::requests::domain::model::{HoldRequestEntity, HoldRequestFilter, HoldRequestPatch,
                                     NewHoldRequest};

pub mod ddb_hold_request_repository;
pub mod mem_hold_request_repository;

// Persistence port for hold requests. Ids are assigned by the store; rows
// are never deleted, only flagged via update.
#[async_trait]
pub trait HoldRequestRepository: Sync + Send {
    async fn create(&self, request: &NewHoldRequest, job_id: &str) -> HoldsResult<HoldRequestEntity>;

    async fn get(&self, id: i64) -> HoldsResult<HoldRequestEntity>;

    async fn query(&self, filter: &HoldRequestFilter) -> HoldsResult<Vec<HoldRequestEntity>>;

    async fn update(&self, id: i64, patch: &HoldRequestPatch) -> HoldsResult<HoldRequestEntity>;
}
