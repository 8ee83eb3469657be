use async_trait::async_trait;

use crate::core::holds::HoldsResult;
use crate::requests::domain::model::{HoldRequestFilter, HoldRequestUpdate, NewHoldRequest};
use crate::requests::dto::HoldRequestDto;

pub mod model;
pub mod service;
pub mod validator;

#[async_trait]
pub trait HoldRequestService: Sync + Send {
    async fn create(&self, request: NewHoldRequest) -> HoldsResult<HoldRequestDto>;

    async fn get(&self, id: i64) -> HoldsResult<HoldRequestDto>;

    async fn query(&self, filter: &HoldRequestFilter) -> HoldsResult<Vec<HoldRequestDto>>;

    async fn update(&self, id: i64, update: HoldRequestUpdate) -> HoldsResult<HoldRequestDto>;
}
