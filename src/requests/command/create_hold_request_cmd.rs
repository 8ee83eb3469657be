use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::requests::domain::HoldRequestService;
use crate::requests::domain::model::NewHoldRequest;
use crate::requests::dto::HoldRequestDto;

pub struct CreateHoldRequestCommand {
    service: Box<dyn HoldRequestService>,
}

impl CreateHoldRequestCommand {
    pub fn new(service: Box<dyn HoldRequestService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CreateHoldRequestCommandRequest {
    pub request: NewHoldRequest,
}

#[derive(Debug, Serialize)]
pub struct CreateHoldRequestCommandResponse {
    pub hold_request: HoldRequestDto,
}

#[async_trait]
impl Command<CreateHoldRequestCommandRequest, CreateHoldRequestCommandResponse> for CreateHoldRequestCommand {
    async fn execute(&self, req: CreateHoldRequestCommandRequest)
                     -> Result<CreateHoldRequestCommandResponse, CommandError> {
        let hold_request = self.service.create(req.request).await?;
        Ok(CreateHoldRequestCommandResponse { hold_request })
    }
}
