use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::requests::domain::HoldRequestService;
use crate::requests::dto::HoldRequestDto;

pub struct GetHoldRequestCommand {
    service: Box<dyn HoldRequestService>,
}

impl GetHoldRequestCommand {
    pub fn new(service: Box<dyn HoldRequestService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetHoldRequestCommandRequest {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct GetHoldRequestCommandResponse {
    pub hold_request: HoldRequestDto,
}

#[async_trait]
impl Command<GetHoldRequestCommandRequest, GetHoldRequestCommandResponse> for GetHoldRequestCommand {
    async fn execute(&self, req: GetHoldRequestCommandRequest)
                     -> Result<GetHoldRequestCommandResponse, CommandError> {
        let hold_request = self.service.get(req.id).await?;
        Ok(GetHoldRequestCommandResponse { hold_request })
    }
}
