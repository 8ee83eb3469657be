use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::command::{Command, CommandError};
use crate::requests::domain::HoldRequestService;
use crate::requests::domain::model::HoldRequestFilter;
use crate::requests::dto::HoldRequestDto;

pub struct ListHoldRequestsCommand {
    service: Box<dyn HoldRequestService>,
}

impl ListHoldRequestsCommand {
    pub fn new(service: Box<dyn HoldRequestService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ListHoldRequestsCommandRequest {
    pub filter: HoldRequestFilter,
}

#[derive(Debug, Serialize)]
pub struct ListHoldRequestsCommandResponse {
    pub hold_requests: Vec<HoldRequestDto>,
}

#[async_trait]
impl Command<ListHoldRequestsCommandRequest, ListHoldRequestsCommandResponse> for ListHoldRequestsCommand {
    async fn execute(&self, req: ListHoldRequestsCommandRequest)
                     -> Result<ListHoldRequestsCommandResponse, CommandError> {
        let hold_requests = self.service.query(&req.filter).await?;
        Ok(ListHoldRequestsCommandResponse { hold_requests })
    }
}
