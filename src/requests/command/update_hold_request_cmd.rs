use async_trait::async_trait;
use serde::Serialize;

use crate::core::command::{Command, CommandError};
use crate::requests::domain::HoldRequestService;
use crate::requests::domain::model::HoldRequestUpdate;
use crate::requests::dto::HoldRequestDto;

pub struct UpdateHoldRequestCommand {
    service: Box<dyn HoldRequestService>,
}

impl UpdateHoldRequestCommand {
    pub fn new(service: Box<dyn HoldRequestService>) -> Self {
        Self { service }
    }
}

#[derive(Debug)]
pub struct UpdateHoldRequestCommandRequest {
    pub id: i64,
    pub update: HoldRequestUpdate,
}

#[derive(Debug, Serialize)]
pub struct UpdateHoldRequestCommandResponse {
    pub hold_request: HoldRequestDto,
}

#[async_trait]
impl Command<UpdateHoldRequestCommandRequest, UpdateHoldRequestCommandResponse> for UpdateHoldRequestCommand {
    async fn execute(&self, req: UpdateHoldRequestCommandRequest)
                     -> Result<UpdateHoldRequestCommandResponse, CommandError> {
        let hold_request = self.service.update(req.id, req.update).await?;
        Ok(UpdateHoldRequestCommandResponse { hold_request })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::command::{Command, CommandError};
    use crate::gateway::jobs::NoopJobGateway;
    use crate::requests::command::update_hold_request_cmd::{UpdateHoldRequestCommand,
                                                            UpdateHoldRequestCommandRequest};
    use crate::requests::domain::HoldRequestService;
    use crate::requests::domain::model::{HoldRequestUpdate, NewHoldRequest};
    use crate::requests::domain::service::HoldRequestServiceImpl;
    use crate::requests::repository::mem_hold_request_repository::MemHoldRequestRepository;

    fn build_service() -> Box<dyn HoldRequestService> {
        Box::new(HoldRequestServiceImpl::new(
            Box::new(MemHoldRequestRepository::isolated()), Box::new(NoopJobGateway)))
    }

    fn hold_request() -> NewHoldRequest {
        serde_json::from_value(json!({
            "patron": "67793666",
            "nyplSource": "sierra-nypl",
            "recordType": "i",
            "record": "32312222x",
            "pickupLocation": "sasb"
        })).expect("should decode")
    }

    #[tokio::test]
    async fn test_should_update_hold_request_flags() {
        let service = build_service();
        let saved = service.create(hold_request()).await.expect("should create");
        let command = UpdateHoldRequestCommand::new(service);
        let update: HoldRequestUpdate =
            serde_json::from_value(json!({"success": true, "processed": true})).unwrap();
        let res = command.execute(UpdateHoldRequestCommandRequest { id: saved.id, update })
            .await.expect("should update");
        assert!(res.hold_request.success);
        assert!(res.hold_request.processed);
    }

    #[tokio::test]
    async fn test_should_fail_update_with_non_boolean_flags() {
        let service = build_service();
        let saved = service.create(hold_request()).await.expect("should create");
        let command = UpdateHoldRequestCommand::new(service);
        let update: HoldRequestUpdate =
            serde_json::from_value(json!({"success": 1})).unwrap();
        let err = command.execute(UpdateHoldRequestCommandRequest { id: saved.id, update })
            .await.unwrap_err();
        assert!(matches!(err, CommandError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_should_fail_update_for_unknown_id() {
        let command = UpdateHoldRequestCommand::new(build_service());
        let update: HoldRequestUpdate =
            serde_json::from_value(json!({"processed": true})).unwrap();
        let err = command.execute(UpdateHoldRequestCommandRequest { id: 10001, update })
            .await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
