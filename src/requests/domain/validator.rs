use serde_json::Value;

use crate::core::holds::{HoldsError, HoldsResult, RequestType};
use crate::requests::domain::model::{HoldRequestPatch, HoldRequestUpdate, NewHoldRequest};

// Checks a decoded create payload and normalizes it in place. EDD requests
// never carry physical locations, so both are cleared before the EDD details
// are checked.
pub fn validate_for_create(request: &mut NewHoldRequest) -> HoldsResult<()> {
    if request.request_type != RequestType::Edd {
        if !has_value(&request.pickup_location) && !has_value(&request.delivery_location) {
            return Err(HoldsError::validation(
                "Hold request is missing a pickupLocation or deliveryLocation value.",
                Some("missing-location".to_string())));
        }
        return Ok(());
    }
    request.pickup_location = None;
    request.delivery_location = None;
    match &request.doc_delivery_data {
        Some(edd) if edd.is_complete() => Ok(()),
        _ => Err(HoldsError::validation(
            "EDD request is missing all or some of its data.",
            Some("missing-edd-data".to_string()))),
    }
}

pub fn validate_for_update(update: &HoldRequestUpdate) -> HoldsResult<HoldRequestPatch> {
    Ok(HoldRequestPatch {
        success: validate_flag("success", &update.success)?,
        processed: validate_flag("processed", &update.processed)?,
    })
}

fn validate_flag(name: &str, value: &Option<Value>) -> HoldsResult<Option<bool>> {
    match value {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(HoldsError::validation(
            format!("The {} flag must be a boolean.", name).as_str(),
            Some("invalid-flags".to_string()))),
    }
}

fn has_value(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::holds::HoldsError;
    use crate::requests::domain::model::{HoldRequestUpdate, NewHoldRequest};
    use crate::requests::domain::validator::{validate_for_create, validate_for_update};

    fn decode(payload: serde_json::Value) -> NewHoldRequest {
        serde_json::from_value(payload).expect("should decode")
    }

    fn edd_payload() -> serde_json::Value {
        json!({
            "patron": "67793666",
            "nyplSource": "sierra-nypl",
            "requestType": "edd",
            "recordType": "i",
            "record": "32312222x",
            "pickupLocation": "sasb",
            "docDeliveryData": {
                "emailAddress": "user@example.com",
                "chapterTitle": "Chapter One",
                "startPage": "100",
                "endPage": "150"
            }
        })
    }

    fn reason_code(err: HoldsError) -> Option<String> {
        match err {
            HoldsError::Validation { reason_code, .. } => reason_code,
            other => panic!("expected validation error, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_should_accept_hold_with_pickup_location() {
        let mut request = decode(json!({
            "patron": "67793666",
            "nyplSource": "sierra-nypl",
            "recordType": "i",
            "record": "32312222x",
            "pickupLocation": "sasb"
        }));
        validate_for_create(&mut request).expect("should validate");
    }

    #[tokio::test]
    async fn test_should_accept_hold_with_delivery_location_only() {
        let mut request = decode(json!({
            "patron": "67793666",
            "nyplSource": "sierra-nypl",
            "recordType": "i",
            "record": "32312222x",
            "deliveryLocation": "mab"
        }));
        validate_for_create(&mut request).expect("should validate");
    }

    #[tokio::test]
    async fn test_should_reject_hold_without_locations() {
        let mut request = decode(json!({
            "patron": "67793666",
            "nyplSource": "sierra-nypl",
            "recordType": "i",
            "record": "32312222x",
            "pickupLocation": ""
        }));
        let err = validate_for_create(&mut request).unwrap_err();
        assert_eq!(Some("missing-location".to_string()), reason_code(err));
    }

    #[tokio::test]
    async fn test_should_accept_edd_and_clear_locations() {
        let mut request = decode(edd_payload());
        validate_for_create(&mut request).expect("should validate");
        assert_eq!(None, request.pickup_location);
        assert_eq!(None, request.delivery_location);
    }

    #[tokio::test]
    async fn test_should_reject_edd_without_details() {
        let mut payload = edd_payload();
        payload.as_object_mut().unwrap().remove("docDeliveryData");
        let mut request = decode(payload);
        let err = validate_for_create(&mut request).unwrap_err();
        assert_eq!(Some("missing-edd-data".to_string()), reason_code(err));
    }

    #[tokio::test]
    async fn test_should_reject_edd_with_blank_required_field() {
        let mut payload = edd_payload();
        payload["docDeliveryData"]["emailAddress"] = json!("");
        let mut request = decode(payload);
        let err = validate_for_create(&mut request).unwrap_err();
        assert_eq!(Some("missing-edd-data".to_string()), reason_code(err));
    }

    #[tokio::test]
    async fn test_should_accept_boolean_update_flags() {
        let update: HoldRequestUpdate =
            serde_json::from_value(json!({"success": true})).unwrap();
        let patch = validate_for_update(&update).expect("should validate");
        assert_eq!(Some(true), patch.success);
        assert_eq!(None, patch.processed);
    }

    #[tokio::test]
    async fn test_should_reject_non_boolean_update_flags() {
        let update: HoldRequestUpdate =
            serde_json::from_value(json!({"success": "true", "processed": true})).unwrap();
        let err = validate_for_update(&update).unwrap_err();
        assert_eq!(Some("invalid-flags".to_string()), reason_code(err));
    }
}
