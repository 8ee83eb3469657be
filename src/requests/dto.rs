use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::holds::RequestType;
use crate::requests::domain::model::{ElectronicDocumentData, HoldRequestEntity};
use crate::utils::date::{opt_serializer, serializer};

// Wire view of a hold request. Unset optional fields serialize as explicit
// nulls so clients see a stable shape.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldRequestDto {
    pub id: i64,
    pub job_id: String,
    pub patron: String,
    pub nypl_source: String,
    pub request_type: RequestType,
    pub record_type: String,
    pub record: String,
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
    #[serde(default, with = "opt_serializer")]
    pub needed_by: Option<DateTime<Utc>>,
    pub number_of_copies: Option<i64>,
    pub doc_delivery_data: Option<ElectronicDocumentData>,
    pub success: bool,
    pub processed: bool,
    #[serde(with = "serializer")]
    pub created_date: DateTime<Utc>,
    #[serde(default, with = "opt_serializer")]
    pub updated_date: Option<DateTime<Utc>>,
}

impl From<&HoldRequestEntity> for HoldRequestDto {
    fn from(entity: &HoldRequestEntity) -> Self {
        Self {
            id: entity.id,
            job_id: entity.job_id.to_string(),
            patron: entity.patron.to_string(),
            nypl_source: entity.nypl_source.to_string(),
            request_type: entity.request_type,
            record_type: entity.record_type.to_string(),
            record: entity.record.to_string(),
            pickup_location: entity.pickup_location.clone(),
            delivery_location: entity.delivery_location.clone(),
            needed_by: entity.needed_by,
            number_of_copies: entity.number_of_copies,
            doc_delivery_data: entity.doc_delivery_data.clone(),
            success: entity.success,
            processed: entity.processed,
            created_date: entity.created_date,
            updated_date: entity.updated_date,
        }
    }
}
