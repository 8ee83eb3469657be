use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::holds::RequestType;
use crate::utils::date::{opt_serializer, serializer};

// Details of an electronic-document-delivery request. The first four fields
// are required for a valid EDD hold request.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicDocumentData {
    pub email_address: String,
    pub chapter_title: String,
    pub start_page: String,
    pub end_page: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub request_notes: Option<String>,
}

impl ElectronicDocumentData {
    pub fn is_complete(&self) -> bool {
        !self.email_address.is_empty()
            && !self.chapter_title.is_empty()
            && !self.start_page.is_empty()
            && !self.end_page.is_empty()
    }
}

// Inbound create payload, decoded before validation. Distinct from the
// persisted HoldRequestEntity so a new request can never carry server-assigned
// fields such as id or jobId.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHoldRequest {
    pub patron: String,
    pub nypl_source: String,
    #[serde(default)]
    pub request_type: RequestType,
    pub record_type: String,
    pub record: String,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub delivery_location: Option<String>,
    #[serde(default, with = "opt_serializer")]
    pub needed_by: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_number_of_copies")]
    pub number_of_copies: Option<i64>,
    #[serde(default)]
    pub doc_delivery_data: Option<ElectronicDocumentData>,
}

// Inbound update payload. The flags stay raw JSON values so the validator
// can reject non-boolean input instead of coercing it. Any other field is
// rejected at decode time; patron is accepted because the patron-match
// fallback reads it from the same body.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HoldRequestUpdate {
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub processed: Option<Value>,
    #[serde(default)]
    pub patron: Option<String>,
}

// Validated update, produced by the validator from a HoldRequestUpdate.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct HoldRequestPatch {
    pub success: Option<bool>,
    pub processed: Option<bool>,
}

// List filter; all filters are conjunctive. created_date holds a YYYY-MM-DD
// day that prefix-matches the stored date string.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldRequestFilter {
    #[serde(default)]
    pub patron: Option<String>,
    #[serde(default)]
    pub record: Option<String>,
    #[serde(default)]
    pub processed: Option<bool>,
    #[serde(default)]
    pub created_date: Option<String>,
}

// Persisted hold request row.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HoldRequestEntity {
    pub id: i64,
    pub job_id: String,
    pub patron: String,
    pub nypl_source: String,
    pub request_type: RequestType,
    pub record_type: String,
    pub record: String,
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
    #[serde(with = "opt_serializer")]
    pub needed_by: Option<DateTime<Utc>>,
    pub number_of_copies: Option<i64>,
    pub doc_delivery_data: Option<ElectronicDocumentData>,
    pub success: bool,
    pub processed: bool,
    #[serde(with = "serializer")]
    pub created_date: DateTime<Utc>,
    #[serde(with = "opt_serializer")]
    pub updated_date: Option<DateTime<Utc>>,
}

impl HoldRequestEntity {
    pub fn from_new(request: &NewHoldRequest, id: i64, job_id: &str) -> Self {
        Self {
            id,
            job_id: job_id.to_string(),
            patron: request.patron.to_string(),
            nypl_source: request.nypl_source.to_string(),
            request_type: request.request_type,
            record_type: request.record_type.to_string(),
            record: request.record.to_string(),
            pickup_location: request.pickup_location.clone(),
            delivery_location: request.delivery_location.clone(),
            needed_by: request.needed_by,
            number_of_copies: request.number_of_copies,
            doc_delivery_data: request.doc_delivery_data.clone(),
            success: false,
            processed: false,
            created_date: Utc::now(),
            updated_date: None,
        }
    }

    pub fn apply(&mut self, patch: &HoldRequestPatch) {
        if let Some(success) = patch.success {
            self.success = success;
        }
        if let Some(processed) = patch.processed {
            self.processed = processed;
        }
        self.updated_date = Some(Utc::now());
    }
}

fn deserialize_number_of_copies<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    use serde::de::Error;
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            n.as_i64().map(Some)
                .ok_or_else(|| D::Error::custom("numberOfCopies must be an integer"))
        }
        // the one field where a numeric string is coerced
        Some(Value::String(s)) => {
            s.parse::<i64>().map(Some)
                .map_err(|_| D::Error::custom("numberOfCopies must be an integer"))
        }
        Some(other) => {
            Err(D::Error::custom(format!("numberOfCopies must be an integer, got {}", other)))
        }
    }
}
