use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::core::holds::{HoldsError, HoldsResult, RequestType};
use crate::requests::domain::model::{ElectronicDocumentData, HoldRequestEntity, HoldRequestFilter,
                                     HoldRequestPatch, NewHoldRequest};
use crate::requests::repository::HoldRequestRepository;
use crate::utils::date::format_date;
use crate::utils::ddb::{parse_bool_attribute, parse_date_attribute, parse_item,
                        parse_map_attribute, parse_number_attribute, parse_opt_number_attribute,
                        parse_string_attribute};

pub struct DDBHoldRequestRepository {
    client: Client,
    table_name: String,
    counter_table_name: String,
}

impl DDBHoldRequestRepository {
    pub fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            counter_table_name: counter_table_name(table_name),
        }
    }

    // monotonic id from an ADD on the counter table
    async fn next_id(&self) -> HoldsResult<i64> {
        let out = self.client
            .update_item()
            .table_name(self.counter_table_name.as_str())
            .key("name", AttributeValue::S("hold_request_id".to_string()))
            .update_expression("ADD next_id :one")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await?;
        match out.attributes() {
            Some(attributes) => Ok(parse_number_attribute("next_id", attributes)),
            None => Err(HoldsError::runtime("failed to allocate hold request id", None)),
        }
    }
}

pub fn counter_table_name(table_name: &str) -> String {
    format!("{}_id_seq", table_name)
}

#[async_trait]
impl HoldRequestRepository for DDBHoldRequestRepository {
    async fn create(&self, request: &NewHoldRequest, job_id: &str) -> HoldsResult<HoldRequestEntity> {
        let id = self.next_id().await?;
        let entity = HoldRequestEntity::from_new(request, id, job_id);
        let item = parse_item(serde_json::to_value(&entity)?)?;
        self.client
            .put_item()
            .table_name(self.table_name.as_str())
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(#id)")
            .expression_attribute_names("#id", "id")
            .send()
            .await?;
        Ok(entity)
    }

    async fn get(&self, id: i64) -> HoldsResult<HoldRequestEntity> {
        let out = self.client
            .get_item()
            .table_name(self.table_name.as_str())
            .key("id", AttributeValue::N(id.to_string()))
            .send()
            .await?;
        match out.item() {
            Some(item) => Ok(HoldRequestEntity::from(item)),
            None => {
                Err(HoldsError::not_found(
                    format!("hold request not found for id {}", id).as_str()))
            }
        }
    }

    async fn query(&self, filter: &HoldRequestFilter) -> HoldsResult<Vec<HoldRequestEntity>> {
        let mut conditions = vec![];
        let mut names = HashMap::new();
        let mut values = HashMap::new();
        if let Some(patron) = &filter.patron {
            conditions.push("#patron = :patron");
            names.insert("#patron".to_string(), "patron".to_string());
            values.insert(":patron".to_string(), AttributeValue::S(patron.to_string()));
        }
        if let Some(record) = &filter.record {
            conditions.push("#record = :record");
            names.insert("#record".to_string(), "record".to_string());
            values.insert(":record".to_string(), AttributeValue::S(record.to_string()));
        }
        if let Some(processed) = filter.processed {
            conditions.push("#processed = :processed");
            names.insert("#processed".to_string(), "processed".to_string());
            values.insert(":processed".to_string(), AttributeValue::Bool(processed));
        }
        if let Some(day) = &filter.created_date {
            conditions.push("begins_with(#created_date, :created_date)");
            names.insert("#created_date".to_string(), "created_date".to_string());
            values.insert(":created_date".to_string(), AttributeValue::S(day.to_string()));
        }

        let mut entities = vec![];
        let mut last_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let mut scan = self.client
                .scan()
                .table_name(self.table_name.as_str())
                .set_exclusive_start_key(last_key.clone());
            if !conditions.is_empty() {
                scan = scan
                    .filter_expression(conditions.join(" AND "))
                    .set_expression_attribute_names(Some(names.clone()))
                    .set_expression_attribute_values(Some(values.clone()));
            }
            let out = scan.send().await?;
            if let Some(items) = out.items() {
                entities.extend(items.iter().map(HoldRequestEntity::from));
            }
            last_key = out.last_evaluated_key().cloned();
            if last_key.is_none() {
                return Ok(entities);
            }
        }
    }

    async fn update(&self, id: i64, patch: &HoldRequestPatch) -> HoldsResult<HoldRequestEntity> {
        let mut assignments = vec!["#updated_date = :updated_date"];
        let mut names = HashMap::from([
            ("#id".to_string(), "id".to_string()),
            ("#updated_date".to_string(), "updated_date".to_string()),
        ]);
        let mut values = HashMap::from([
            (":updated_date".to_string(),
             AttributeValue::S(format_date(chrono::Utc::now()))),
        ]);
        if let Some(success) = patch.success {
            assignments.push("#success = :success");
            names.insert("#success".to_string(), "success".to_string());
            values.insert(":success".to_string(), AttributeValue::Bool(success));
        }
        if let Some(processed) = patch.processed {
            assignments.push("#processed = :processed");
            names.insert("#processed".to_string(), "processed".to_string());
            values.insert(":processed".to_string(), AttributeValue::Bool(processed));
        }

        // condition failure maps to not-found
        let out = self.client
            .update_item()
            .table_name(self.table_name.as_str())
            .key("id", AttributeValue::N(id.to_string()))
            .update_expression(format!("SET {}", assignments.join(", ")))
            .condition_expression("attribute_exists(#id)")
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await?;
        match out.attributes() {
            Some(attributes) => Ok(HoldRequestEntity::from(attributes)),
            None => {
                Err(HoldsError::runtime(
                    format!("no attributes returned for hold request {}", id).as_str(), None))
            }
        }
    }
}

impl From<&HashMap<String, AttributeValue>> for HoldRequestEntity {
    fn from(map: &HashMap<String, AttributeValue>) -> Self {
        let doc_delivery_data: Option<ElectronicDocumentData> =
            parse_map_attribute("doc_delivery_data", map)
                .and_then(|value| serde_json::from_value(value).ok());
        Self {
            id: parse_number_attribute("id", map),
            job_id: parse_string_attribute("job_id", map).unwrap_or_default(),
            patron: parse_string_attribute("patron", map).unwrap_or_default(),
            nypl_source: parse_string_attribute("nypl_source", map).unwrap_or_default(),
            request_type: RequestType::from(
                parse_string_attribute("request_type", map).unwrap_or_default()),
            record_type: parse_string_attribute("record_type", map).unwrap_or_default(),
            record: parse_string_attribute("record", map).unwrap_or_default(),
            pickup_location: parse_string_attribute("pickup_location", map),
            delivery_location: parse_string_attribute("delivery_location", map),
            needed_by: parse_date_attribute("needed_by", map),
            number_of_copies: parse_opt_number_attribute("number_of_copies", map),
            doc_delivery_data,
            success: parse_bool_attribute("success", map),
            processed: parse_bool_attribute("processed", map),
            created_date: parse_date_attribute("created_date", map)
                .unwrap_or_else(chrono::Utc::now),
            updated_date: parse_date_attribute("updated_date", map),
        }
    }
}
