use std::collections::HashMap;
use std::time::Duration;

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::endpoint::{DefaultResolver, Params};
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeDefinition, AttributeValue, KeySchemaElement, KeyType,
                              ProvisionedThroughput, ScalarAttributeType, TableStatus};
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use crate::core::holds::{HoldsError, HoldsResult};
use crate::core::repository::RepositoryStore;
use crate::utils::date::parse_date;

pub async fn create_table(client: &Client, table_name: &str,
                          pk: &str, pk_type: ScalarAttributeType) -> HoldsResult<()> {
    match client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(pk)
                .key_type(KeyType::Hash)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(pk)
                .attribute_type(pk_type)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(10)
                .write_capacity_units(10)
                .build(),
        )
        .send()
        .await
    {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Creating).await;
            Ok(())
        }
        Err(err) => {
            Err(HoldsError::database(format!("failed to create {} table due to {}",
                                             table_name, err).as_str(), None, false))
        }
    }
}

pub async fn delete_table(client: &Client, table_name: &str) -> HoldsResult<()> {
    match client.delete_table().table_name(table_name).send().await {
        Ok(_k) => {
            wait_until_table_status_is_not(client, table_name, TableStatus::Deleting).await;
            Ok(())
        }
        Err(err) => {
            Err(HoldsError::database(format!("failed to delete {} table due to {}",
                                             table_name, err).as_str(), None, false))
        }
    }
}

async fn wait_until_table_status_is_not(client: &Client, table_name: &str, other_status: TableStatus) {
    for _i in 0..30 {
        if let Ok(status) = describe_table(client, table_name).await {
            if status != other_status {
                return;
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

async fn describe_table(client: &Client, table_name: &str) -> HoldsResult<TableStatus> {
    match client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
    {
        Ok(out) => {
            if let Some(table) = out.table() {
                if let Some(status) = table.table_status() {
                    return Ok(status.clone());
                }
            }
            Err(HoldsError::runtime(format!("failed to describe {} table",
                                            table_name).as_str(), None))
        }
        Err(err) => {
            Err(HoldsError::database(format!("failed to describe {} table due to {}",
                                             table_name, err).as_str(), None, false))
        }
    }
}

pub fn parse_item(value: Value) -> Result<HashMap<String, AttributeValue>, String> {
    match value_to_item(value) {
        AttributeValue::M(map) => Ok(map),
        other => Err(format!("failed to parse {:?}", other)),
    }
}

pub fn parse_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<String> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        return Some(str.clone());
    }
    None
}

pub fn parse_bool_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> bool {
    if let Some(AttributeValue::Bool(b)) = map.get(name) {
        return *b;
    }
    false
}

pub fn parse_date_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<DateTime<Utc>> {
    if let Some(AttributeValue::S(str)) = map.get(name) {
        return parse_date(str);
    }
    None
}

pub fn parse_number_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> i64 {
    if let Some(AttributeValue::N(str)) = map.get(name) {
        if let Ok(n) = str.parse::<i64>() {
            return n;
        }
    }
    0
}

pub fn parse_opt_number_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<i64> {
    if let Some(AttributeValue::N(str)) = map.get(name) {
        if let Ok(n) = str.parse::<i64>() {
            return Some(n);
        }
    }
    None
}

pub fn parse_map_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<Value> {
    if let Some(attr @ AttributeValue::M(_)) = map.get(name) {
        return Some(item_to_value(attr));
    }
    None
}

fn value_to_item(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(a) => AttributeValue::L(a.into_iter().map(value_to_item).collect()),
        Value::Object(o) => {
            AttributeValue::M(o.into_iter().map(|(k, v)| (k, value_to_item(v))).collect())
        }
    }
}

fn item_to_value(attr: &AttributeValue) -> Value {
    match attr {
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => {
            n.parse::<i64>().ok()
                .map(|v| Value::Number(Number::from(v)))
                .unwrap_or(Value::Null)
        }
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::L(list) => Value::Array(list.iter().map(item_to_value).collect()),
        AttributeValue::M(map) => {
            Value::Object(map.iter().map(|(k, v)| (k.clone(), item_to_value(v))).collect::<Map<_, _>>())
        }
        _ => Value::Null,
    }
}

// helper method to build db-client with tracing enabled
pub async fn build_db_client(store: RepositoryStore) -> Client {
    match store {
        RepositoryStore::LocalDynamoDB => {
            // See https://docs.aws.amazon.com/sdk-for-rust/latest/dg/dynamodb-local.html
            let _params = Params::builder()
                .region("local".to_string())
                .use_fips(false)
                .use_dual_stack(false)
                .build()
                .expect("invalid params");
            let resolver = DefaultResolver::new();
            let dynamodb_local_config = aws_sdk_dynamodb::Config::builder()
                .region(Region::new("local"))
                .credentials_provider(
                    Credentials::new("AKIDLOCALSTACK", "localstacksecret", None, None, "faked"))
                .endpoint_resolver(resolver).build();
            Client::from_conf(dynamodb_local_config)
        }
        _ => {
            //Get config from environment.
            let config = aws_config::load_from_env().await;
            //Create the DynamoDB client.
            Client::new(&config)
        }
    }
}

// required to enable CloudWatch error logging by the runtime
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .json()
        .init();
}

impl From<SdkError<UpdateItemError>> for HoldsError {
    fn from(err: SdkError<UpdateItemError>) -> Self {
        if let SdkError::ServiceError(ctx) = &err {
            if ctx.err().is_conditional_check_failed_exception() {
                return HoldsError::not_found("hold request not found");
            }
        }
        let (retryable, reason) = retryable_sdk_error(&err);
        HoldsError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<PutItemError>> for HoldsError {
    fn from(err: SdkError<PutItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        HoldsError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<GetItemError>> for HoldsError {
    fn from(err: SdkError<GetItemError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        HoldsError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

impl From<SdkError<ScanError>> for HoldsError {
    fn from(err: SdkError<ScanError>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        HoldsError::database(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<T>(err: &SdkError<T>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => { (false, Some("ConstructionFailure".to_string())) }
        SdkError::TimeoutError(_) => { (true, Some("TimeoutError".to_string())) }
        SdkError::DispatchFailure(_) => { (true, Some("DispatchFailure".to_string())) }
        SdkError::ResponseError { .. } => { (true, Some("ResponseError".to_string())) }
        SdkError::ServiceError(ctx) => {
            (ctx.raw().http().status().is_server_error(), Some(ctx.raw().http().status().to_string()))
        }
        _ => { (true, Some("Unknown".to_string())) }
    }
}
