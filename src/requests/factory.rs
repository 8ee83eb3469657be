use aws_sdk_dynamodb::types::ScalarAttributeType;

use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway;
use crate::requests::domain::HoldRequestService;
use crate::requests::domain::service::HoldRequestServiceImpl;
use crate::requests::repository::HoldRequestRepository;
use crate::requests::repository::ddb_hold_request_repository::{counter_table_name,
                                                               DDBHoldRequestRepository};
use crate::requests::repository::mem_hold_request_repository::MemHoldRequestRepository;
use crate::utils::ddb::{build_db_client, create_table};

// factory method to create hold-request repository
pub async fn create_hold_request_repository(config: &Configuration,
                                            store: RepositoryStore) -> Box<dyn HoldRequestRepository> {
    match store {
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store).await;
            // local dynamodb does not have the tables provisioned
            let _ = create_table(&client, config.table_name.as_str(),
                                 "id", ScalarAttributeType::N).await;
            let _ = create_table(&client, counter_table_name(config.table_name.as_str()).as_str(),
                                 "name", ScalarAttributeType::S).await;
            Box::new(DDBHoldRequestRepository::new(client, config.table_name.as_str()))
        }
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store).await;
            Box::new(DDBHoldRequestRepository::new(client, config.table_name.as_str()))
        }
        RepositoryStore::InMemory => {
            Box::new(MemHoldRequestRepository::shared())
        }
    }
}

// factory method to create hold-request service
pub async fn create_hold_request_service(config: &Configuration,
                                         store: RepositoryStore) -> Box<dyn HoldRequestService> {
    let repository = create_hold_request_repository(config, store).await;
    let job_gateway = gateway::factory::create_job_gateway(config).await;
    Box::new(HoldRequestServiceImpl::new(repository, job_gateway))
}
