use serde::{Deserialize, Serialize};

// Backing store for the hold-request repository. InMemory is used by local
// runs and unit tests; the DynamoDB variants are the deployed stores.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    InMemory,
}
