use axum::Router;
use lambda_http::{run, Error};

use hold_requests_api::core::controller::AppState;
use hold_requests_api::core::domain::Configuration;
use hold_requests_api::core::repository::RepositoryStore;
use hold_requests_api::requests::controller::hold_request_routes;
use hold_requests_api::utils::ddb::setup_tracing;

const DEV_MODE: bool = false;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let state = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096"); // 200MB
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        AppState::new(Configuration::from_env(), RepositoryStore::LocalDynamoDB)
    } else {
        AppState::new(Configuration::from_env(), RepositoryStore::DynamoDB)
    };

    // both API versions expose the same routes
    let app = Router::new()
        .nest("/api/v0.1", hold_request_routes())
        .nest("/api/v0.2", hold_request_routes())
        .with_state(state);

    run(app).await
}
