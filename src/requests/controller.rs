use axum::{Json, Router};
use axum::extract::{Path, Query, State};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderMap, Method};
use axum::routing::get;
use serde_json::Value;

use crate::core::auth::{authorize_request, Identity};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{json_to_server_error, AppState, ServerError};
use crate::core::holds::HoldsError;
use crate::core::response::SuccessResponse;
use crate::requests::command::create_hold_request_cmd::{CreateHoldRequestCommand,
                                                        CreateHoldRequestCommandRequest};
use crate::requests::command::get_hold_request_cmd::{GetHoldRequestCommand,
                                                     GetHoldRequestCommandRequest};
use crate::requests::command::list_hold_requests_cmd::{ListHoldRequestsCommand,
                                                       ListHoldRequestsCommandRequest};
use crate::requests::command::update_hold_request_cmd::{UpdateHoldRequestCommand,
                                                        UpdateHoldRequestCommandRequest};
use crate::requests::domain::model::HoldRequestFilter;
use crate::requests::dto::HoldRequestDto;
use crate::requests::factory;

pub fn hold_request_routes<B>() -> Router<AppState, B>
where
    B: axum::body::HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<axum::BoxError>,
{
    Router::new()
        .route("/hold-requests",
               get(get_hold_requests).post(create_hold_request))
        .route("/hold-requests/:id",
               get(get_hold_request).patch(update_hold_request).put(update_hold_request))
}

pub async fn create_hold_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<SuccessResponse<HoldRequestDto>>, ServerError> {
    tracing::debug!("create hold request initiated");
    // a body that is not JSON still gets the error envelope
    let Json(body) = json.map_err(json_to_server_error)?;
    let identity = Identity::from_headers(&headers).map_err(to_server_error)?;
    authorize_request(&state.config, &Method::POST, &identity, body_patron(&body))
        .map_err(to_server_error)?;
    let req: CreateHoldRequestCommandRequest =
        serde_json::from_value(body).map_err(json_to_server_error)?;
    let service = factory::create_hold_request_service(&state.config, state.store).await;
    let res = CreateHoldRequestCommand::new(service).execute(req).await?;
    Ok(Json(SuccessResponse::new(res.hold_request)))
}

pub async fn get_hold_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    filter: Result<Query<HoldRequestFilter>, QueryRejection>) -> Result<Json<SuccessResponse<Vec<HoldRequestDto>>>, ServerError> {
    tracing::debug!("list hold requests initiated");
    let Query(filter) = filter.map_err(json_to_server_error)?;
    let identity = Identity::from_headers(&headers).map_err(to_server_error)?;
    authorize_request(&state.config, &Method::GET, &identity, None)
        .map_err(to_server_error)?;
    let service = factory::create_hold_request_service(&state.config, state.store).await;
    let req = ListHoldRequestsCommandRequest { filter };
    let res = ListHoldRequestsCommand::new(service).execute(req).await?;
    Ok(Json(SuccessResponse::new(res.hold_requests)))
}

pub async fn get_hold_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Path<i64>) -> Result<Json<SuccessResponse<HoldRequestDto>>, ServerError> {
    tracing::debug!("get hold request initiated for {}", id.0);
    let identity = Identity::from_headers(&headers).map_err(to_server_error)?;
    authorize_request(&state.config, &Method::GET, &identity, None)
        .map_err(to_server_error)?;
    let service = factory::create_hold_request_service(&state.config, state.store).await;
    let res = GetHoldRequestCommand::new(service)
        .execute(GetHoldRequestCommandRequest { id: id.0 }).await?;
    Ok(Json(SuccessResponse::new(res.hold_request)))
}

pub async fn update_hold_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Path<i64>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<SuccessResponse<HoldRequestDto>>, ServerError> {
    tracing::debug!("update hold request initiated for {}", id.0);
    let Json(body) = json.map_err(json_to_server_error)?;
    let identity = Identity::from_headers(&headers).map_err(to_server_error)?;
    authorize_request(&state.config, &Method::PATCH, &identity, body_patron(&body))
        .map_err(to_server_error)?;
    let update = serde_json::from_value(body).map_err(json_to_server_error)?;
    let service = factory::create_hold_request_service(&state.config, state.store).await;
    let res = UpdateHoldRequestCommand::new(service)
        .execute(UpdateHoldRequestCommandRequest { id: id.0, update }).await?;
    Ok(Json(SuccessResponse::new(res.hold_request)))
}

// patron id from the request body, used only for the patron-match fallback
fn body_patron(json: &Value) -> Option<&str> {
    json.get("patron").and_then(|v| v.as_str())
}

fn to_server_error(err: HoldsError) -> ServerError {
    ServerError::from(CommandError::from(err))
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::body::Body;
    use axum::extract::{Path, Query, State};
    use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::core::auth::IDENTITY_HEADER;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::requests::controller::{create_hold_request, get_hold_request, get_hold_requests,
                                      hold_request_routes, update_hold_request};
    use crate::requests::domain::model::HoldRequestFilter;

    fn app_state() -> State<AppState> {
        State(AppState::new(Configuration::new("hold_requests"), RepositoryStore::InMemory))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let app = hold_request_routes().with_state(app_state().0);
        let response = app.oneshot(request).await.expect("should route");
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.expect("should read body");
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    fn identity_headers(scope: &str) -> HeaderMap {
        let header = json!({
            "token": "test-token",
            "identity": {"sub": "67793666", "scope": scope}
        }).to_string();
        let mut headers = HeaderMap::new();
        headers.insert(IDENTITY_HEADER,
                       HeaderValue::from_str(header.as_str()).expect("should build header"));
        headers
    }

    fn create_payload(patron: &str) -> serde_json::Value {
        json!({
            "patron": patron,
            "nyplSource": "sierra-nypl",
            "recordType": "i",
            "record": "32312222x",
            "pickupLocation": "sasb"
        })
    }

    #[tokio::test]
    async fn test_should_create_and_get_hold_request() {
        let headers = identity_headers("readwrite:hold_request");
        let created = create_hold_request(
            app_state(), headers.clone(), Ok(Json(create_payload("2001"))))
            .await.expect("should create");
        assert!(created.data.id > 0);
        assert!(!created.data.job_id.is_empty());

        let loaded = get_hold_request(app_state(), headers, Path(created.data.id))
            .await.expect("should get");
        assert_eq!(created.data, loaded.data);
    }

    #[tokio::test]
    async fn test_should_list_hold_requests_by_patron() {
        let headers = identity_headers("readwrite:hold_request");
        create_hold_request(app_state(), headers.clone(), Ok(Json(create_payload("2002"))))
            .await.expect("should create");
        let filter = HoldRequestFilter { patron: Some("2002".to_string()), ..Default::default() };
        let listed = get_hold_requests(app_state(), headers, Ok(Query(filter)))
            .await.expect("should list");
        assert_eq!(1, listed.data.len());
    }

    #[tokio::test]
    async fn test_should_update_hold_request_flags() {
        let headers = identity_headers("write:hold_request");
        let created = create_hold_request(
            app_state(), headers.clone(), Ok(Json(create_payload("2003"))))
            .await.expect("should create");
        let updated = update_hold_request(
            app_state(), headers, Path(created.data.id),
            Ok(Json(json!({"success": true, "processed": true}))))
            .await.expect("should update");
        assert!(updated.data.success);
        assert!(updated.data.processed);
    }

    #[tokio::test]
    async fn test_should_reject_create_without_identity_header() {
        let err = create_hold_request(
            app_state(), HeaderMap::new(), Ok(Json(create_payload("2004"))))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::FORBIDDEN, err.0);
        assert_eq!("invalid-scope", err.1.error_type.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_create_with_read_only_scope() {
        let headers = identity_headers("read:hold_request");
        let err = create_hold_request(app_state(), headers, Ok(Json(create_payload("2005"))))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::FORBIDDEN, err.0);
    }

    #[tokio::test]
    async fn test_should_reject_get_with_write_only_scope() {
        let headers = identity_headers("write:hold_request");
        let err = get_hold_request(app_state(), headers, Path(10001))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::FORBIDDEN, err.0);
    }

    #[tokio::test]
    async fn test_should_return_not_found_for_unknown_id() {
        let headers = identity_headers("read:hold_request");
        let err = get_hold_request(app_state(), headers, Path(9990001))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::NOT_FOUND, err.0);
        assert_eq!("hold-request-not-found", err.1.error_type.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_create_payload() {
        let headers = identity_headers("write:hold_request");
        let err = create_hold_request(
            app_state(), headers, Ok(Json(json!({"patron": "2006"}))))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        assert_eq!("invalid-request", err.1.error_type.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_create_without_location() {
        let headers = identity_headers("write:hold_request");
        let mut payload = create_payload("2007");
        payload.as_object_mut().unwrap().remove("pickupLocation");
        let err = create_hold_request(app_state(), headers, Ok(Json(payload)))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        assert_eq!("missing-location", err.1.error_type.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_update_with_non_boolean_flags() {
        let headers = identity_headers("write:hold_request");
        let created = create_hold_request(
            app_state(), headers.clone(), Ok(Json(create_payload("2008"))))
            .await.expect("should create");
        let err = update_hold_request(
            app_state(), headers, Path(created.data.id), Ok(Json(json!({"success": "yes"}))))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        assert_eq!("invalid-flags", err.1.error_type.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_update_with_unrecognized_field() {
        let headers = identity_headers("write:hold_request");
        let created = create_hold_request(
            app_state(), headers.clone(), Ok(Json(create_payload("2009"))))
            .await.expect("should create");
        let err = update_hold_request(
            app_state(), headers, Path(created.data.id),
            Ok(Json(json!({"success": true, "recordType": "i"}))))
            .await.map(|_| ()).unwrap_err();
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        assert_eq!("invalid-request", err.1.error_type.as_str());
    }

    #[tokio::test]
    async fn test_should_wrap_malformed_body_in_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/hold-requests")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .expect("should build request");
        let (status, body) = send(request).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(400, body["statusCode"]);
        assert_eq!("invalid-request", body["type"]);
    }

    #[tokio::test]
    async fn test_should_wrap_bad_query_value_in_error_envelope() {
        let request = Request::builder()
            .method("GET")
            .uri("/hold-requests?processed=banana")
            .body(Body::empty())
            .expect("should build request");
        let (status, body) = send(request).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!(400, body["statusCode"]);
        assert_eq!("invalid-request", body["type"]);
    }
}
