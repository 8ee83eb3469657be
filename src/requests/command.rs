pub mod create_hold_request_cmd;
pub mod get_hold_request_cmd;
pub mod list_hold_requests_cmd;
pub mod update_hold_request_cmd;
