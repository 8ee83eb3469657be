pub mod core;
pub mod gateway;
pub mod requests;
pub mod utils;
