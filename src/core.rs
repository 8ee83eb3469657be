pub mod auth;
pub mod command;
pub mod controller;
pub mod domain;
pub mod holds;
pub mod repository;
pub mod response;
