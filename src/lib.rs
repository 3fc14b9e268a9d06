//! coursedb - An in-memory course catalog served over HTTP

pub mod cli;
pub mod courses;
pub mod http_server;
pub mod observability;
