//! # Course HTTP Server Module
//!
//! Axum server exposing the course catalog.
//!
//! # Endpoints
//!
//! - `GET /` - HTML greeting
//! - `GET /courses` - All courses
//! - `GET /course/:id` - One course
//! - `POST /course` - Create a course
//! - `PUT /course/:id` - Replace a course, keeping its id
//! - `DELETE /course/:id` - Delete a course

pub mod config;
pub mod course_routes;
pub mod errors;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use course_routes::{course_routes, CourseReply, CourseState};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
