//! Observability for the course service
//!
//! Structured JSON logging only. Every request produces an `HTTP_REQUEST`
//! line and every course operation a `COURSE_*` line.
//!
//! ```ignore
//! use coursedb::observability::Logger;
//!
//! Logger::info("COURSE_CREATE", &[("id", "3")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
