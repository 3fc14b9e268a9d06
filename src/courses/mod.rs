//! # Courses
//!
//! The course record model, its JSON codec, id generation, and the
//! in-memory store the HTTP handlers operate on.

pub mod codec;
pub mod errors;
pub mod id;
pub mod model;
pub mod store;

pub use codec::{CodecError, CodecResult};
pub use errors::{StoreError, StoreResult};
pub use id::{CounterIdGenerator, IdGenerator, IdStrategy, RandomIdGenerator, UuidIdGenerator};
pub use model::{seed_courses, Author, Course};
pub use store::CourseStore;
