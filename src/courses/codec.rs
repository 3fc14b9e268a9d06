//! JSON codec for course records
//!
//! Two decode flavours exist. `decode_lenient` never fails: it keeps every
//! field it can read and zero-fills the rest, which is what clients of the
//! catalog have always relied on. `decode_strict` reports what went wrong.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::observability::Logger;

use super::model::{Author, Course};

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// Request carried no body at all
    #[error("Request body is empty")]
    EmptyBody,

    /// Body is not a valid course document
    #[error("Malformed course JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Encode a single course
pub fn encode(course: &Course) -> Value {
    // Serializing a plain struct with string keys cannot fail.
    serde_json::to_value(course).unwrap_or(Value::Null)
}

/// Encode a list of courses as a JSON array
pub fn encode_all(courses: &[Course]) -> Value {
    Value::Array(courses.iter().map(encode).collect())
}

/// Decode a course, rejecting empty or malformed bodies.
///
/// Missing fields take their zero values. The id in the body is kept as
/// sent; callers decide whether to overwrite it.
pub fn decode_strict(body: &[u8]) -> CodecResult<Course> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CodecError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Decode a course, never failing.
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. Fields are taken one at a time: a field that is missing or has
/// the wrong type keeps its zero value while the others are still kept.
/// Bodies that are empty, not JSON, or not an object yield
/// `Course::default()`.
pub fn decode_lenient(body: &[u8]) -> Course {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next();

    match first {
        None => Course::default(),
        Some(Ok(Value::Object(fields))) => {
            let (course, mismatched) = course_from_fields(&fields);
            if !mismatched.is_empty() {
                Logger::warn(
                    "COURSE_DECODE_PARTIAL",
                    &[("fields", mismatched.join(",").as_str())],
                );
            }
            course
        }
        Some(Ok(other)) => {
            Logger::warn(
                "COURSE_DECODE_FALLBACK",
                &[("reason", format!("expected object, got {}", kind(&other)).as_str())],
            );
            Course::default()
        }
        Some(Err(err)) => {
            Logger::warn("COURSE_DECODE_FALLBACK", &[("reason", err.to_string().as_str())]);
            Course::default()
        }
    }
}

/// Build a course from a JSON object, returning the wire names of fields
/// that were present with the wrong type.
fn course_from_fields(fields: &Map<String, Value>) -> (Course, Vec<&'static str>) {
    let mut course = Course::default();
    let mut mismatched = Vec::new();

    match fields.get("course") {
        None | Some(Value::Null) => {}
        Some(Value::String(id)) => course.id = id.clone(),
        Some(_) => mismatched.push("course"),
    }
    match fields.get("coursename") {
        None | Some(Value::Null) => {}
        Some(Value::String(name)) => course.name = name.clone(),
        Some(_) => mismatched.push("coursename"),
    }
    match fields.get("price") {
        None | Some(Value::Null) => {}
        Some(value) => match value.as_i64() {
            Some(price) => course.price = price,
            None => mismatched.push("price"),
        },
    }
    match fields.get("author") {
        None | Some(Value::Null) => {}
        Some(Value::Object(author)) => {
            let mut parsed = Author::default();
            match author.get("fullname") {
                None | Some(Value::Null) => {}
                Some(Value::String(full_name)) => parsed.full_name = full_name.clone(),
                Some(_) => mismatched.push("author.fullname"),
            }
            match author.get("website") {
                None | Some(Value::Null) => {}
                Some(Value::String(website)) => parsed.website = website.clone(),
                Some(_) => mismatched.push("author.website"),
            }
            course.author = Some(parsed);
        }
        Some(_) => mismatched.push("author"),
    }

    (course, mismatched)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::model::{seed_courses, Author};
    use serde_json::json;

    #[test]
    fn test_encode_uses_wire_names() {
        let course = Course::new("7", "Rust", 499).with_author(Author::new("Ferris", "rust-lang.org"));
        assert_eq!(
            encode(&course),
            json!({
                "course": "7",
                "coursename": "Rust",
                "price": 499,
                "author": {"fullname": "Ferris", "website": "rust-lang.org"}
            })
        );
    }

    #[test]
    fn test_encode_missing_author_is_null() {
        let value = encode(&Course::new("1", "Go", 0));
        assert!(value["author"].is_null());
    }

    #[test]
    fn test_encode_all_preserves_order() {
        let value = encode_all(&seed_courses());
        let ids: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["course"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_round_trip_keeps_fields() {
        for course in seed_courses() {
            let bytes = serde_json::to_vec(&encode(&course)).unwrap();
            let decoded = decode_strict(&bytes).unwrap();
            assert_eq!(decoded.name, course.name);
            assert_eq!(decoded.price, course.price);
            assert_eq!(decoded.author, course.author);
            assert_eq!(decoded.id, course.id);
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let course = decode_strict(br#"{"coursename": "Docker"}"#).unwrap();
        assert_eq!(course.name, "Docker");
        assert_eq!(course.price, 0);
        assert!(course.id.is_empty());
        assert!(course.author.is_none());
    }

    #[test]
    fn test_null_author() {
        let course = decode_strict(br#"{"coursename": "K8s", "author": null}"#).unwrap();
        assert!(course.author.is_none());
    }

    #[test]
    fn test_strict_rejects_empty_body() {
        assert!(matches!(decode_strict(b""), Err(CodecError::EmptyBody)));
        assert!(matches!(decode_strict(b"  \n"), Err(CodecError::EmptyBody)));
    }

    #[test]
    fn test_strict_rejects_malformed() {
        assert!(matches!(
            decode_strict(b"{not json"),
            Err(CodecError::Malformed(_))
        ));
        assert!(matches!(
            decode_strict(br#"{"coursename": 12}"#),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn test_lenient_falls_back_to_zero_value() {
        assert_eq!(decode_lenient(b""), Course::default());
        assert_eq!(decode_lenient(b"   "), Course::default());
        assert_eq!(decode_lenient(b"{not json"), Course::default());
        assert_eq!(decode_lenient(b"{}"), Course::default());
        assert_eq!(decode_lenient(b"[1, 2]"), Course::default());
        assert_eq!(decode_lenient(b"\"Rust\""), Course::default());
    }

    #[test]
    fn test_lenient_keeps_fields_around_type_mismatch() {
        let course = decode_lenient(br#"{"coursename": "Rust", "price": "299"}"#);
        assert_eq!(course.name, "Rust");
        assert_eq!(course.price, 0);

        let course = decode_lenient(
            br#"{"course": 5, "coursename": "Go", "price": 120, "author": {"fullname": 1, "website": "go.dev"}}"#,
        );
        assert!(course.id.is_empty());
        assert_eq!(course.name, "Go");
        assert_eq!(course.price, 120);
        assert_eq!(course.author, Some(Author::new("", "go.dev")));
    }

    #[test]
    fn test_lenient_wrong_author_type() {
        let course = decode_lenient(br#"{"coursename": "Go", "author": "someone"}"#);
        assert_eq!(course.name, "Go");
        assert!(course.author.is_none());
    }

    #[test]
    fn test_lenient_ignores_trailing_data() {
        let course = decode_lenient(br#"{"coursename": "Rust", "price": 10} trailing"#);
        assert_eq!(course.name, "Rust");
        assert_eq!(course.price, 10);

        let course = decode_lenient(br#"{"coursename": "Rust"}{"coursename": "Second"}"#);
        assert_eq!(course.name, "Rust");
    }

    #[test]
    fn test_strict_rejects_trailing_data() {
        assert!(matches!(
            decode_strict(br#"{"coursename": "Rust"} trailing"#),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn test_lenient_matches_strict_on_valid_input() {
        for course in seed_courses() {
            let bytes = serde_json::to_vec(&encode(&course)).unwrap();
            assert_eq!(decode_lenient(&bytes), decode_strict(&bytes).unwrap());
        }
    }
}
