//! Course HTTP Routes
//!
//! CRUD endpoints over the in-memory course store.
//!
//! Lenient mode answers every request with 200: misses and empty payloads
//! come back as JSON string messages, and a miss on update or delete writes
//! no body at all. Strict mode maps the same cases to `ApiError`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::courses::{codec, Course, CourseStore, IdGenerator};
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::errors::{ApiError, ApiResult};

pub const HOME_PAGE: &str = "<h1>Welcome to the course API</h1>";
pub const MSG_NOT_FOUND: &str = "No courses found with given id";
pub const MSG_NO_DATA: &str = "No data inside JSON";
pub const MSG_DELETED: &str = "Deleting is Successful";

// ==================
// Shared State
// ==================

/// State shared across course handlers
pub struct CourseState {
    pub store: CourseStore,
    ids: Box<dyn IdGenerator>,
    strict: bool,
}

impl CourseState {
    pub fn new(store: CourseStore, ids: Box<dyn IdGenerator>, strict: bool) -> Self {
        Self { store, ids, strict }
    }

    /// Build the store and id generator described by `config`
    pub fn from_config(config: &HttpServerConfig) -> Self {
        let store = if config.seed {
            CourseStore::seeded()
        } else {
            CourseStore::new()
        };
        let existing = store.len().unwrap_or(0);
        let ids = config.id_strategy.build(existing);
        Self::new(store, ids, config.strict_mode)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn decode(&self, body: &[u8]) -> ApiResult<Course> {
        if self.strict {
            Ok(codec::decode_strict(body)?)
        } else {
            Ok(codec::decode_lenient(body))
        }
    }

    /// Lenient-mode `reply`, or `err` in strict mode
    fn miss(&self, reply: CourseReply, err: ApiError) -> ApiResult<CourseReply> {
        if self.strict {
            Err(err)
        } else {
            Ok(reply)
        }
    }
}

// ==================
// Responses
// ==================

/// What a course handler answers with
#[derive(Debug)]
pub enum CourseReply {
    One(Course),
    Many(Vec<Course>),
    /// Informational JSON string
    Message(&'static str),
    /// 200 with a JSON content type and an empty body
    NoBody,
}

impl IntoResponse for CourseReply {
    fn into_response(self) -> Response {
        match self {
            CourseReply::One(course) => Json(codec::encode(&course)).into_response(),
            CourseReply::Many(courses) => Json(codec::encode_all(&courses)).into_response(),
            CourseReply::Message(message) => Json(message).into_response(),
            CourseReply::NoBody => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
            )
                .into_response(),
        }
    }
}

// ==================
// Course Routes
// ==================

/// Create course routes
pub fn course_routes(state: Arc<CourseState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/courses", get(list_courses_handler))
        .route("/course", axum::routing::post(create_course_handler))
        .route(
            "/course/:id",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}

async fn list_courses_handler(State(state): State<Arc<CourseState>>) -> ApiResult<CourseReply> {
    let courses = state.store.list_all()?;
    Logger::info("COURSE_LIST", &[("count", courses.len().to_string().as_str())]);
    Ok(CourseReply::Many(courses))
}

async fn get_course_handler(
    State(state): State<Arc<CourseState>>,
    Path(id): Path<String>,
) -> ApiResult<CourseReply> {
    let found = state.store.find_by_id(&id)?;
    Logger::info(
        "COURSE_GET",
        &[("found", if found.is_some() { "true" } else { "false" }), ("id", id.as_str())],
    );
    match found {
        Some(course) => Ok(CourseReply::One(course)),
        None => state.miss(CourseReply::Message(MSG_NOT_FOUND), ApiError::NotFound(id)),
    }
}

async fn create_course_handler(
    State(state): State<Arc<CourseState>>,
    body: Bytes,
) -> ApiResult<CourseReply> {
    let mut course = state.decode(&body)?;
    if course.is_empty() {
        Logger::info("COURSE_CREATE", &[("outcome", "no_name")]);
        return state.miss(CourseReply::Message(MSG_NO_DATA), ApiError::MissingName);
    }

    course.id = state.ids.next_id();
    state.store.insert(course.clone())?;
    Logger::info("COURSE_CREATE", &[("id", course.id.as_str()), ("outcome", "created")]);
    Ok(CourseReply::One(course))
}

async fn update_course_handler(
    State(state): State<Arc<CourseState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<CourseReply> {
    let course = state.decode(&body)?;
    let updated = state.store.replace(&id, course)?;
    Logger::info(
        "COURSE_UPDATE",
        &[("found", if updated.is_some() { "true" } else { "false" }), ("id", id.as_str())],
    );
    match updated {
        Some(course) => Ok(CourseReply::One(course)),
        None => state.miss(CourseReply::NoBody, ApiError::NotFound(id)),
    }
}

async fn delete_course_handler(
    State(state): State<Arc<CourseState>>,
    Path(id): Path<String>,
) -> ApiResult<CourseReply> {
    let removed = state.store.remove_by_id(&id)?;
    Logger::info(
        "COURSE_DELETE",
        &[("found", if removed.is_some() { "true" } else { "false" }), ("id", id.as_str())],
    );
    match removed {
        Some(_) => Ok(CourseReply::Message(MSG_DELETED)),
        None => state.miss(CourseReply::NoBody, ApiError::NotFound(id)),
    }
}
