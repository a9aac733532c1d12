//! JSON REST handlers for todo items.

use std::fmt;
use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ALLOW, CONTENT_TYPE,
};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use todohub_app::ports::TodoRepository;
use todohub_domain::id::TodoId;
use todohub_domain::todo::Todo;

use crate::error::ApiError;
use crate::state::AppState;

const PREFLIGHT_METHODS: &str = "GET,POST";
const PREFLIGHT_HEADERS: &str = "Content-Type";
const DESCRIPTION_FIELD: &str = "Description";

/// Request body for creating or replacing a todo.
///
/// Decoding never fails the request: an unreadable body or a missing field
/// both yield an empty description. The field name matches in any ASCII
/// case; when several keys match, the last one holding a string wins.
#[derive(Debug, Default)]
pub struct DescriptionRequest {
    pub description: String,
}

impl<'de> Deserialize<'de> for DescriptionRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = DescriptionRequest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut request = DescriptionRequest::default();
                while let Some(key) = map.next_key::<String>()? {
                    if !key.eq_ignore_ascii_case(DESCRIPTION_FIELD) {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                    // Non-string values leave the previous match in place.
                    let value: serde_json::Value = map.next_value()?;
                    if let serde_json::Value::String(text) = value {
                        request.description = text;
                    }
                }
                Ok(request)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

impl DescriptionRequest {
    /// Decode a raw request body, falling back to an empty description.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|err| {
            tracing::debug!(%err, "ignoring undecodable todo body");
            Self::default()
        })
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Vec<Todo>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(todos) => encode(&todos),
        }
    }
}

/// Possible responses from the single-item endpoints (get, create, upsert, delete).
pub enum ItemResponse {
    Ok(Todo),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(todo) => encode(&todo),
        }
    }
}

/// Possible responses from the preflight endpoint.
pub enum PreflightResponse {
    Ok,
}

impl IntoResponse for PreflightResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => (
                StatusCode::OK,
                [
                    (ALLOW, PREFLIGHT_METHODS),
                    (ACCESS_CONTROL_ALLOW_METHODS, PREFLIGHT_METHODS),
                    (ACCESS_CONTROL_ALLOW_HEADERS, PREFLIGHT_HEADERS),
                ],
            )
                .into_response(),
        }
    }
}

/// Serialize `value` as a `200 OK` JSON response, or a `500` if encoding fails.
fn encode<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            StatusCode::OK,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(%err, "failed to encode todos");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("\"todos corrupted: {err}\""),
            )
                .into_response()
        }
    }
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    TodoId::from_str(raw).map_err(|_| ApiError::invalid_id(raw))
}

/// The first segment after `/todos/`; anything deeper is ignored.
///
/// A path axum cannot decode (e.g. invalid UTF-8) is an invalid id.
fn id_segment(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(rest) = path.map_err(|err| {
        tracing::debug!(%err, "undecodable todo path");
        ApiError::invalid_id("")
    })?;
    Ok(rest.split('/').next().unwrap_or_default().to_owned())
}

/// `GET /todos`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todos = state.todo_service.list_todos().await?;
    Ok(ListResponse::Ok(todos))
}

/// `POST /todos`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<ItemResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let req = DescriptionRequest::from_body(&body);
    let created = state.todo_service.create_todo(req.description).await?;
    Ok(ItemResponse::Ok(created))
}

/// `GET /todos/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<ItemResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let id = parse_id(&id_segment(path)?)?;
    let todo = state.todo_service.get_todo(id).await?;
    Ok(ItemResponse::Ok(todo))
}

/// `PUT /todos/{id}`
///
/// An empty first segment (`/todos//x`) creates, like `PUT /todos/`.
pub async fn upsert<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<ItemResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let segment = id_segment(path)?;
    let id = if segment.is_empty() {
        None
    } else {
        Some(parse_id(&segment)?)
    };
    let req = DescriptionRequest::from_body(&body);
    let todo = state.todo_service.upsert_todo(id, req.description).await?;
    Ok(ItemResponse::Ok(todo))
}

/// `PUT /todos/` — same as `POST /todos`.
pub async fn upsert_new<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<ItemResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let req = DescriptionRequest::from_body(&body);
    let todo = state.todo_service.upsert_todo(None, req.description).await?;
    Ok(ItemResponse::Ok(todo))
}

/// `DELETE /todos/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<ItemResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let id = parse_id(&id_segment(path)?)?;
    let removed = state.todo_service.delete_todo(id).await?;
    Ok(ItemResponse::Ok(removed))
}

/// `GET /todos/` and `DELETE /todos/` — the id segment is empty.
pub async fn missing_id() -> ApiError {
    ApiError::invalid_id("")
}

/// `OPTIONS /todos`, `/todos/` and anything below `/todos/`
pub async fn preflight() -> PreflightResponse {
    PreflightResponse::Ok
}
