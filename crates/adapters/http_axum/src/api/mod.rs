//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod todos;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::routing::get;
use tower_http::set_header::SetResponseHeaderLayer;

use todohub_app::ports::TodoRepository;

use crate::state::AppState;

/// Build the `/todos` sub-router.
///
/// `/todos/` (empty id segment) is routed separately from `/todos/{*rest}`:
/// `PUT` there creates, while `GET` and `DELETE` reject the missing id.
/// Under `/todos/{*rest}` only the first segment is the id.
/// Request bodies are not size-limited.
/// Every response, errors included, carries `Access-Control-Allow-Origin: *`.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/todos",
            get(todos::list::<R>)
                .post(todos::create::<R>)
                .options(todos::preflight),
        )
        .route(
            "/todos/",
            get(todos::missing_id)
                .put(todos::upsert_new::<R>)
                .delete(todos::missing_id)
                .options(todos::preflight),
        )
        .route(
            "/todos/{*rest}",
            get(todos::get::<R>)
                .put(todos::upsert::<R>)
                .delete(todos::delete::<R>)
                .options(todos::preflight),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
