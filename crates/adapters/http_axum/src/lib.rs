//! # todohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/todos` (list, create, get, upsert, delete)
//! - Answer CORS preflight requests and stamp `Access-Control-Allow-Origin: *`
//!   on every `/todos` response
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `todohub-app` (for the port trait and service) and `todohub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
