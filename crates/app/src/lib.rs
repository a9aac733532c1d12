//! # todohub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the store adapter must implement:
//!   - `TodoRepository` — list, create, get, upsert, delete
//! - Define the **driving/inbound** use-case struct:
//!   - `TodoService` — the operations the HTTP layer exposes
//! - Own the rule that a missing item reads as an empty description
//!
//! ## Dependency rule
//! Depends on `todohub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
