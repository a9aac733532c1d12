//! # todohub-adapter-storage-memory
//!
//! Process-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`TodoRepository`](todohub_app::ports::TodoRepository) port
//! - Hold the id → description map and the next-id counter behind one lock
//! - Serialize every operation, reads included, through that lock
//!
//! Nothing survives a restart: the store starts empty with the counter at 0.
//!
//! ## Dependency rule
//! Depends on `todohub-app` (for the port trait) and `todohub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod todo_store;

pub use todo_store::InMemoryTodoStore;
