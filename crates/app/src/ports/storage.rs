//! Storage port — repository trait for todo items.

use std::future::Future;

use todohub_domain::error::TodoError;
use todohub_domain::id::TodoId;
use todohub_domain::todo::Todo;

/// Repository holding every [`Todo`] plus the counter that assigns new ids.
///
/// Implementations must make each method atomic with respect to the others:
/// two concurrent `create` calls never observe the same counter value.
pub trait TodoRepository {
    /// Snapshot of all items, in no particular order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Todo>, TodoError>> + Send;

    /// Store `description` under the next counter value and advance the counter.
    fn create(&self, description: String)
    -> impl Future<Output = Result<Todo, TodoError>> + Send;

    /// Look up an item by id.
    fn get_by_id(&self, id: TodoId)
    -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send;

    /// Without an id, behave like [`create`](Self::create). With an id,
    /// insert or overwrite at that id and leave the counter untouched.
    fn upsert(
        &self,
        id: Option<TodoId>,
        description: String,
    ) -> impl Future<Output = Result<Todo, TodoError>> + Send;

    /// Remove an item, returning what it held if it existed.
    fn delete(&self, id: TodoId) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send;
}
