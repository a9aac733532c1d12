//! Todo service — use-cases for managing todo items.

use todohub_domain::error::TodoError;
use todohub_domain::id::TodoId;
use todohub_domain::todo::Todo;

use crate::ports::TodoRepository;

/// Application service for todo CRUD operations.
///
/// Missing items are never an error here: `get_todo` and `delete_todo`
/// answer with [`Todo::vacant`] when the id holds nothing.
pub struct TodoService<R> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all todo items.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.repo.list_all().await
    }

    /// Create a new item with a counter-assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, description))]
    pub async fn create_todo(&self, description: String) -> Result<Todo, TodoError> {
        self.repo.create(description).await
    }

    /// Look up an item, reporting an empty description when it is absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        let found = self.repo.get_by_id(id).await?;
        Ok(found.unwrap_or_else(|| Todo::vacant(id)))
    }

    /// Create (no id) or replace (explicit id) an item.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, description))]
    pub async fn upsert_todo(
        &self,
        id: Option<TodoId>,
        description: String,
    ) -> Result<Todo, TodoError> {
        self.repo.upsert(id, description).await
    }

    /// Delete an item, returning its former value (empty when it was absent).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_todo(&self, id: TodoId) -> Result<Todo, TodoError> {
        let removed = self.repo.delete(id).await?;
        if removed.is_none() {
            tracing::debug!(%id, "delete of absent todo");
        }
        Ok(removed.unwrap_or_else(|| Todo::vacant(id)))
    }
}
