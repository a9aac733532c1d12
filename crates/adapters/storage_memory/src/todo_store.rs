//! In-memory implementation of [`TodoRepository`].

use std::collections::HashMap;
use std::future::{Future, ready};
use std::sync::{Mutex, MutexGuard};

use todohub_app::ports::TodoRepository;
use todohub_domain::error::TodoError;
use todohub_domain::id::TodoId;
use todohub_domain::todo::Todo;

use crate::error::StorageError;

/// Everything the lock protects.
#[derive(Debug, Default)]
struct Ledger {
    items: HashMap<TodoId, String>,
    next_id: TodoId,
}

impl Ledger {
    /// Take the current counter value and advance it.
    fn allocate(&mut self) -> Result<TodoId, StorageError> {
        let id = self.next_id;
        self.next_id = id.next().ok_or(StorageError::IdSpaceExhausted)?;
        Ok(id)
    }

    fn insert_new(&mut self, description: String) -> Result<Todo, StorageError> {
        let id = self.allocate()?;
        self.items.insert(id, description.clone());
        Ok(Todo::new(id, description))
    }
}

/// Mutex-guarded todo store.
///
/// One exclusive lock covers both the map and the counter, so every
/// operation observes and leaves a consistent pair. Reads are serialized
/// like writes.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    ledger: Mutex<Ledger>,
}

impl InMemoryTodoStore {
    /// Create an empty store whose counter starts at [`TodoId::FIRST`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, StorageError> {
        self.ledger.lock().map_err(|_| StorageError::Poisoned)
    }

    fn snapshot(&self) -> Result<Vec<Todo>, StorageError> {
        let ledger = self.lock()?;
        Ok(ledger
            .items
            .iter()
            .map(|(id, description)| Todo::new(*id, description.clone()))
            .collect())
    }

    fn find(&self, id: TodoId) -> Result<Option<Todo>, StorageError> {
        let ledger = self.lock()?;
        Ok(ledger
            .items
            .get(&id)
            .map(|description| Todo::new(id, description.clone())))
    }

    fn put(&self, id: Option<TodoId>, description: String) -> Result<Todo, StorageError> {
        let mut ledger = self.lock()?;
        let Some(id) = id else {
            return ledger.insert_new(description);
        };
        // Explicit ids bypass the counter; a later create may land on the same key.
        if id >= ledger.next_id {
            tracing::debug!(%id, next_id = %ledger.next_id, "explicit id at or past counter");
        }
        ledger.items.insert(id, description.clone());
        Ok(Todo::new(id, description))
    }

    fn remove(&self, id: TodoId) -> Result<Option<Todo>, StorageError> {
        let mut ledger = self.lock()?;
        Ok(ledger
            .items
            .remove(&id)
            .map(|description| Todo::new(id, description)))
    }
}

// Every operation completes under the lock before the future is returned,
// so the lock is never held across an await point.
impl TodoRepository for InMemoryTodoStore {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Todo>, TodoError>> + Send {
        ready(self.snapshot().map_err(TodoError::from))
    }

    fn create(&self, description: String) -> impl Future<Output = Result<Todo, TodoError>> + Send {
        let result = self
            .lock()
            .and_then(|mut ledger| ledger.insert_new(description));
        ready(result.map_err(TodoError::from))
    }

    fn get_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
        ready(self.find(id).map_err(TodoError::from))
    }

    fn upsert(
        &self,
        id: Option<TodoId>,
        description: String,
    ) -> impl Future<Output = Result<Todo, TodoError>> + Send {
        ready(self.put(id, description).map_err(TodoError::from))
    }

    fn delete(&self, id: TodoId) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
        ready(self.remove(id).map_err(TodoError::from))
    }
}
