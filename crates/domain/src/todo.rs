//! Todo — a server-assigned id paired with a free-text description.

use serde::{Deserialize, Serialize};

use crate::id::TodoId;

/// A single todo item.
///
/// Serialized with capitalised field names: `{"Id": 0, "Description": "…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
}

impl Todo {
    #[must_use]
    pub fn new(id: TodoId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    /// The item reported for an id that holds nothing.
    ///
    /// Lookups and deletes of a missing id answer with this rather than a
    /// not-found error, so it is indistinguishable from an item whose
    /// description really is empty.
    #[must_use]
    pub fn vacant(id: TodoId) -> Self {
        Self {
            id,
            description: String::new(),
        }
    }
}
