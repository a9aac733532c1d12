//! Typed identifier for todo items.
//!
//! Ids are plain signed integers handed out by the store's counter, or
//! chosen by the client on an explicit upsert.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Todo`](crate::todo::Todo).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// The first id handed out by an empty store.
    pub const FIRST: Self = Self(0);

    /// Wrap a raw integer.
    #[must_use]
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn as_raw(self) -> i64 {
        self.0
    }

    /// The id following this one, or `None` once the integer space is used up.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    /// Accepts an optional leading `+` or `-` followed by decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}
