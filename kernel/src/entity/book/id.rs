use serde::{Deserialize, Serialize};

/// Store-assigned row id. Monotonic within a store lifetime, never reused
/// after deletion.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}

impl AsRef<i64> for BookId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl From<BookId> for i64 {
    fn from(value: BookId) -> Self {
        value.0
    }
}
