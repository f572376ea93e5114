//! Operation: a single positional edit on a plain-text document
//!
//! Positions and lengths count Unicode scalar values (`char`s), so an
//! operation can never land inside a multi-byte UTF-8 sequence.
//!
//! The serialized form matches what the browser editor exchanges:
//!
//! ```json
//! { "insert": " world", "position": 5 }
//! { "delete": 6, "position": 5 }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single edit, expressed against one specific document version
///
/// Operations are plain values. Transforming one produces a new operation;
/// the original is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operation {
    /// Splice `text` in at `position`
    Insert {
        #[serde(rename = "insert")]
        text: String,
        position: usize,
    },

    /// Remove `length` characters starting at `position`
    Delete {
        #[serde(rename = "delete")]
        length: usize,
        position: usize,
    },
}

impl Operation {
    /// Create an insert operation
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Operation::Insert {
            text: text.into(),
            position,
        }
    }

    /// Create a delete operation
    pub fn delete(position: usize, length: usize) -> Self {
        Operation::Delete { length, position }
    }

    /// Offset this operation applies at
    pub fn position(&self) -> usize {
        match self {
            Operation::Insert { position, .. } | Operation::Delete { position, .. } => *position,
        }
    }

    /// Number of characters inserted or removed
    pub fn len(&self) -> usize {
        match self {
            Operation::Insert { text, .. } => char_len(text),
            Operation::Delete { length, .. } => *length,
        }
    }

    /// Check if this operation inserts or removes nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this is an insert
    pub fn is_insert(&self) -> bool {
        matches!(self, Operation::Insert { .. })
    }

    /// Check if this is a delete
    pub fn is_delete(&self) -> bool {
        matches!(self, Operation::Delete { .. })
    }

    /// Check if applying this operation leaves the text unchanged
    ///
    /// Empty inserts and zero-length deletes are kept as-is by transform;
    /// apply simply has nothing to do for them.
    pub fn is_noop(&self) -> bool {
        self.is_empty()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert { text, position } => write!(f, "insert({:?} @ {})", text, position),
            Operation::Delete { length, position } => write!(f, "delete({} @ {})", length, position),
        }
    }
}

/// Length of `s` in chars
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `index`-th char, clamped to the end of `s`
pub(crate) fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(offset, _)| offset)
}
