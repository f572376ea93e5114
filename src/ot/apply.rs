//! Apply a batch of operations to a text
//!
//! Every operation in a batch is expressed against the same base text.
//! Applying them from the highest position down means no operation shifts
//! the coordinates of one still waiting to be applied.

use super::operation::{byte_offset, char_len, Operation};
use tracing::{debug, trace};

/// Apply `ops` to `base_text` and return the result
///
/// The operations are sorted by position, descending, on a private copy;
/// the caller's slice is left untouched. The sort is stable, so operations
/// sharing a position are applied in the order given. A generated
/// `[Delete, Insert]` pair therefore removes first, then inserts.
///
/// Out-of-range operations clamp instead of failing: an insert past the end
/// appends, and a delete running past the end removes only what exists.
///
/// # Example
///
/// ```rust
/// use collab_ot::{apply_operations, Operation};
///
/// assert_eq!(apply_operations("abc", &[Operation::delete(1, 10)]), "a");
/// ```
pub fn apply_operations(base_text: &str, ops: &[Operation]) -> String {
    let mut ordered: Vec<&Operation> = ops.iter().collect();
    ordered.sort_by(|a, b| b.position().cmp(&a.position()));

    let mut result = base_text.to_string();

    for op in ordered {
        match op {
            Operation::Insert { text, position } => {
                let at = byte_offset(&result, *position);
                result.insert_str(at, text);
            }
            Operation::Delete { length, position } => {
                let start = byte_offset(&result, *position);
                let end = start + byte_offset(&result[start..], *length);
                if end == result.len() {
                    let removed = char_len(&result[start..end]);
                    if removed < *length {
                        trace!(%op, removed, "delete clamped to end of text");
                    }
                }
                result.replace_range(start..end, "");
            }
        }
    }

    debug!(op_count = ops.len(), "applied operations");

    result
}
