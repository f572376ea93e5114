//! Transform: rebase operations over concurrent ones
//!
//! `transform_operation(a, b)` answers: "`a` and `b` were both generated
//! against the same text, and `b` has already been applied. What does `a`
//! look like now?"
//!
//! # Rules
//!
//! | `op` \ `against` | Insert | Delete |
//! |---|---|---|
//! | Insert | shift right by the inserted length if `op` is further right, or at the same position with the greater text | shift left by the overlap if `op` is further right |
//! | Delete | shift right by the inserted length if `op` is at or right of it | shift left by the overlap if further right; shrink by the other length if at the same position |
//!
//! Equal-position inserts are ordered by comparing their text (`str`
//! ordering, i.e. by Unicode scalar value). Both sides of a merge make the
//! same comparison, so they agree on which insert lands first.

use super::operation::{char_len, Operation};
use tracing::{debug, trace};

/// Transform `op` so it applies cleanly after `against`
///
/// Neither input is modified; a fresh operation is returned. A delete that
/// shrinks to zero length is still returned.
///
/// # Example
///
/// ```rust
/// use collab_ot::{transform_operation, Operation};
///
/// let local = Operation::insert(3, "X");
/// let remote = Operation::insert(1, "Y");
///
/// assert_eq!(transform_operation(&local, &remote), Operation::insert(4, "X"));
/// ```
pub fn transform_operation(op: &Operation, against: &Operation) -> Operation {
    match (op, against) {
        (
            Operation::Insert { text, position },
            Operation::Insert {
                text: other_text,
                position: other_position,
            },
        ) => {
            let shifted = position > other_position
                || (position == other_position && text.as_str() > other_text.as_str());
            let position = if shifted {
                position.saturating_add(char_len(other_text))
            } else {
                *position
            };
            Operation::insert(position, text.clone())
        }

        (
            Operation::Insert { text, position },
            Operation::Delete {
                length: other_length,
                position: other_position,
            },
        ) => Operation::insert(
            shift_back(*position, *other_position, *other_length),
            text.clone(),
        ),

        (
            Operation::Delete { length, position },
            Operation::Insert {
                text: other_text,
                position: other_position,
            },
        ) => {
            let position = if position >= other_position {
                position.saturating_add(char_len(other_text))
            } else {
                *position
            };
            Operation::delete(position, *length)
        }

        (
            Operation::Delete { length, position },
            Operation::Delete {
                length: other_length,
                position: other_position,
            },
        ) => {
            if position == other_position {
                // Overlapping deletes collapse; whatever `against` removed is gone
                Operation::delete(*position, length.saturating_sub(*other_length))
            } else {
                Operation::delete(shift_back(*position, *other_position, *other_length), *length)
            }
        }
    }
}

/// Pull `position` left over a delete of `length` chars at `delete_position`
///
/// Positions at or before the delete are unaffected. Never moves past the
/// delete's start.
fn shift_back(position: usize, delete_position: usize, length: usize) -> usize {
    if position > delete_position {
        position - length.min(position - delete_position)
    } else {
        position
    }
}

/// Transform every client operation against a list of server operations
///
/// Folds over `server_ops` in order. At each step every client operation is
/// transformed against that one server operation, so later server
/// operations see the already-transformed client list. Client operations
/// never interact with each other.
///
/// The result applies to the text as it stands after `server_ops`.
pub fn transform_operations(client_ops: &[Operation], server_ops: &[Operation]) -> Vec<Operation> {
    let transformed = server_ops
        .iter()
        .enumerate()
        .fold(client_ops.to_vec(), |pending, (step, server_op)| {
            trace!(step, %server_op, pending = pending.len(), "transforming against server op");
            pending
                .iter()
                .map(|client_op| transform_operation(client_op, server_op))
                .collect()
        });

    debug!(
        client_ops = client_ops.len(),
        server_ops = server_ops.len(),
        "transformed client operations"
    );

    transformed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_after_remote_insert_shifts() {
        let op = transform_operation(&Operation::insert(3, "X"), &Operation::insert(1, "Y"));
        assert_eq!(op, Operation::insert(4, "X"));
    }

    #[test]
    fn test_insert_before_remote_insert_unchanged() {
        let op = transform_operation(&Operation::insert(1, "X"), &Operation::insert(3, "YY"));
        assert_eq!(op, Operation::insert(1, "X"));
    }

    #[test]
    fn test_insert_tie_greater_text_goes_right() {
        let b = Operation::insert(2, "a");
        let op = transform_operation(&Operation::insert(2, "b"), &b);
        assert_eq!(op, Operation::insert(3, "b"));

        let op = transform_operation(&b, &Operation::insert(2, "b"));
        assert_eq!(op, Operation::insert(2, "a"));
    }

    #[test]
    fn test_insert_tie_equal_text_unchanged() {
        let op = transform_operation(&Operation::insert(2, "x"), &Operation::insert(2, "x"));
        assert_eq!(op, Operation::insert(2, "x"));
    }

    #[test]
    fn test_insert_shift_counts_chars() {
        let op = transform_operation(&Operation::insert(4, "X"), &Operation::insert(0, "ñ😀"));
        assert_eq!(op, Operation::insert(6, "X"));
    }

    #[test]
    fn test_shift_saturates_at_max_position() {
        let op = transform_operation(&Operation::insert(usize::MAX, "a"), &Operation::insert(0, "b"));
        assert_eq!(op, Operation::insert(usize::MAX, "a"));

        let op = transform_operation(&Operation::delete(usize::MAX, 1), &Operation::insert(0, "bc"));
        assert_eq!(op, Operation::delete(usize::MAX, 1));

        let result = transform_operations(
            &[Operation::insert(usize::MAX, "a")],
            &[Operation::insert(0, "b"), Operation::insert(3, "c")],
        );
        assert_eq!(result, vec![Operation::insert(usize::MAX, "a")]);
    }

    #[test]
    fn test_insert_after_remote_delete() {
        let op = transform_operation(&Operation::insert(10, "X"), &Operation::delete(2, 3));
        assert_eq!(op, Operation::insert(7, "X"));
    }

    #[test]
    fn test_insert_inside_remote_delete_clamps_to_start() {
        let op = transform_operation(&Operation::insert(4, "X"), &Operation::delete(2, 5));
        assert_eq!(op, Operation::insert(2, "X"));
    }

    #[test]
    fn test_insert_at_remote_delete_boundary_unchanged() {
        let op = transform_operation(&Operation::insert(2, "X"), &Operation::delete(2, 5));
        assert_eq!(op, Operation::insert(2, "X"));
    }

    #[test]
    fn test_delete_at_remote_insert_shifts() {
        let op = transform_operation(&Operation::delete(2, 2), &Operation::insert(2, "abc"));
        assert_eq!(op, Operation::delete(5, 2));
    }

    #[test]
    fn test_delete_before_remote_insert_unchanged() {
        let op = transform_operation(&Operation::delete(1, 2), &Operation::insert(2, "abc"));
        assert_eq!(op, Operation::delete(1, 2));
    }

    #[test]
    fn test_delete_after_remote_delete() {
        let op = transform_operation(&Operation::delete(5, 2), &Operation::delete(1, 2));
        assert_eq!(op, Operation::delete(3, 2));
    }

    #[test]
    fn test_overlapping_deletes_same_position() {
        let op = transform_operation(&Operation::delete(4, 5), &Operation::delete(4, 3));
        assert_eq!(op, Operation::delete(4, 2));
    }

    #[test]
    fn test_overlapping_delete_collapses_to_zero() {
        let op = transform_operation(&Operation::delete(4, 3), &Operation::delete(4, 5));
        assert_eq!(op, Operation::delete(4, 0));
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let op = Operation::insert(3, "X");
        let against = Operation::insert(1, "Y");
        let _ = transform_operation(&op, &against);
        assert_eq!(op, Operation::insert(3, "X"));
        assert_eq!(against, Operation::insert(1, "Y"));
    }

    #[test]
    fn test_zero_size_remote_ops_are_identity() {
        let ops = [
            Operation::insert(0, "a"),
            Operation::insert(5, "b"),
            Operation::delete(0, 2),
            Operation::delete(3, 1),
        ];
        for op in &ops {
            assert_eq!(&transform_operation(op, &Operation::insert(0, "")), op);
            assert_eq!(&transform_operation(op, &Operation::delete(0, 0)), op);
        }
    }

    #[test]
    fn test_batch_folds_in_server_order() {
        let client = vec![Operation::insert(5, "!")];
        let server = vec![Operation::insert(0, "ab"), Operation::delete(0, 1)];

        // 5 -> 7 after the insert, then 7 -> 6 after the delete
        let result = transform_operations(&client, &server);
        assert_eq!(result, vec![Operation::insert(6, "!")]);
    }

    #[test]
    fn test_batch_client_ops_transform_independently() {
        let client = vec![Operation::delete(1, 1), Operation::insert(4, "x")];
        let server = vec![Operation::insert(0, "__")];

        let result = transform_operations(&client, &server);
        assert_eq!(result, vec![Operation::delete(3, 1), Operation::insert(6, "x")]);
    }

    #[test]
    fn test_batch_empty_lists() {
        let client = vec![Operation::insert(1, "a")];
        assert_eq!(transform_operations(&client, &[]), client);
        assert!(transform_operations(&[], &client).is_empty());
    }
}
