//! Diff generator: turn two text snapshots into operations
//!
//! This is a greedy common-affix diff. It trims the shared prefix and the
//! shared suffix and treats whatever is left in the middle as one replaced
//! region. It never finds interior matches or transpositions, so the result
//! is at most one delete followed by at most one insert.

use super::operation::Operation;
use tracing::trace;

/// Generate the operations that turn `old_text` into `new_text`
///
/// Returns an empty list when the two texts are equal, otherwise an
/// optional `Delete` followed by an optional `Insert`, both positioned at
/// the end of the common prefix.
///
/// # Example
///
/// ```rust
/// use collab_ot::{generate_operations, Operation};
///
/// let ops = generate_operations("hello", "hello world");
/// assert_eq!(ops, vec![Operation::insert(5, " world")]);
/// ```
pub fn generate_operations(old_text: &str, new_text: &str) -> Vec<Operation> {
    let old: Vec<char> = old_text.chars().collect();
    let new: Vec<char> = new_text.chars().collect();

    let common_start = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();

    // Only scan what the prefix left over, so the two affixes never overlap
    let common_end = old[common_start..]
        .iter()
        .rev()
        .zip(new[common_start..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let old_middle = &old[common_start..old.len() - common_end];
    let new_middle = &new[common_start..new.len() - common_end];

    let mut ops = Vec::with_capacity(2);

    if !old_middle.is_empty() {
        ops.push(Operation::delete(common_start, old_middle.len()));
    }
    if !new_middle.is_empty() {
        ops.push(Operation::insert(
            common_start,
            new_middle.iter().collect::<String>(),
        ));
    }

    trace!(
        common_start,
        common_end,
        op_count = ops.len(),
        "generated operations"
    );

    ops
}
