//! collab-ot - Operational transformation for collaborative notes
//!
//! This is the sync core of the collaborative note editor, compiled to both
//! native and WASM. It implements:
//! - Snapshot diffing into positional insert/delete operations
//! - Pairwise and batch transformation of concurrent operations
//! - Clamping application of operation batches to plain text
//! - The JSON wire format the browser editor exchanges
//!
//! All engine functions are pure and infallible. Storage, transport, and
//! tracking which version an operation list is based on belong to the
//! caller.
//!
//! # Examples
//!
//! ```rust
//! use collab_ot::{apply_operations, generate_operations, transform_operations};
//!
//! let base = "shopping: milk";
//!
//! // Two editors diverge from the same base
//! let local = generate_operations(base, "shopping: milk, eggs");
//! let remote = generate_operations(base, "Shopping: milk");
//!
//! // Local editor receives the remote edit and rebases it over its own
//! let mine = apply_operations(base, &local);
//! let merged = apply_operations(&mine, &transform_operations(&remote, &local));
//!
//! assert_eq!(merged, "Shopping: milk, eggs");
//! ```

pub mod error;
pub mod ot;
pub mod protocol;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use error::{OtError, Result};
pub use ot::{
    apply_operations, generate_operations, transform_operation, transform_operations, Operation,
};

/// A list of operations from one party since a shared base version
pub type OperationList = Vec<Operation>;
