//! Operational transformation for single-document plain text
//!
//! Two parties edit the same base text concurrently. Each produces an
//! operation list by diffing snapshots, exchanges it with the other, then
//! transforms the incoming list against its own before applying it.
//!
//! # Pipeline
//!
//! - **Diff**: [`generate_operations`] turns two snapshots into at most one
//!   delete and one insert
//! - **Transform**: [`transform_operation`] rebases one operation over
//!   another; [`transform_operations`] folds a whole client list over a
//!   server list
//! - **Apply**: [`apply_operations`] applies a batch expressed against one
//!   base text
//!
//! # Example
//!
//! ```rust
//! use collab_ot::ot::{apply_operations, generate_operations, transform_operations};
//!
//! let base = "hello";
//! let client = generate_operations(base, "hello world");
//! let server = generate_operations(base, "oh hello");
//!
//! // Server side: server edits are in, rebase the client's
//! let on_server = apply_operations(base, &server);
//! let merged_server = apply_operations(&on_server, &transform_operations(&client, &server));
//!
//! // Client side: client edits are in, rebase the server's
//! let on_client = apply_operations(base, &client);
//! let merged_client = apply_operations(&on_client, &transform_operations(&server, &client));
//!
//! assert_eq!(merged_server, "oh hello world");
//! assert_eq!(merged_server, merged_client);
//! ```
//!
//! The transform rules are position arithmetic only. They converge for
//! disjoint edits, same-position inserts and same-position deletes, but an
//! insert landing strictly inside a concurrently deleted range is not split
//! out of it, so the two sides can disagree there.

mod apply;
mod diff;
mod operation;
mod transform;

pub use apply::apply_operations;
pub use diff::generate_operations;
pub use operation::Operation;
pub use transform::{transform_operation, transform_operations};
