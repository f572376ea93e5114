//! WASM bindings for the OT engine
//!
//! Exposes the engine to the browser editor under the same function names
//! its JavaScript module used.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

#[cfg(feature = "wasm")]
pub use bindings::{apply_operations, generate_operations, transform_operation, transform_operations};
