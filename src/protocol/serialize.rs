//! Serialization layer - Convert operations to/from the JSON wire format
//!
//! This module provides conversion between [`Operation`] values and the
//! JSON objects the browser editor sends over the wire:
//! `{"insert": "...", "position": n}` and `{"delete": n, "position": n}`.

use crate::error::{OtError, Result};
use crate::ot::Operation;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Serialize a single operation to a JSON string
pub fn encode_operation(op: &Operation) -> Result<String> {
    Ok(serde_json::to_string(op)?)
}

/// Deserialize a single operation from a JSON string
pub fn decode_operation(json: &str) -> Result<Operation> {
    serde_json::from_str(json)
        .map_err(|e| OtError::Protocol(format!("Failed to decode operation: {}", e)))
}

/// Serialize an operation list to a JSON array string
pub fn encode_operations(ops: &[Operation]) -> Result<String> {
    Ok(serde_json::to_string(ops)?)
}

/// Deserialize an operation list from a JSON array string
pub fn decode_operations(json: &str) -> Result<Vec<Operation>> {
    serde_json::from_str(json)
        .map_err(|e| OtError::Protocol(format!("Failed to decode operation list: {}", e)))
}

/// Convert an operation list to a `serde_json::Value` array
///
/// For callers embedding operations inside a larger message.
pub fn operations_to_json(ops: &[Operation]) -> Result<JsonValue> {
    Ok(serde_json::to_value(ops)?)
}

/// Convert a `serde_json::Value` array back to an operation list
pub fn operations_from_json(json: &JsonValue) -> Result<Vec<Operation>> {
    let items = json
        .as_array()
        .ok_or_else(|| OtError::Protocol("Operation list must be a JSON array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Operation::deserialize(item).map_err(|e| {
                OtError::Protocol(format!("Invalid operation at index {}: {}", index, e))
            })
        })
        .collect()
}
