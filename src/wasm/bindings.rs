//! JavaScript bindings for the OT engine
//!
//! Operations cross the boundary as JSON strings in the editor's wire
//! format, e.g. `[{"insert":" world","position":5}]`.

use crate::error::OtError;
use crate::ot;
use crate::protocol::{decode_operation, decode_operations, encode_operation, encode_operations};
use wasm_bindgen::prelude::*;

fn to_js_error(err: OtError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Diff two snapshots (returns JSON operation list)
#[wasm_bindgen(js_name = generateOperations)]
pub fn generate_operations(old_text: &str, new_text: &str) -> Result<String, JsValue> {
    encode_operations(&ot::generate_operations(old_text, new_text)).map_err(to_js_error)
}

/// Transform one operation against another (JSON in, JSON out)
#[wasm_bindgen(js_name = transformOperation)]
pub fn transform_operation(op_json: &str, against_json: &str) -> Result<String, JsValue> {
    let op = decode_operation(op_json).map_err(to_js_error)?;
    let against = decode_operation(against_json).map_err(to_js_error)?;

    encode_operation(&ot::transform_operation(&op, &against)).map_err(to_js_error)
}

/// Transform a client operation list against a server operation list
#[wasm_bindgen(js_name = transformOperations)]
pub fn transform_operations(client_json: &str, server_json: &str) -> Result<String, JsValue> {
    let client_ops = decode_operations(client_json).map_err(to_js_error)?;
    let server_ops = decode_operations(server_json).map_err(to_js_error)?;

    encode_operations(&ot::transform_operations(&client_ops, &server_ops)).map_err(to_js_error)
}

/// Apply a JSON operation list to a text
#[wasm_bindgen(js_name = applyOperations)]
pub fn apply_operations(text: &str, ops_json: &str) -> Result<String, JsValue> {
    let ops = decode_operations(ops_json).map_err(to_js_error)?;
    Ok(ot::apply_operations(text, &ops))
}
