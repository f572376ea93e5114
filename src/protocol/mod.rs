//! Wire format for exchanging operation lists with remote peers

pub mod serialize;

pub use serialize::{
    decode_operation, decode_operations, encode_operation, encode_operations, operations_from_json,
    operations_to_json,
};
