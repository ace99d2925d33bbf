// Encode module for the MessagePack wire format

pub mod basic;
pub mod complex;

pub use basic::{
    pack_bin, pack_bool, pack_ext, pack_f32, pack_float, pack_int, pack_nil, pack_str,
    pack_timestamp, pack_uint,
};
pub use complex::{pack_array, pack_array_header, pack_map, pack_map_header};

use crate::codec::types::Value;
use crate::codec::Encode;
use crate::internal::buffer::OutputBuffer;
use crate::internal::error::Result;

/// Encodes a value tree depth-first. Every node gets the narrowest tag family
/// that represents it losslessly; the input is never mutated.
impl Encode for Value {
    fn encode(&self, buf: &mut OutputBuffer) -> Result<()> {
        match self {
            Value::Nil => basic::pack_nil(buf),
            Value::Bool(v) => basic::pack_bool(buf, *v),
            Value::UInt(v) => basic::pack_uint(buf, *v),
            Value::Int(v) => basic::pack_int(buf, *v),
            Value::Float32(v) => basic::pack_f32(buf, *v),
            Value::Float64(v) => basic::pack_float(buf, *v),
            Value::Str(v) => basic::pack_str(buf, v),
            Value::Bin(v) => basic::pack_bin(buf, v),
            Value::Ext { kind, data } => basic::pack_ext(buf, *kind, data),
            Value::Timestamp { seconds, nanos } => basic::pack_timestamp(buf, *seconds, *nanos),
            Value::Array(items) => complex::pack_array(buf, items),
            Value::Map(entries) => complex::pack_map(buf, entries),
        }
    }
}
