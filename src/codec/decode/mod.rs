// Decode module for the MessagePack wire format

pub mod basic;
pub mod complex;
pub mod ext;
mod reader;

pub use reader::Reader;

use crate::codec::tags::{self, Family};
use crate::codec::types::Value;
use crate::codec::Decode;
use crate::internal::error::{Error, Result};

/// Deepest container nesting accepted before decoding gives up. Bounds the
/// recursion an adversarial input can force.
pub const MAX_DEPTH: usize = 512;

impl Decode for Value {
    fn decode(reader: &mut Reader) -> Result<Self> {
        read_value(reader, 0)
    }
}

/// Reads one tag byte, classifies it, and dispatches to the matching payload
/// reader. Container tags recurse with `depth + 1`.
pub(crate) fn read_value(reader: &mut Reader, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthLimitExceeded);
    }
    let tag = reader.read_u8()?;
    match tags::classify(tag) {
        Family::PosFixint(v) => Ok(Value::UInt(u64::from(v))),
        Family::NegFixint(v) => Ok(Value::Int(i64::from(v))),
        Family::Nil => Ok(Value::Nil),
        Family::Bool(v) => Ok(Value::Bool(v)),
        Family::Reserved => Err(Error::InvalidTag(tag)),

        Family::Uint8 => Ok(Value::UInt(u64::from(reader.read_u8()?))),
        Family::Uint16 => Ok(Value::UInt(u64::from(reader.read_u16()?))),
        Family::Uint32 => Ok(Value::UInt(u64::from(reader.read_u32()?))),
        Family::Uint64 => Ok(Value::UInt(reader.read_u64()?)),
        Family::Int8 => Ok(Value::Int(i64::from(reader.read_i8()?))),
        Family::Int16 => Ok(Value::Int(i64::from(reader.read_i16()?))),
        Family::Int32 => Ok(Value::Int(i64::from(reader.read_i32()?))),
        Family::Int64 => Ok(Value::Int(reader.read_i64()?)),
        Family::Float32 => basic::read_f32(reader),
        Family::Float64 => basic::read_f64(reader),

        Family::FixStr(len) => basic::read_str(reader, len),
        Family::Str8 => {
            let len = reader.read_u8()? as usize;
            basic::read_str(reader, len)
        }
        Family::Str16 => {
            let len = reader.read_u16()? as usize;
            basic::read_str(reader, len)
        }
        Family::Str32 => {
            let len = reader.read_u32()? as usize;
            basic::read_str(reader, len)
        }
        Family::Bin8 => {
            let len = reader.read_u8()? as usize;
            basic::read_bin(reader, len)
        }
        Family::Bin16 => {
            let len = reader.read_u16()? as usize;
            basic::read_bin(reader, len)
        }
        Family::Bin32 => {
            let len = reader.read_u32()? as usize;
            basic::read_bin(reader, len)
        }

        Family::FixArray(len) => complex::read_array(reader, len, depth),
        Family::Array16 => {
            let len = reader.read_u16()? as usize;
            complex::read_array(reader, len, depth)
        }
        Family::Array32 => {
            let len = reader.read_u32()? as usize;
            complex::read_array(reader, len, depth)
        }
        Family::FixMap(len) => complex::read_map(reader, len, depth),
        Family::Map16 => {
            let len = reader.read_u16()? as usize;
            complex::read_map(reader, len, depth)
        }
        Family::Map32 => {
            let len = reader.read_u32()? as usize;
            complex::read_map(reader, len, depth)
        }

        Family::FixExt(len) => ext::read_ext(reader, len),
        Family::Ext8 => {
            let len = reader.read_u8()? as usize;
            ext::read_ext(reader, len)
        }
        Family::Ext16 => {
            let len = reader.read_u16()? as usize;
            ext::read_ext(reader, len)
        }
        Family::Ext32 => {
            let len = reader.read_u32()? as usize;
            ext::read_ext(reader, len)
        }
    }
}
