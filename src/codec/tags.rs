//! MessagePack tag byte constants and single-byte classification.

// Fixed single-byte tags.
pub const NIL: u8 = 0xC0;
pub const RESERVED: u8 = 0xC1;
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

// Explicit-length families: tag byte, then a 1/2/4-byte big-endian length.
pub const BIN8: u8 = 0xC4;
pub const BIN16: u8 = 0xC5;
pub const BIN32: u8 = 0xC6;
pub const EXT8: u8 = 0xC7;
pub const EXT16: u8 = 0xC8;
pub const EXT32: u8 = 0xC9;
pub const STR8: u8 = 0xD9;
pub const STR16: u8 = 0xDA;
pub const STR32: u8 = 0xDB;
pub const ARRAY16: u8 = 0xDC;
pub const ARRAY32: u8 = 0xDD;
pub const MAP16: u8 = 0xDE;
pub const MAP32: u8 = 0xDF;

// Fixed-width scalars: tag byte, then a fixed-size big-endian payload.
pub const FLOAT32: u8 = 0xCA;
pub const FLOAT64: u8 = 0xCB;
pub const UINT8: u8 = 0xCC;
pub const UINT16: u8 = 0xCD;
pub const UINT32: u8 = 0xCE;
pub const UINT64: u8 = 0xCF;
pub const INT8: u8 = 0xD0;
pub const INT16: u8 = 0xD1;
pub const INT32: u8 = 0xD2;
pub const INT64: u8 = 0xD3;

// Fixed-length extension tags for payloads of exactly 1/2/4/8/16 bytes.
pub const FIXEXT1: u8 = 0xD4;
pub const FIXEXT2: u8 = 0xD5;
pub const FIXEXT4: u8 = 0xD6;
pub const FIXEXT8: u8 = 0xD7;
pub const FIXEXT16: u8 = 0xD8;

// Range tags: the value or length lives in the tag byte's low bits.
pub const FIXMAP_BASE: u8 = 0x80;
pub const FIXARRAY_BASE: u8 = 0x90;
pub const FIXSTR_BASE: u8 = 0xA0;
pub const NEGFIXINT_BASE: u8 = 0xE0;

// Inline length limits for the fix families.
pub const FIXSTR_MAX: usize = 31;
pub const FIXARRAY_MAX: usize = 15;
pub const FIXMAP_MAX: usize = 15;

/// Extension type reserved by the format for timestamps.
pub const TIMESTAMP_TYPE: i8 = -1;

/// The family a tag byte belongs to. Range tags carry the value or length
/// packed into their low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    PosFixint(u8),
    NegFixint(i8),
    FixMap(usize),
    FixArray(usize),
    FixStr(usize),
    Nil,
    Reserved,
    Bool(bool),
    Bin8,
    Bin16,
    Bin32,
    Ext8,
    Ext16,
    Ext32,
    Float32,
    Float64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Fixed-length extension; the embedded value is the payload length.
    FixExt(usize),
    Str8,
    Str16,
    Str32,
    Array16,
    Array32,
    Map16,
    Map32,
}

/// Classifies a single lookahead byte. Total over all 256 byte values; only
/// `RESERVED` (0xC1) maps to no usable family.
pub fn classify(tag: u8) -> Family {
    match tag {
        0x00..=0x7F => Family::PosFixint(tag),
        0x80..=0x8F => Family::FixMap((tag & 0x0F) as usize),
        0x90..=0x9F => Family::FixArray((tag & 0x0F) as usize),
        0xA0..=0xBF => Family::FixStr((tag & 0x1F) as usize),
        NIL => Family::Nil,
        RESERVED => Family::Reserved,
        FALSE => Family::Bool(false),
        TRUE => Family::Bool(true),
        BIN8 => Family::Bin8,
        BIN16 => Family::Bin16,
        BIN32 => Family::Bin32,
        EXT8 => Family::Ext8,
        EXT16 => Family::Ext16,
        EXT32 => Family::Ext32,
        FLOAT32 => Family::Float32,
        FLOAT64 => Family::Float64,
        UINT8 => Family::Uint8,
        UINT16 => Family::Uint16,
        UINT32 => Family::Uint32,
        UINT64 => Family::Uint64,
        INT8 => Family::Int8,
        INT16 => Family::Int16,
        INT32 => Family::Int32,
        INT64 => Family::Int64,
        FIXEXT1 => Family::FixExt(1),
        FIXEXT2 => Family::FixExt(2),
        FIXEXT4 => Family::FixExt(4),
        FIXEXT8 => Family::FixExt(8),
        FIXEXT16 => Family::FixExt(16),
        STR8 => Family::Str8,
        STR16 => Family::Str16,
        STR32 => Family::Str32,
        ARRAY16 => Family::Array16,
        ARRAY32 => Family::Array32,
        MAP16 => Family::Map16,
        MAP32 => Family::Map32,
        0xE0..=0xFF => Family::NegFixint(tag as i8),
    }
}
