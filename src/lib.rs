// Fulmen library entry point

pub mod codec;
pub mod internal;

pub use codec::decode::Reader;
pub use codec::types::Value;
pub use codec::{from_bytes, from_slice, to_bytes, Decode, Encode};
pub use internal::buffer::OutputBuffer;
pub use internal::error::{Error, Result};
