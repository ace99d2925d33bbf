use thiserror::Error;

/// Unified error type for the fulmen library.
///
/// Every variant is terminal for the operation that produced it; there is no
/// retry or partial-result recovery inside the codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The output buffer failed to reserve room for the bytes being appended.
    #[error("out of memory: failed to reserve {0} additional bytes")]
    OutOfMemory(usize),

    /// The input ended before a declared length or field was satisfied.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    /// A tag byte that maps to no format family.
    #[error("invalid tag byte: 0x{0:02X}")]
    InvalidTag(u8),

    /// Container nesting in the input exceeded the decoder's depth limit.
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}

/// A specialized `Result` type for fulmen operations.
pub type Result<T> = std::result::Result<T, Error>;
