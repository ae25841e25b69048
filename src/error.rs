/// Errors reported by multi-precision integer operations.
///
/// The set is stable: callers dispatching on error codes (retrying prime
/// candidates on [`NotAcceptable`](Error::NotAcceptable), resizing buffers
/// on [`BufferTooSmall`](Error::BufferTooSmall)) can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input argument was malformed (range, size or radix).
    #[error("bad input data")]
    BadInput,
    /// A digit string contained a character invalid for its radix.
    #[error("invalid character in digit string")]
    InvalidCharacter,
    /// The output buffer is too small to hold the value.
    #[error("output buffer too small")]
    BufferTooSmall,
    /// The operation would produce or require a negative value where none
    /// is allowed.
    #[error("negative value not allowed")]
    NegativeValue,
    /// Division or reduction by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The value failed a structural test: a composite primality candidate
    /// or a non-invertible residue.
    #[error("value not acceptable")]
    NotAcceptable,
    /// Growing a value would exceed the [`MAX_LIMBS`](crate::MAX_LIMBS) cap.
    #[error("allocation limit exceeded")]
    AllocFailed,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
