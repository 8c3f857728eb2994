use thiserror::Error;

pub type CodecResult<T, E = CodecError> = Result<T, E>;

/// Codec specific errors.
///
/// Every variant except `Inconsistent` is recoverable by the polling
/// orchestrator. `Inconsistent` means the declared register layout does not
/// match the device map and must abort startup: a one-register drift would
/// silently misattribute every subsequent field's value.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("address mismatch at field '{field}': expected {expected}, declared {actual}")]
    Inconsistent {
        field: String,
        /// Wider than the address space: the expected slot for a stray field
        /// after a block ending at 65535 is one past it.
        expected: u32,
        actual: u16,
    },
    #[error("invalid field spec '{field}': {reason}")]
    InvalidSpec { field: String, reason: String },
    #[error("invalid range from '{from}' to '{to}': {reason}")]
    InvalidRange {
        from: String,
        to: String,
        reason: String,
    },
    #[error("value class mismatch at field '{field}': {reason}")]
    ValueClass { field: String, reason: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error at field '{field}': {reason}")]
    Encode { field: String, reason: String },
}
