use thiserror::Error;

/// Errors produced while building, framing or parsing P2P messages.
///
/// The library never retries, logs or drops on failure: every error is
/// handed back to the caller, which decides whether it warrants a
/// disconnect, a ban or nothing at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Fewer bytes remain than the field being read requires.
    #[error("truncated input reading {context}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        context: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// A var-int was not minimally encoded under the canonical policy.
    #[error("non-canonical var-int: {value} encoded in {width} bytes")]
    MalformedVarInt { value: u64, width: usize },

    #[error("unknown network magic {}, expected {}", hex::encode(.actual), hex::encode(.expected))]
    UnknownNetwork { expected: [u8; 4], actual: [u8; 4] },

    /// The 12-byte command field is not NUL-terminated printable ASCII.
    #[error("invalid command field {}", hex::encode(.0))]
    InvalidCommand([u8; 12]),

    #[error("payload too large: {length} bytes (max: {max})")]
    PayloadTooLarge { length: usize, max: usize },

    #[error("checksum mismatch: header {}, payload {}", hex::encode(.expected), hex::encode(.actual))]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },

    /// A well-framed message whose command this crate does not know.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// The payload decoder did not consume exactly `length` bytes.
    #[error("{command}: payload is {length} bytes but decoder consumed {consumed}")]
    PayloadLengthMismatch {
        command: &'static str,
        length: usize,
        consumed: usize,
    },

    #[error("random source exhausted: {0}")]
    RandomSourceExhausted(String),

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: u64 },

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },
}

impl WireError {
    /// True for [`WireError::UnknownCommand`].
    ///
    /// Many nodes treat unrecognised but well-framed messages as
    /// forward-compatible no-ops; this lets callers make that call.
    pub fn is_unknown_command(&self) -> bool {
        matches!(self, WireError::UnknownCommand(_))
    }

    /// True when the failure may go away once more bytes arrive.
    pub fn is_truncated(&self) -> bool {
        matches!(self, WireError::TruncatedInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, WireError>;
