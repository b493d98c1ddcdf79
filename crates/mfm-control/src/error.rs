use thiserror::Error;

/// Errors produced while encoding or decoding control reply frames.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    /// Fewer bytes available than one whole frame.
    #[error("incomplete frame: have {have} bytes, need {need}")]
    Incomplete { have: usize, need: usize },

    /// The length prefix declared empty content (no status byte).
    #[error("zero-length frame")]
    EmptyFrame,

    /// The frame content exceeds the allowed cap.
    #[error("frame too large: {size} bytes (max {max})")]
    FrameTooLarge { size: usize, max: usize },

    /// The status byte is not one of the known reply statuses.
    #[error("unknown status byte: {0:#04x}")]
    UnknownStatus(u8),

    /// The reply message is not valid UTF-8.
    #[error("invalid UTF-8 in reply message: {0}")]
    InvalidUtf8(String),

    /// A success reply carried message bytes, which the protocol forbids.
    #[error("unexpected payload after success status: {len} bytes")]
    UnexpectedPayload { len: usize },
}

/// Convenience alias for control codec operations.
pub type ControlResult<T> = Result<T, ControlError>;
