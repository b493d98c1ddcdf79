use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest allowed frame content (status byte plus message) in bytes.
///
/// Control replies carry short status messages; the cap bounds buffering
/// against a peer that declares an absurd frame length.
pub const MAX_CONTENT_SIZE: usize = 1024 * 1024;

/// A reply sent over the manager's control channel.
///
/// Every control operation answers with exactly one reply: plain success,
/// a failure carrying the negative result, or an error describing why the
/// operation could not be performed at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlReply {
    /// The operation completed.
    Success,
    /// The operation ran and reported a negative result.
    Failure { message: String },
    /// The operation could not be performed.
    Error { message: String },
}

impl ControlReply {
    /// Build a failure reply.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Build an error reply.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Status byte identifying this reply on the wire.
    pub fn status_tag(&self) -> u8 {
        match self {
            Self::Success => b's',
            Self::Failure { .. } => b'f',
            Self::Error { .. } => b'e',
        }
    }

    /// Human-readable status name.
    pub fn status_name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure { .. } => "Failure",
            Self::Error { .. } => "Error",
        }
    }

    /// The attached message, if this reply carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message } | Self::Error { message } => Some(message),
        }
    }

    /// Returns `true` for a success reply.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for a failure reply.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Returns `true` for an error reply.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for ControlReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure { message } => write!(f, "Failure: {message}"),
            Self::Error { message } => write!(f, "Error: {message}"),
        }
    }
}
