//! Control-channel reply framing for the mail filter manager.
//!
//! The manager answers administrative commands over its control channel
//! with one reply per command: success, failure, or error. Replies travel
//! as length-prefixed frames; [`ReplyCodec`] handles one frame at a time
//! and [`ReplyDecoder`] reassembles frames from a byte stream arriving in
//! arbitrary chunks.

pub mod codec;
pub mod error;
pub mod reply;

pub use codec::{ReplyCodec, ReplyDecoder};
pub use error::{ControlError, ControlResult};
pub use reply::{ControlReply, MAX_CONTENT_SIZE};
