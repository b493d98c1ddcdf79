use bytes::{Buf, BytesMut};
use tracing::{debug, warn};

use crate::error::{ControlError, ControlResult};
use crate::reply::{ControlReply, MAX_CONTENT_SIZE};

/// Size of the 4-byte big-endian content-length prefix.
const LENGTH_PREFIX_SIZE: usize = 4;

/// Stateless codec for control reply frames.
///
/// Frame layout: `[4 bytes content length, big-endian][1 byte status][message]`.
/// The length prefix counts the status byte and the message, not itself.
/// Status bytes are `'s'` (success, no message), `'f'` (failure), and
/// `'e'` (error); failure and error messages are UTF-8 and may be empty.
pub struct ReplyCodec;

impl ReplyCodec {
    /// Encode one reply as a framed packet.
    pub fn encode(reply: &ControlReply) -> ControlResult<Vec<u8>> {
        let message = reply.message().unwrap_or("");
        let content_len = 1 + message.len();
        if content_len > MAX_CONTENT_SIZE {
            return Err(ControlError::FrameTooLarge {
                size: content_len,
                max: MAX_CONTENT_SIZE,
            });
        }
        let mut buf = Vec::with_capacity(LENGTH_PREFIX_SIZE + content_len);
        buf.extend_from_slice(&(content_len as u32).to_be_bytes());
        buf.push(reply.status_tag());
        buf.extend_from_slice(message.as_bytes());
        Ok(buf)
    }

    /// Decode one framed reply. Returns the reply and total bytes consumed;
    /// bytes past the frame end are left for the caller.
    pub fn decode(data: &[u8]) -> ControlResult<(ControlReply, usize)> {
        if data.len() < LENGTH_PREFIX_SIZE {
            return Err(ControlError::Incomplete {
                have: data.len(),
                need: LENGTH_PREFIX_SIZE,
            });
        }
        let content_len =
            u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
        if content_len == 0 {
            return Err(ControlError::EmptyFrame);
        }
        if content_len > MAX_CONTENT_SIZE {
            return Err(ControlError::FrameTooLarge {
                size: content_len,
                max: MAX_CONTENT_SIZE,
            });
        }
        let total = LENGTH_PREFIX_SIZE + content_len;
        if data.len() < total {
            return Err(ControlError::Incomplete {
                have: data.len(),
                need: total,
            });
        }

        let status = data[LENGTH_PREFIX_SIZE];
        let message = &data[LENGTH_PREFIX_SIZE + 1..total];
        let reply = match status {
            b's' => {
                if !message.is_empty() {
                    return Err(ControlError::UnexpectedPayload {
                        len: message.len(),
                    });
                }
                ControlReply::Success
            }
            b'f' => ControlReply::Failure {
                message: decode_message(message)?,
            },
            b'e' => ControlReply::Error {
                message: decode_message(message)?,
            },
            other => return Err(ControlError::UnknownStatus(other)),
        };
        Ok((reply, total))
    }
}

fn decode_message(bytes: &[u8]) -> ControlResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ControlError::InvalidUtf8(e.to_string()))
}

/// Stream decoder that accepts input at arbitrary chunk boundaries.
///
/// Input is buffered until whole frames are available; each [`feed`]
/// drains every complete frame and returns the decoded replies in wire
/// order. A partial trailing frame stays buffered for the next call.
///
/// A malformed frame whose boundary is known (unknown status, invalid
/// UTF-8, payload after a success status) is consumed before the error is
/// returned, so decoding resumes at the next frame; replies decoded ahead
/// of the bad frame are retained and returned by the following call. A
/// declared length of zero or over [`MAX_CONTENT_SIZE`] leaves no way to
/// resynchronize a length-prefixed stream: the buffer is dropped and the
/// caller is expected to close the connection.
///
/// [`feed`]: Self::feed
#[derive(Debug, Default)]
pub struct ReplyDecoder {
    buffer: BytesMut,
    ready: Vec<ControlReply>,
}

impl ReplyDecoder {
    /// Create a decoder with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of input and drain every complete frame.
    pub fn feed(&mut self, bytes: &[u8]) -> ControlResult<Vec<ControlReply>> {
        self.buffer.extend_from_slice(bytes);

        loop {
            match ReplyCodec::decode(&self.buffer) {
                Ok((reply, consumed)) => {
                    self.buffer.advance(consumed);
                    self.ready.push(reply);
                }
                Err(ControlError::Incomplete { .. }) => break,
                Err(err @ (ControlError::EmptyFrame | ControlError::FrameTooLarge { .. })) => {
                    warn!(
                        error = %err,
                        dropped = self.buffer.len(),
                        "unrecoverable framing on control stream; dropping buffer"
                    );
                    self.buffer.clear();
                    return Err(err);
                }
                Err(err) => {
                    // The length prefix already parsed, so the frame
                    // boundary is known; skip past the bad frame.
                    let content_len = u32::from_be_bytes([
                        self.buffer[0],
                        self.buffer[1],
                        self.buffer[2],
                        self.buffer[3],
                    ]) as usize;
                    self.buffer.advance(LENGTH_PREFIX_SIZE + content_len);
                    warn!(
                        error = %err,
                        skipped = content_len,
                        "skipping malformed control reply frame"
                    );
                    return Err(err);
                }
            }
        }

        if !self.ready.is_empty() {
            debug!(count = self.ready.len(), "decoded control replies");
        }
        Ok(std::mem::take(&mut self.ready))
    }

    /// Bytes buffered awaiting frame completion.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}
