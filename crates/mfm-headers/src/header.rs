use std::fmt;

use serde::{Deserialize, Serialize};

/// A single mail header: a name/value pair.
///
/// Equality is field-wise and byte-exact; no case folding is applied.
/// Messages legitimately repeat header names, so a `Header` is not unique
/// by name — uniqueness and ordering live in [`Headers`](crate::Headers).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header field name as it appears in the message.
    pub name: String,
    /// Header field value, without the separating colon and space.
    pub value: String,
}

impl Header {
    /// Create a new header.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
