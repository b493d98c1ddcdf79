use std::fmt;

use serde::{Deserialize, Serialize};

/// A named rule set determining when a filtering policy applies.
///
/// Conditions are identified by name and optionally carry a human-readable
/// description. The description is genuinely absent until set; an empty
/// string is a present value, not absence. Definitions for the same
/// condition can come from several sources; [`merge`](Self::merge) combines
/// two definitions by filling the gaps in one from the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicableCondition {
    name: String,
    description: Option<String>,
}

impl ApplicableCondition {
    /// Create a condition with the given name and no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// The condition name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the condition name. The set is unconditional; nothing else
    /// about the condition changes.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The description, if one has been set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Remove the description, returning the field to absent.
    pub fn clear_description(&mut self) {
        self.description = None;
    }

    /// Fill in missing fields from `other`.
    ///
    /// A description already present on `self` is kept; `other`'s
    /// description is adopted only when `self` has none. The name never
    /// participates in a merge. Merging is idempotent.
    pub fn merge(&mut self, other: &ApplicableCondition) {
        if self.description.is_none() {
            self.description = other.description.clone();
        }
    }
}

impl fmt::Display for ApplicableCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
