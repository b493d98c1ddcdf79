//! Registry of applicable conditions, unique by name.
//!
//! Condition definitions arrive from several sources (built-in defaults,
//! site configuration, per-host overrides). A [`ConditionSet`] keeps one
//! entry per name in definition order; when a later source defines a name
//! again, the resident entry absorbs the newcomer by fill-in merge, so
//! values configured first win and later definitions only fill gaps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::condition::ApplicableCondition;

/// Insertion-ordered set of [`ApplicableCondition`]s, unique by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    conditions: Vec<ApplicableCondition>,
}

impl ConditionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Add a condition definition.
    ///
    /// If no condition with this name exists it is appended. Otherwise the
    /// resident entry absorbs the newcomer via
    /// [`ApplicableCondition::merge`]: present values stay, absent values
    /// are filled in.
    pub fn add(&mut self, condition: ApplicableCondition) {
        match self.find_mut(condition.name()) {
            Some(existing) => {
                debug!(
                    name = %condition.name(),
                    "merging duplicate condition definition into resident entry"
                );
                existing.merge(&condition);
            }
            None => self.conditions.push(condition),
        }
    }

    /// The condition with the given name, if present.
    pub fn find(&self, name: &str) -> Option<&ApplicableCondition> {
        self.conditions.iter().find(|c| c.name() == name)
    }

    /// Mutable access to the condition with the given name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ApplicableCondition> {
        self.conditions.iter_mut().find(|c| c.name() == name)
    }

    /// Remove and return the condition with the given name. The relative
    /// order of the remaining conditions is preserved.
    pub fn remove(&mut self, name: &str) -> Option<ApplicableCondition> {
        let index = self.conditions.iter().position(|c| c.name() == name)?;
        Some(self.conditions.remove(index))
    }

    /// Fold another set into this one, applying [`add`](Self::add) for each
    /// of `other`'s conditions in definition order.
    pub fn merge(&mut self, other: &ConditionSet) {
        for condition in &other.conditions {
            self.add(condition.clone());
        }
    }

    /// Number of conditions in the set.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns `true` if the set holds no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Iterate over the conditions in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, ApplicableCondition> {
        self.conditions.iter()
    }

    /// Condition names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.name()).collect()
    }
}

impl Default for ConditionSet {
    fn default() -> Self {
        Self::new()
    }
}
