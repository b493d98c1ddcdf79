//! Filtering-policy types for the mail filter manager.
//!
//! An [`ApplicableCondition`] names a rule set that decides when a
//! filtering policy applies to a mail session. Conditions are defined in
//! several places — built-in defaults, site configuration, per-host
//! overrides — and a [`ConditionSet`] collects those definitions into one
//! registry, unique by name, merging duplicates so that earlier sources
//! win and later sources only fill the gaps.

pub mod condition;
pub mod set;

pub use condition::ApplicableCondition;
pub use set::ConditionSet;
