//! Ordered mail-header collection for the mail filter manager.
//!
//! A message carries its headers as an ordered list in which the same name
//! may appear repeatedly. [`Headers`] keeps that list and supports the
//! manager-side edits an MTA applies on behalf of its filters: append,
//! positional insert, and nth-occurrence change and delete.

pub mod header;
pub mod headers;

pub use header::Header;
pub use headers::Headers;
