//! Ordered header list with the manager-side edit operations.
//!
//! An MTA hands its filters the message headers as an ordered list and
//! applies edits on their behalf. The edit operations address headers two
//! ways: by list position (insert) and by the nth occurrence of a name
//! (change, delete), because repeated names are common and meaningful.

use serde::{Deserialize, Serialize};

use crate::header::Header;

/// Insertion-ordered collection of mail [`Header`]s.
///
/// Duplicate names are allowed; occurrence order is part of the data.
/// Every operation is total: positional misses fall back to appending and
/// absent occurrences are reported through return values, never errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headers {
    headers: Vec<Header>,
}

impl Headers {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header at the end of the list.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Header::new(name, value));
    }

    /// Insert a header at the given list position (0-based). A position at
    /// or beyond the current length appends.
    pub fn insert(
        &mut self,
        position: usize,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        let position = position.min(self.headers.len());
        self.headers.insert(position, Header::new(name, value));
    }

    /// Replace the value of the `nth` (1-based) header named `name`.
    ///
    /// When that occurrence does not exist, the header is appended instead,
    /// matching MTA change-header semantics. Returns `true` if an existing
    /// header was changed, `false` if the fallback appended.
    pub fn change(&mut self, name: &str, nth: usize, value: impl Into<String>) -> bool {
        match self.position_of_nth(name, nth) {
            Some(index) => {
                self.headers[index].value = value.into();
                true
            }
            None => {
                self.add(name, value);
                false
            }
        }
    }

    /// Remove the `nth` (1-based) header named `name`. Returns `false`
    /// when that occurrence does not exist.
    pub fn delete(&mut self, name: &str, nth: usize) -> bool {
        match self.position_of_nth(name, nth) {
            Some(index) => {
                self.headers.remove(index);
                true
            }
            None => false,
        }
    }

    /// The first header named `name`, if any.
    pub fn find(&self, name: &str) -> Option<&Header> {
        self.headers.iter().find(|h| h.name == name)
    }

    /// The header at the given list position.
    pub fn get(&self, index: usize) -> Option<&Header> {
        self.headers.get(index)
    }

    /// Number of headers in the list.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if the list holds no headers.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate over the headers in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.headers.iter()
    }

    /// All headers in list order.
    pub fn as_slice(&self) -> &[Header] {
        &self.headers
    }

    /// List index of the `nth` (1-based) occurrence of `name`.
    fn position_of_nth(&self, name: &str, nth: usize) -> Option<usize> {
        if nth == 0 {
            return None;
        }
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.name == name)
            .nth(nth - 1)
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(pairs: &[(&str, &str)]) -> Vec<Header> {
        pairs
            .iter()
            .map(|(name, value)| Header::new(*name, *value))
            .collect()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut headers = Headers::new();
        headers.add("First header", "First header value");
        headers.add("Second header", "Second header value");
        headers.add("Third header", "Third header value");

        assert_eq!(
            headers.as_slice(),
            expected(&[
                ("First header", "First header value"),
                ("Second header", "Second header value"),
                ("Third header", "Third header value"),
            ])
        );
    }

    #[test]
    fn insert_places_header_at_list_position() {
        let mut headers = Headers::new();
        headers.add("First header", "First header value");
        headers.add("Third header", "Third header value");
        headers.add("Fourth header", "Fourth header value");

        headers.insert(1, "Second header", "Second header value");

        assert_eq!(
            headers.as_slice(),
            expected(&[
                ("First header", "First header value"),
                ("Second header", "Second header value"),
                ("Third header", "Third header value"),
                ("Fourth header", "Fourth header value"),
            ])
        );
    }

    #[test]
    fn insert_at_zero_prepends() {
        let mut headers = Headers::new();
        headers.add("Second header", "Second header value");
        headers.insert(0, "First header", "First header value");

        assert_eq!(headers.get(0).unwrap().name, "First header");
        assert_eq!(headers.get(1).unwrap().name, "Second header");
    }

    #[test]
    fn insert_past_the_end_appends() {
        let mut headers = Headers::new();
        headers.add("First header", "First header value");
        headers.insert(10, "Last header", "Last header value");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get(1).unwrap().name, "Last header");
    }

    #[test]
    fn change_rewrites_the_nth_same_named_header() {
        let mut headers = Headers::new();
        headers.add("Test header", "Test header value");
        headers.add("Test header", "Test header value");
        headers.add("Unique header", "Unique header value");
        headers.add("Test header", "Test header value");

        assert!(headers.change("Test header", 3, "Replaced header value"));

        assert_eq!(
            headers.as_slice(),
            expected(&[
                ("Test header", "Test header value"),
                ("Test header", "Test header value"),
                ("Unique header", "Unique header value"),
                ("Test header", "Replaced header value"),
            ])
        );
    }

    #[test]
    fn change_first_occurrence_leaves_later_ones_alone() {
        let mut headers = Headers::new();
        headers.add("Test header", "original");
        headers.add("Test header", "original");

        assert!(headers.change("Test header", 1, "replaced"));

        assert_eq!(headers.get(0).unwrap().value, "replaced");
        assert_eq!(headers.get(1).unwrap().value, "original");
    }

    #[test]
    fn change_missing_occurrence_appends() {
        let mut headers = Headers::new();
        headers.add("Test header", "Test header value");

        assert!(!headers.change("Test header", 5, "appended value"));

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get(1).unwrap(),
            &Header::new("Test header", "appended value")
        );
    }

    #[test]
    fn change_unknown_name_appends() {
        let mut headers = Headers::new();

        assert!(!headers.change("X-Spam-Flag", 1, "YES"));

        assert_eq!(headers.as_slice(), expected(&[("X-Spam-Flag", "YES")]));
    }

    #[test]
    fn change_occurrence_zero_appends() {
        let mut headers = Headers::new();
        headers.add("Test header", "Test header value");

        assert!(!headers.change("Test header", 0, "appended value"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn delete_removes_only_the_nth_occurrence() {
        let mut headers = Headers::new();
        headers.add("Test header", "first");
        headers.add("Test header", "second");
        headers.add("Unique header", "Unique header value");
        headers.add("Test header", "third");

        assert!(headers.delete("Test header", 2));

        assert_eq!(
            headers.as_slice(),
            expected(&[
                ("Test header", "first"),
                ("Unique header", "Unique header value"),
                ("Test header", "third"),
            ])
        );
    }

    #[test]
    fn delete_missing_occurrence_returns_false() {
        let mut headers = Headers::new();
        headers.add("Test header", "Test header value");

        assert!(!headers.delete("Test header", 2));
        assert!(!headers.delete("Unknown header", 1));
        assert!(!headers.delete("Test header", 0));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn find_returns_first_occurrence() {
        let mut headers = Headers::new();
        headers.add("Received", "from relay-1");
        headers.add("Received", "from relay-2");

        assert_eq!(headers.find("Received").unwrap().value, "from relay-1");
        assert!(headers.find("Subject").is_none());
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let headers = Headers::new();
        assert!(headers.get(0).is_none());
    }

    #[test]
    fn len_and_is_empty() {
        let mut headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);

        headers.add("Subject", "Hello");
        assert!(!headers.is_empty());
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn iter_walks_list_order() {
        let mut headers = Headers::new();
        headers.add("First header", "1");
        headers.add("Second header", "2");

        let names: Vec<&str> = headers.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["First header", "Second header"]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut headers = Headers::new();
        headers.add("Subject", "Hello");
        headers.add("Received", "from localhost");

        let json = serde_json::to_string(&headers).unwrap();
        let parsed: Headers = serde_json::from_str(&json).unwrap();
        assert_eq!(headers, parsed);
    }
}
