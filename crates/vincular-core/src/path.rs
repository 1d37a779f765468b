//! Property paths naming bindable properties on a source.
//!
//! A path is stored as its rendered dot-notation form ("owner.name"),
//! normalized once at construction (stray dots collapse, empty segments
//! drop out). Equality and hashing are over that rendered string, which is
//! exactly the guarantee the registry relies on: two spellings that render
//! the same address the same manager key. Matching is case-sensitive;
//! `"Text"` and `"text"` are different keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized, case-sensitive property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyPath {
    rendered: String,
}

impl PropertyPath {
    /// Parse a dot-notation path, dropping empty segments.
    #[must_use]
    pub fn new(path: &str) -> Self {
        let rendered = path
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        Self { rendered }
    }

    /// The rendered form used as the registry key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Iterate the path's segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.rendered.split('.').filter(|segment| !segment.is_empty())
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Whether the path names nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl From<&str> for PropertyPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PropertyPath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_renderings_share_a_registry_key() {
        // Stray dots normalize away, so these all address the same manager.
        let canonical = PropertyPath::new("owner.name");
        assert_eq!(PropertyPath::new(".owner.name"), canonical);
        assert_eq!(PropertyPath::new("owner..name."), canonical);
        assert_eq!(canonical.as_str(), "owner.name");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_ne!(PropertyPath::new("Text"), PropertyPath::new("text"));
    }

    #[test]
    fn test_segments_of_nested_path() {
        let path = PropertyPath::new("owner.address.city");
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, ["owner", "address", "city"]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_single_property_name() {
        let path = PropertyPath::new("Text");
        assert_eq!(path.len(), 1);
        assert_eq!(path.as_str(), "Text");
    }

    #[test]
    fn test_empty_path_names_nothing() {
        assert!(PropertyPath::new("").is_empty());
        assert!(PropertyPath::new("...").is_empty());
        assert_eq!(PropertyPath::new("").len(), 0);
    }

    #[test]
    fn test_display_matches_registry_key() {
        let path = PropertyPath::new("owner..name");
        assert_eq!(path.to_string(), path.as_str());
    }

    #[test]
    fn test_from_str_and_string() {
        let from_str: PropertyPath = "Text".into();
        let from_string: PropertyPath = String::from("Text").into();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let path = PropertyPath::new("owner.name");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"owner.name\"");
        let back: PropertyPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
