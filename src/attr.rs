//! Attribute system for elements
//!
//! Attributes are plain key-value pairs in a `Vec`, kept in insertion order.
//! Duplicate names are allowed and preserved; nothing here validates or
//! escapes names or values.

/// Element attributes as simple key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get the first attribute value with the given name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Append an attribute. Duplicates are kept, never merged.
    fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.push((name.into(), value.into()));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        attrs.push_attr("id", "main");
        attrs.push_attr("class", "container");
        assert_eq!(attrs.len(), 2);

        assert_eq!(attrs.get_attr("id"), Some("main"));
        assert_eq!(attrs.get_attr("class"), Some("container"));
        assert_eq!(attrs.get_attr("href"), None);

        assert!(attrs.has_attr("id"));
        assert!(!attrs.has_attr("href"));
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let mut attrs: Attrs = Vec::new();
        attrs.push_attr("class", "a");
        attrs.push_attr("class", "b");

        assert_eq!(attrs.len(), 2);
        // Lookup returns the first occurrence
        assert_eq!(attrs.get_attr("class"), Some("a"));
        assert_eq!(attrs[1], ("class".to_string(), "b".to_string()));
    }
}
