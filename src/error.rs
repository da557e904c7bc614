//! Error types for tagforge.
//!
//! The only failure mode in the crate is a structural-precondition violation
//! raised when a mutation would break the tree invariants.

use thiserror::Error;

/// Errors that can occur while building a document tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A child was pushed onto a text node, which cannot contain markup.
    #[error("cannot add a child to a text node")]
    TextChild,

    /// A child was pushed onto a self-closing element.
    #[error("cannot add a child to <{tag}>: the tag does not require a closing tag")]
    VoidChild {
        /// Tag name of the offending element
        tag: String,
    },
}

/// Result type alias for tree-building operations.
pub type BuildResult<T> = Result<T, BuildError>;

impl BuildError {
    /// Create a [`BuildError::VoidChild`] for the given tag name.
    pub fn void_child(tag: impl Into<String>) -> Self {
        Self::VoidChild { tag: tag.into() }
    }
}
