//! Error types for selector construction.
//!
//! Building a selector can only fail in two ways: a fragment that may appear
//! once was appended a second time, or a fragment was appended after a kind
//! that must come later in the selector.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors that can occur while appending fragments to a [`SelectorBuilder`](crate::SelectorBuilder).
///
/// Errors are plain values compared by kind, so callers can match on them directly.
///
/// # Examples
///
/// ```rust
/// use selector::{FragmentKind, SelectorError};
///
/// let err = selector::element("div").and_then(|s| s.element("span")).unwrap_err();
/// assert_eq!(err, SelectorError::DuplicateFragment(FragmentKind::Element));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element was appended twice to the same selector.
    #[error("{0} may occur only once in a selector")]
    DuplicateFragment(FragmentKind),

    /// A fragment was appended after a kind that must follow it.
    ///
    /// `after` is the latest kind already present in the selector.
    #[error(
        "{kind} cannot come after {after}; selector parts must be ordered element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrderFragment {
        kind: FragmentKind,
        after: FragmentKind,
    },
}

impl SelectorError {
    /// The fragment kind whose append was rejected.
    pub fn kind(&self) -> FragmentKind {
        match self {
            SelectorError::DuplicateFragment(kind) => *kind,
            SelectorError::OutOfOrderFragment { kind, .. } => *kind,
        }
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, SelectorError>;
