//! The fluent selector builder.
//!
//! Each append consumes the builder and hands it back on success, so chains
//! read naturally with `?`:
//!
//! ```rust
//! # fn main() -> selector::Result<()> {
//! let sel = selector::element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::{Result, SelectorError};
use crate::fragment::{FragmentKind, Fragments};
use crate::specificity::Specificity;

/// In-progress selector.
///
/// Tracks the rendered text plus which fragment kinds have been seen, which is
/// all the state needed to enforce ordering and cardinality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    text: String,
    seen: Fragments,
    specificity: Specificity,
}

impl SelectorBuilder {
    /// Creates an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element (type) name. Must be the first fragment.
    pub fn element(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(FragmentKind::Element, value.as_ref())
    }

    /// Appends `#value`.
    pub fn id(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(FragmentKind::Id, value.as_ref())
    }

    /// Appends `.value`. May repeat.
    pub fn class(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(FragmentKind::Class, value.as_ref())
    }

    /// Appends `[value]`. May repeat.
    pub fn attr(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(FragmentKind::Attribute, value.as_ref())
    }

    /// Appends `:value`. May repeat.
    pub fn pseudo_class(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(FragmentKind::PseudoClass, value.as_ref())
    }

    /// Appends `::value`. Must be the last fragment.
    pub fn pseudo_element(self, value: impl AsRef<str>) -> Result<Self> {
        self.push(FragmentKind::PseudoElement, value.as_ref())
    }

    /// Appends a fragment of any kind after validating it.
    ///
    /// The value is used verbatim; only the kind sequence is checked.
    pub fn push(mut self, kind: FragmentKind, value: &str) -> Result<Self> {
        if let Err(err) = self.check(kind) {
            debug!("rejected {kind} '{value}' on '{}': {err}", self.text);
            return Err(err);
        }

        kind.render_into(&mut self.text, value);
        self.seen |= kind.flag();
        self.specificity.record(kind);
        trace!("appended {kind} '{value}' -> '{}'", self.text);
        Ok(self)
    }

    /// Returns whether a fragment of `kind` could be appended right now.
    ///
    /// Cardinality is checked before ordering, so a repeated element reports
    /// [`SelectorError::DuplicateFragment`].
    pub fn check(&self, kind: FragmentKind) -> Result<()> {
        if kind.is_unique() && self.seen.contains(kind.flag()) {
            return Err(SelectorError::DuplicateFragment(kind));
        }

        let blocking = self.seen & kind.successors();
        if let Some(after) = blocking.latest() {
            return Err(SelectorError::OutOfOrderFragment { kind, after });
        }

        Ok(())
    }

    /// The text built so far.
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// True until the first fragment is appended, even if that fragment's value is empty.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Fragment kinds appended so far.
    pub fn fragments(&self) -> Fragments {
        self.seen
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for SelectorBuilder {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<SelectorBuilder> for String {
    fn from(builder: SelectorBuilder) -> Self {
        builder.text
    }
}

/// Starts a selector with an element name.
pub fn element(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    SelectorBuilder::new().element(value)
}

/// Starts a selector with `#value`.
pub fn id(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    SelectorBuilder::new().id(value)
}

/// Starts a selector with `.value`.
pub fn class(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    SelectorBuilder::new().class(value)
}

/// Starts a selector with `[value]`.
pub fn attr(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    SelectorBuilder::new().attr(value)
}

/// Starts a selector with `:value`.
pub fn pseudo_class(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Starts a selector with `::value`.
pub fn pseudo_element(value: impl AsRef<str>) -> Result<SelectorBuilder> {
    SelectorBuilder::new().pseudo_element(value)
}
