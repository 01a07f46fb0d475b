//! # selector - fluent CSS selector builder
//!
//! Builds CSS-like selector strings one fragment at a time while enforcing
//! the order and cardinality of selector parts. The builder does not parse
//! CSS or validate fragment values; it only guarantees the kinds appear in a
//! sensible sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector::{combine, Combinator};
//!
//! # fn main() -> selector::Result<()> {
//! let form = selector::id("main")?.class("container")?.class("editable")?;
//! assert_eq!(form.stringify(), "#main.container.editable");
//!
//! let link = selector::element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.to_string(), r#"a[href$=".png"]:focus"#);
//!
//! let both = combine(&form, Combinator::AdjacentSibling, &link);
//! assert_eq!(both.stringify(), r#"#main.container.editable + a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Fragment Order
//!
//! Fragments must be appended as element, id, class(es), attribute(s),
//! pseudo-class(es), pseudo-element. Element, id and pseudo-element may each
//! appear once. Breaking either rule returns a [`SelectorError`].
//!
//! ## Modules
//!
//! - [`builder`]: [`SelectorBuilder`] and the free functions that start a chain
//! - [`combine`](mod@combine): joining finished selectors with a [`Combinator`]
//! - [`fragment`]: fragment kinds and their canonical order
//! - [`specificity`]: CSS specificity of built selectors
//! - [`error`]: errors raised by invalid appends

pub mod builder;
pub mod combine;
pub mod error;
pub mod fragment;
pub mod specificity;

pub use builder::{
    SelectorBuilder, attr, class, element, id, pseudo_class, pseudo_element,
};
pub use combine::{CombinedSelector, Combinator, Rendered, combine};
pub use error::{Result, SelectorError};
pub use fragment::{FragmentKind, Fragments};
pub use specificity::Specificity;
