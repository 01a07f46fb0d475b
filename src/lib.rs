//! Selector builder and shape exercises.
//!
//! Re-exports the [`selector`] and [`shape`] crates under one roof and
//! provides a file logger for the demos.
//!
//! ```rust
//! use css_kata::{combine, Combinator, Rectangle};
//!
//! fn run() -> css_kata::Result<String> {
//!     let nav = css_kata::selector::element("nav")?;
//!     let link = css_kata::selector::element("a")?.pseudo_class("hover")?;
//!     let rect: Rectangle = css_kata::shape::deserialize(r#"{"width":2,"height":3}"#)?;
//!     Ok(format!("{} {}", combine(&nav, Combinator::Child, &link), rect.area()))
//! }
//!
//! assert_eq!(run().unwrap(), "nav > a:hover 6");
//! ```

pub mod error;
mod log_init;

pub use error::{KataError, Result};
pub use log_init::{init_logger, init_logger_with_level};

pub use selector;
pub use selector::{
    Combinator, CombinedSelector, FragmentKind, SelectorBuilder, SelectorError, Specificity,
    combine,
};
pub use shape;
pub use shape::{Rectangle, Revive, ShapeError};
