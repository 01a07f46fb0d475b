//! Joining finished selectors with combinators.

use std::fmt;

use log::debug;

use crate::builder::SelectorBuilder;
use crate::specificity::Specificity;

/// Structural relationship between two selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    Child,           // >
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A finished selector that can be used as an operand of [`combine`].
pub trait Rendered {
    fn rendered(&self) -> &str;
    fn specificity(&self) -> Specificity;
}

impl Rendered for SelectorBuilder {
    fn rendered(&self) -> &str {
        self.stringify()
    }

    fn specificity(&self) -> Specificity {
        SelectorBuilder::specificity(self)
    }
}

/// Two selectors joined by a combinator.
///
/// Terminal: it can be rendered or combined again, but never extended with
/// more fragments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedSelector {
    text: String,
    specificity: Specificity,
}

impl CombinedSelector {
    pub fn stringify(&self) -> &str {
        &self.text
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Rendered for CombinedSelector {
    fn rendered(&self) -> &str {
        &self.text
    }

    fn specificity(&self) -> Specificity {
        self.specificity
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CombinedSelector {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<CombinedSelector> for String {
    fn from(combined: CombinedSelector) -> Self {
        combined.text
    }
}

/// Joins `left` and `right` as `"{left} {combinator} {right}"`.
///
/// The combinator is inserted verbatim and never validated, so
/// [`Combinator::Descendant`] produces three spaces between the operands.
///
/// ```rust
/// use selector::{Combinator, combine};
///
/// # fn main() -> selector::Result<()> {
/// let list = selector::element("ul")?;
/// let item = selector::element("li")?.class("active")?;
/// assert_eq!(combine(&list, Combinator::Child, &item).stringify(), "ul > li.active");
/// # Ok(())
/// # }
/// ```
pub fn combine<L, R>(left: &L, combinator: impl AsRef<str>, right: &R) -> CombinedSelector
where
    L: Rendered + ?Sized,
    R: Rendered + ?Sized,
{
    let combinator = combinator.as_ref();
    let left_text = left.rendered();
    let right_text = right.rendered();

    let mut text = String::with_capacity(left_text.len() + combinator.len() + right_text.len() + 2);
    text.push_str(left_text);
    text.push(' ');
    text.push_str(combinator);
    text.push(' ');
    text.push_str(right_text);

    debug!("combined '{left_text}' '{combinator}' '{right_text}'");

    CombinedSelector {
        text,
        specificity: left.specificity() + right.specificity(),
    }
}
