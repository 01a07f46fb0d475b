use std::ops::Add;

use crate::fragment::FragmentKind;

/// CSS specificity of a built selector.
///
/// Ordered lexicographically by ids, then classes, then types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }

    /// Counts one more fragment of `kind`.
    pub fn record(&mut self, kind: FragmentKind) {
        match kind {
            FragmentKind::Id => self.ids += 1,
            // Attributes have the same specificity as classes and pseudo-classes
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                self.classes += 1;
            }
            FragmentKind::Element | FragmentKind::PseudoElement => self.types += 1,
        }
    }
}

impl Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Self) -> Self::Output {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}
