//! Fragment kinds and their canonical ordering.
//!
//! A selector is made of fragments that must appear in this order:
//!
//! | Kind | Rendered as | May repeat |
//! |---|---|---|
//! | element | `div` | no |
//! | id | `#main` | no |
//! | class | `.primary` | yes |
//! | attribute | `[href]` | yes |
//! | pseudo-class | `:hover` | yes |
//! | pseudo-element | `::before` | no |

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Set of fragment kinds present in a selector.
    ///
    /// Bits are laid out in canonical order, so every kind that must come after
    /// a given kind occupies a higher bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Fragments: u8 {
        const ELEMENT = 1 << 0;
        const ID = 1 << 1;
        const CLASS = 1 << 2;
        const ATTRIBUTE = 1 << 3;
        const PSEUDO_CLASS = 1 << 4;
        const PSEUDO_ELEMENT = 1 << 5;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    /// All kinds in canonical order.
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Element,
        FragmentKind::Id,
        FragmentKind::Class,
        FragmentKind::Attribute,
        FragmentKind::PseudoClass,
        FragmentKind::PseudoElement,
    ];

    pub fn flag(self) -> Fragments {
        match self {
            FragmentKind::Element => Fragments::ELEMENT,
            FragmentKind::Id => Fragments::ID,
            FragmentKind::Class => Fragments::CLASS,
            FragmentKind::Attribute => Fragments::ATTRIBUTE,
            FragmentKind::PseudoClass => Fragments::PSEUDO_CLASS,
            FragmentKind::PseudoElement => Fragments::PSEUDO_ELEMENT,
        }
    }

    /// Whether the kind may occur at most once per selector.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }

    /// Kinds that must come after this one.
    pub fn successors(self) -> Fragments {
        let own = self.flag().bits();
        Fragments::from_bits_truncate(!(own | (own - 1)))
    }

    pub fn name(self) -> &'static str {
        match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
        }
    }

    /// Writes `value` wrapped in this kind's delimiters.
    pub(crate) fn render_into(self, out: &mut String, value: &str) {
        match self {
            FragmentKind::Element => out.push_str(value),
            FragmentKind::Id => {
                out.push('#');
                out.push_str(value);
            }
            FragmentKind::Class => {
                out.push('.');
                out.push_str(value);
            }
            FragmentKind::Attribute => {
                out.push('[');
                out.push_str(value);
                out.push(']');
            }
            FragmentKind::PseudoClass => {
                out.push(':');
                out.push_str(value);
            }
            FragmentKind::PseudoElement => {
                out.push_str("::");
                out.push_str(value);
            }
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Fragments {
    /// The kind furthest along the canonical order contained in this set.
    pub fn latest(self) -> Option<FragmentKind> {
        FragmentKind::ALL
            .into_iter()
            .rev()
            .find(|kind| self.contains(kind.flag()))
    }
}
