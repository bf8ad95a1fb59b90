use strum_macros::{Display, EnumIter};

/// Kind of a selector segment.
///
/// Variants are declared in priority order, so the derived `Ord` is the order
/// in which distinct kinds may first appear in a selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
    Combinator,
}

impl FragmentKind {
    /// Position in the priority order, starting at zero for `Element`.
    pub fn priority(self) -> usize {
        self as usize
    }

    /// Kinds that may occur at most once in a selector.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }

    /// Formats a raw argument the way this kind is written in a selector.
    pub fn render(self, value: &str) -> String {
        match self {
            FragmentKind::Element | FragmentKind::Combinator => value.to_string(),
            FragmentKind::Id => format!("#{value}"),
            FragmentKind::Class => format!(".{value}"),
            FragmentKind::Attribute => format!("[{value}]"),
            FragmentKind::PseudoClass => format!(":{value}"),
            FragmentKind::PseudoElement => format!("::{value}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, value: &str) -> Self {
        Self {
            kind,
            text: kind.render(value),
        }
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
