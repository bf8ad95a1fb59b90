use crate::selector::{Fragment, FragmentKind, SelectorError};
use std::fmt::{Display, Formatter};

/// Canonical starting point for every selector chain.
pub static BUILDER: SelectorBuilder = SelectorBuilder::new();

/// Immutable selector value. Every append returns a new builder and leaves
/// the receiver untouched, so any builder can be reused as a starting point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    fragments: Vec<Fragment>,
}

impl SelectorBuilder {
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    pub fn element(&self, name: &str) -> Result<Self, SelectorError> {
        self.add(FragmentKind::Element, name)
    }

    pub fn id(&self, name: &str) -> Result<Self, SelectorError> {
        self.add(FragmentKind::Id, name)
    }

    pub fn class(&self, name: &str) -> Result<Self, SelectorError> {
        self.add(FragmentKind::Class, name)
    }

    pub fn attr(&self, expr: &str) -> Result<Self, SelectorError> {
        self.add(FragmentKind::Attribute, expr)
    }

    pub fn pseudo_class(&self, name: &str) -> Result<Self, SelectorError> {
        self.add(FragmentKind::PseudoClass, name)
    }

    pub fn pseudo_element(&self, name: &str) -> Result<Self, SelectorError> {
        self.add(FragmentKind::PseudoElement, name)
    }

    /// Joins two independently built selectors with `combinator`, padded by a
    /// single space on each side. The combinator is inserted verbatim.
    pub fn combine(
        &self,
        left: &SelectorBuilder,
        combinator: &str,
        right: &SelectorBuilder,
    ) -> Result<Self, SelectorError> {
        let text = format!("{} {combinator} {}", left.stringify(), right.stringify());
        self.add(FragmentKind::Combinator, &text)
    }

    pub fn stringify(&self) -> String {
        self.fragments.iter().map(Fragment::text).collect()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn add(&self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        let mut fragments = self.fragments.clone();
        fragments.push(Fragment::new(kind, value));

        if let Err(e) = validate(&fragments) {
            tracing::debug!("rejected {kind} `{value}` after `{}`: {e}", self.stringify());
            return Err(e);
        }

        Ok(Self { fragments })
    }
}

impl Display for SelectorBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.text())?;
        }
        Ok(())
    }
}

fn validate(fragments: &[Fragment]) -> Result<(), SelectorError> {
    let mut seen: Vec<FragmentKind> = Vec::new();

    for kind in fragments.iter().map(Fragment::kind) {
        if seen.contains(&kind) {
            if kind.is_unique() {
                return Err(SelectorError::DuplicateSegment { kind });
            }
        } else {
            seen.push(kind);
        }
    }

    // `seen` holds the distinct kinds in first-occurrence order
    for pair in seen.windows(2) {
        if pair[1] <= pair[0] {
            return Err(SelectorError::Order {
                kind: pair[1],
                after: pair[0],
            });
        }
    }

    Ok(())
}
