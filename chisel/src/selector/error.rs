use crate::selector::FragmentKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (got a second {kind})"
    )]
    DuplicateSegment { kind: FragmentKind },
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} cannot follow {after})"
    )]
    Order {
        kind: FragmentKind,
        after: FragmentKind,
    },
}

impl SelectorError {
    /// The kind whose append was rejected.
    pub fn kind(&self) -> FragmentKind {
        match self {
            SelectorError::DuplicateSegment { kind } | SelectorError::Order { kind, .. } => *kind,
        }
    }
}
