pub mod builder;
pub mod error;
pub mod fragment;

pub use builder::{BUILDER, SelectorBuilder};
pub use error::SelectorError;
pub use fragment::{Fragment, FragmentKind};
