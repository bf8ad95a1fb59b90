pub mod cli;
pub mod config;
pub mod render;
pub mod selector;
pub mod sheet;
pub mod styling;

pub use selector::{BUILDER, Fragment, FragmentKind, SelectorBuilder, SelectorError};
pub use sheet::{BuiltSelector, Sheet, SheetError, Step};
pub use styling::css::CssRule;
