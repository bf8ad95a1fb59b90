use crate::selector::{BUILDER, SelectorBuilder, SelectorError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to read sheet")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse sheet TOML")]
    Parse(#[from] toml::de::Error),
    #[error("Sheet not found: {0}")]
    NotFound(String),
    #[error("Selector `{0}` is declared more than once")]
    DuplicateName(String),
    #[error("Selector `{name}` has no steps")]
    EmptySelector { name: String },
    #[error("Selector `{name}` combines `{reference}`, which is not declared before it")]
    UnknownReference { name: String, reference: String },
    #[error("Invalid selector `{name}`")]
    Selector {
        name: String,
        #[source]
        source: SelectorError,
    },
}

/// One builder call, in the order it appears in the sheet.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Element(String),
    Id(String),
    Class(String),
    Attr(String),
    PseudoClass(String),
    PseudoElement(String),
    Combine {
        left: String,
        combinator: String,
        right: String,
    },
}

#[derive(Clone, Debug, Deserialize)]
pub struct SelectorDef {
    pub name: String,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub selectors: Vec<SelectorDef>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltSelector {
    pub name: String,
    pub selector: SelectorBuilder,
    pub properties: BTreeMap<String, String>,
}

impl FromStr for Sheet {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Sheet {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SheetError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    /// Builds every selector in declaration order. Each chain starts from the
    /// canonical builder; `combine` steps may only name earlier selectors.
    pub fn build(&self) -> Result<Vec<BuiltSelector>, SheetError> {
        let mut built: Vec<BuiltSelector> = Vec::with_capacity(self.selectors.len());

        for def in &self.selectors {
            if built.iter().any(|b| b.name == def.name) {
                return Err(SheetError::DuplicateName(def.name.clone()));
            }
            if def.steps.is_empty() {
                return Err(SheetError::EmptySelector {
                    name: def.name.clone(),
                });
            }

            let mut selector = BUILDER.clone();
            for step in &def.steps {
                selector = apply(&selector, step, &def.name, &built)?;
            }

            tracing::debug!("built selector {}: {selector}", def.name);
            built.push(BuiltSelector {
                name: def.name.clone(),
                selector,
                properties: def.properties.clone(),
            });
        }

        Ok(built)
    }
}

fn apply(
    base: &SelectorBuilder,
    step: &Step,
    name: &str,
    built: &[BuiltSelector],
) -> Result<SelectorBuilder, SheetError> {
    let result = match step {
        Step::Element(value) => base.element(value),
        Step::Id(value) => base.id(value),
        Step::Class(value) => base.class(value),
        Step::Attr(value) => base.attr(value),
        Step::PseudoClass(value) => base.pseudo_class(value),
        Step::PseudoElement(value) => base.pseudo_element(value),
        Step::Combine {
            left,
            combinator,
            right,
        } => {
            let left = lookup(built, name, left)?;
            let right = lookup(built, name, right)?;
            base.combine(left, combinator, right)
        }
    };

    result.map_err(|source| SheetError::Selector {
        name: name.to_string(),
        source,
    })
}

fn lookup<'a>(
    built: &'a [BuiltSelector],
    name: &str,
    reference: &str,
) -> Result<&'a SelectorBuilder, SheetError> {
    built
        .iter()
        .find(|b| b.name == reference)
        .map(|b| &b.selector)
        .ok_or_else(|| SheetError::UnknownReference {
            name: name.to_string(),
            reference: reference.to_string(),
        })
}
