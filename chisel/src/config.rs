use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use strum_macros::Display;

pub const CONFIG_FILE: &str = ".chisel.toml";
pub const DEFAULT_SHEET: &str = "selectors.toml";

#[derive(Debug, Default, Deserialize)]
pub struct ChiselConfig {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_sheet")]
    pub sheet: String,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sheet: default_sheet(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One `name: selector` line per selector
    #[default]
    Plain,
    /// A CSS rule block per selector
    Css,
}

fn default_sheet() -> String {
    DEFAULT_SHEET.to_string()
}

pub fn load_config() -> Result<ChiselConfig> {
    load_config_from(CONFIG_FILE)
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<ChiselConfig> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(ChiselConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
