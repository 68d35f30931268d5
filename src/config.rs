//! Render configuration loaded from TOML.
//!
//! `defaults/md2docx.default.toml` is embedded into the binary and carries the
//! style preset plus the numbering definitions that go with it. User files are
//! layered on top via [`Loader`]: tables merge key by key, while arrays and
//! scalars in the later layer replace the earlier value.

use crate::converter::StyleConfig;
use crate::document::NumberingDefinition;
use crate::{RenderOptions, Result, UnsupportedNodePolicy};
use serde::Deserialize;
use std::path::Path;
use toml::{Table, Value};
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/md2docx.default.toml");

/// Top-level configuration consumed by the converter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub styles: StyleConfig,
    pub unsupported_nodes: UnsupportedNodePolicy,
    pub numbering: Vec<NumberingDefinition>,
}

impl RenderConfig {
    /// The embedded defaults.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_TOML)
    }

    /// Parses a standalone configuration; missing keys fall back to empty
    /// styles and [`UnsupportedNodePolicy::Ignore`].
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            styles: config.styles,
            unsupported_nodes: config.unsupported_nodes,
            numbering: config.numbering,
        }
    }
}

/// Layers configuration sources before deserializing into [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct Loader {
    merged: Table,
}

impl Loader {
    /// Starts from an empty configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts from the embedded defaults.
    pub fn new() -> Result<Self> {
        Self::empty().with_toml(DEFAULT_TOML)
    }

    /// Layers a TOML document.
    pub fn with_toml(mut self, source: &str) -> Result<Self> {
        let layer: Table = toml::from_str(source)?;
        merge(&mut self.merged, layer);
        Ok(self)
    }

    /// Layers a configuration file. Missing files are an error.
    pub fn with_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let source = std::fs::read_to_string(path)?;
        self.with_toml(&source)
    }

    pub fn build(self) -> Result<RenderConfig> {
        Ok(Value::Table(self.merged).try_into::<RenderConfig>()?)
    }
}

fn merge(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => merge(existing, incoming),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
