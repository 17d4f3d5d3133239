//! Layout settings for the documentation renderer.
//!
//! The `[docs]` table of `defaults/docs.default.toml` is compiled into the crate and is
//! the only place the default layout is written down. [DEFAULT_DOCS] holds it once
//! loaded; [DocsLoader] stacks further TOML files or single keys on top of it.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

const EMBEDDED_DEFAULTS: &str = include_str!("../../defaults/docs.default.toml");

/// Table holding the renderer settings in every layer
const DOCS_TABLE: &str = "docs";

/// Default layout, read from the embedded TOML on first use
pub static DEFAULT_DOCS: Lazy<DocsConfig> = Lazy::new(|| {
    DocsLoader::new()
        .load()
        .expect("embedded docs defaults deserialize")
});

/// Layout knobs for the plain text reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocsConfig {
    /// Minimum width of the identifier column
    pub key_width: usize,
    /// Prefix for every non-blank line
    pub indent: String,
    /// Line under each section heading
    pub underline: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        DEFAULT_DOCS.clone()
    }
}

/// Stacks layout overrides on top of the embedded defaults.
///
/// Later layers win, key by key.
#[derive(Debug, Clone)]
pub struct DocsLoader {
    layers: ConfigBuilder<DefaultState>,
}

impl DocsLoader {
    pub fn new() -> Self {
        let layers = Config::builder()
            .add_source(File::from_str(EMBEDDED_DEFAULTS, FileFormat::Toml));
        DocsLoader { layers }
    }

    /// Add a TOML file layer; loading fails if the file is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let layer = File::from(path.as_ref()).format(FileFormat::Toml);
        DocsLoader {
            layers: self.layers.add_source(layer),
        }
    }

    /// Add an in-memory TOML layer.
    pub fn with_toml(self, source: &str) -> Self {
        DocsLoader {
            layers: self.layers.add_source(File::from_str(source, FileFormat::Toml)),
        }
    }

    /// Override a single setting by name, e.g. `("key_width", 12)`.
    pub fn with_setting<V>(self, name: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        let key = format!("{DOCS_TABLE}.{name}");
        Ok(DocsLoader {
            layers: self.layers.set_override(key, value)?,
        })
    }

    /// Merge all layers and read the `[docs]` table.
    pub fn load(self) -> Result<DocsConfig, ConfigError> {
        self.layers.build()?.get(DOCS_TABLE)
    }
}

impl Default for DocsLoader {
    fn default() -> Self {
        Self::new()
    }
}
