//! Vault configuration module.
//!
//! Handles loading and validating `annogen.toml` from the vault root.
//! Configuration is sparse: user files only specify the values they want to
//! override, everything else falls back to stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! sources_dir = "pdf"   # Folder holding source articles
//! exclude = []          # Extra root folders hidden from the class listing
//!
//! [canvas]
//! node_width = 400      # Canvas file-node width
//! node_height = 280     # Canvas file-node height
//! gap = 40              # Vertical gap between canvas nodes
//! ```
//!
//! Hidden folders (leading `.`) and the sources folder are always excluded
//! from the class listing; `exclude` adds to that set. Unknown keys are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Vault configuration loaded from `annogen.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaultConfig {
    /// Folder under the vault root holding source articles.
    pub sources_dir: String,
    /// Extra root folders hidden from the class listing.
    pub exclude: Vec<String>,
    /// Canvas layout settings.
    pub canvas: CanvasConfig,
}

fn default_sources_dir() -> String {
    "pdf".to_string()
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            sources_dir: default_sources_dir(),
            exclude: Vec::new(),
            canvas: CanvasConfig::default(),
        }
    }
}

impl VaultConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sources_dir must not be empty".into(),
            ));
        }
        if self.sources_dir.contains('/') || self.sources_dir.contains('\\') {
            return Err(ConfigError::Validation(
                "sources_dir must be a single folder name, not a path".into(),
            ));
        }
        if self.canvas.node_width == 0 || self.canvas.node_height == 0 {
            return Err(ConfigError::Validation(
                "canvas.node_width and canvas.node_height must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Geometry for generated canvas file nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Canvas file-node width in canvas units.
    pub node_width: u32,
    /// Canvas file-node height in canvas units.
    pub node_height: u32,
    /// Vertical gap between stacked canvas nodes.
    pub gap: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            node_width: 400,
            node_height: 280,
            gap: 40,
        }
    }
}

/// Load config from `annogen.toml` in the vault root.
///
/// Missing file means stock defaults. Unknown keys are rejected and the
/// result is validated.
pub fn load_config(vault: &Path) -> Result<VaultConfig, ConfigError> {
    let config_path = vault.join("annogen.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        VaultConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `annogen.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# annogen Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the vault root as annogen.toml.
# Unknown keys will cause an error.

# Folder under the vault root holding source articles.
sources_dir = "pdf"

# Extra root folders hidden from the class listing.
# Hidden folders (leading ".") and the sources folder are always excluded.
exclude = []

# ---------------------------------------------------------------------------
# Canvas layout
# ---------------------------------------------------------------------------
[canvas]
# Size of each generated file node, in canvas units.
node_width = 400
node_height = 280

# Vertical gap between stacked nodes.
gap = 40
"##
}
