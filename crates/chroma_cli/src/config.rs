//! Chroma configuration file handling

use anyhow::{Context, Result};
use chroma_overlay::{ComponentFlags, ThemeRequest, DEFAULT_THEME_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "chroma.toml";

/// Top-level Chroma configuration (chroma.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct ChromaConfig {
    pub theme: ThemeConfig,
    #[serde(default)]
    pub components: ComponentFlags,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Theme identity and seed color
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Seed color, `#RRGGBB` or `#AARRGGBB`
    pub seed: String,
    /// Package identifier of the generated overlay
    pub package: String,
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

/// Output configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Archive path (relative to the config file). Defaults to `<package>.zip`
    #[serde(default)]
    pub path: Option<String>,
}

impl ChromaConfig {
    /// Load configuration from a directory (looks for chroma.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {CONFIG_FILE} found in {}. Run `chroma init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create a new configuration for the given package and seed
    pub fn new(package: &str, seed: &str, name: &str) -> Self {
        Self {
            theme: ThemeConfig {
                seed: seed.to_string(),
                package: package.to_string(),
                name: name.to_string(),
            },
            components: ComponentFlags::default(),
            output: OutputConfig::default(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn to_request(&self) -> ThemeRequest {
        ThemeRequest::new(&self.theme.seed, &self.theme.package)
            .theme_name(&self.theme.name)
            .components(self.components)
    }

    /// Where the archive goes, resolved against `root`
    pub fn output_path(&self, root: &Path) -> PathBuf {
        match &self.output.path {
            Some(path) => root.join(path),
            None => root.join(format!("{}.zip", self.theme.package)),
        }
    }
}
