//! Theme project scaffolding

use anyhow::{Context, Result};
use chroma_color::validate_and_normalize;
use chroma_overlay::validate_package_name;
use std::fs;
use std::path::Path;

use crate::config::{ChromaConfig, CONFIG_FILE};

const CONFIG_HEADER: &str = r##"# Chroma theme configuration
#
# [theme]       seed color ("#RRGGBB" or "#AARRGGBB"), package id and label
# [components]  status_bar, navigation_bar, system_ui, settings, launcher
# [output]      path of the generated archive (default: <package>.zip)

"##;

/// Create a new theme project with a starter chroma.toml
///
/// The seed and package are checked first so a config that `chroma build`
/// would reject is never written.
pub fn create_project(path: &Path, package: &str, seed: &str, name: &str) -> Result<()> {
    validate_and_normalize(seed)?;
    validate_package_name(package)?;

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let config = ChromaConfig::new(package, seed, name);
    fs::write(&config_path, format!("{CONFIG_HEADER}{}", config.to_toml()?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    // Create .gitignore
    fs::write(
        path.join(".gitignore"),
        r#"# Generated overlay archives
*.zip

# OS
.DS_Store
Thumbs.db
"#,
    )?;

    tracing::info!(path = %config_path.display(), "created theme project");
    Ok(())
}
