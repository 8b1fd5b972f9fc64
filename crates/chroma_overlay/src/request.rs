//! Compile input and identifier validation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::component::ComponentFlags;
use crate::error::{OverlayError, Result};

pub const DEFAULT_THEME_NAME: &str = "Custom Theme";

/// Everything one compile needs. Built by the caller and passed by reference;
/// the compiler keeps no state between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRequest {
    /// Seed color as `#RRGGBB` or `#AARRGGBB`
    pub seed: String,
    /// Package identifier of the generated overlay, e.g. `com.example.theme`
    pub package_name: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub components: ComponentFlags,
}

fn default_theme_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

impl ThemeRequest {
    pub fn new(seed: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            package_name: package_name.into(),
            theme_name: default_theme_name(),
            components: ComponentFlags::default(),
        }
    }

    pub fn theme_name(mut self, name: impl Into<String>) -> Self {
        self.theme_name = name.into();
        self
    }

    pub fn components(mut self, components: ComponentFlags) -> Self {
        self.components = components;
        self
    }

    /// Set components from a string-keyed flag map. Unknown keys are ignored.
    pub fn component_map(mut self, flags: &HashMap<String, bool>) -> Self {
        self.components = ComponentFlags::from_map(flags.iter().map(|(k, &v)| (k, v)));
        self
    }

    /// Theme name with surrounding whitespace removed, falling back to
    /// [`DEFAULT_THEME_NAME`] when blank.
    pub fn display_name(&self) -> &str {
        match self.theme_name.trim() {
            "" => DEFAULT_THEME_NAME,
            name => name,
        }
    }
}

/// Check that `name` is a dotted package identifier.
///
/// At least two segments; each starts with an ASCII letter and continues
/// with ASCII letters, digits or `_`.
pub fn validate_package_name(name: &str) -> Result<&str> {
    let segments: Vec<&str> = name.split('.').collect();
    let valid = segments.len() >= 2
        && segments.iter().all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

    if valid {
        Ok(name)
    } else {
        Err(OverlayError::InvalidPackageName {
            name: name.to_string(),
        })
    }
}
