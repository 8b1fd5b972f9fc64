//! Component flags
//!
//! A component is a system UI surface that can receive themed resource
//! entries. Flags default to off.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Known themeable surfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    StatusBar,
    NavigationBar,
    SystemUi,
    Settings,
    Launcher,
}

impl Component {
    /// Stable key used in flag maps and generated documents
    pub fn key(self) -> &'static str {
        match self {
            Self::StatusBar => "status_bar",
            Self::NavigationBar => "navigation_bar",
            Self::SystemUi => "system_ui",
            Self::Settings => "settings",
            Self::Launcher => "launcher",
        }
    }

    /// Full vocabulary, in document order.
    pub fn all() -> &'static [Component] {
        const COMPONENTS: [Component; 5] = [
            Component::StatusBar,
            Component::NavigationBar,
            Component::SystemUi,
            Component::Settings,
            Component::Launcher,
        ];
        &COMPONENTS
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::all()
            .iter()
            .copied()
            .find(|component| component.key() == s)
            .ok_or_else(|| format!("unknown component `{s}`"))
    }
}

/// Which components receive themed entries
///
/// Deserializes from any string-keyed table of booleans through
/// [`ComponentFlags::from_map`], so unknown keys are warned about and ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "HashMap<String, bool>")]
pub struct ComponentFlags {
    pub status_bar: bool,
    pub navigation_bar: bool,
    pub system_ui: bool,
    pub settings: bool,
    pub launcher: bool,
}

impl ComponentFlags {
    /// Build from a string-keyed map. Unknown keys are logged and ignored.
    pub fn from_map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut flags = Self::default();
        for (key, enabled) in entries {
            match key.as_ref().parse::<Component>() {
                Ok(component) => flags.set(component, enabled),
                Err(_) => tracing::warn!(key = key.as_ref(), "ignoring unknown component flag"),
            }
        }
        flags
    }

    pub fn is_enabled(&self, component: Component) -> bool {
        match component {
            Component::StatusBar => self.status_bar,
            Component::NavigationBar => self.navigation_bar,
            Component::SystemUi => self.system_ui,
            Component::Settings => self.settings,
            Component::Launcher => self.launcher,
        }
    }

    pub fn set(&mut self, component: Component, enabled: bool) {
        match component {
            Component::StatusBar => self.status_bar = enabled,
            Component::NavigationBar => self.navigation_bar = enabled,
            Component::SystemUi => self.system_ui = enabled,
            Component::Settings => self.settings = enabled,
            Component::Launcher => self.launcher = enabled,
        }
    }

    /// Builder-style [`ComponentFlags::set`]
    pub fn with(mut self, component: Component, enabled: bool) -> Self {
        self.set(component, enabled);
        self
    }

    /// Every component paired with its flag, in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (Component, bool)> + '_ {
        Component::all().iter().map(move |&c| (c, self.is_enabled(c)))
    }
}

impl From<HashMap<String, bool>> for ComponentFlags {
    fn from(map: HashMap<String, bool>) -> Self {
        Self::from_map(map)
    }
}
