//! Resource documents
//!
//! A compile produces exactly five documents, always in the same order:
//!
//! | Kind              | Path                            |
//! |-------------------|---------------------------------|
//! | `Manifest`        | `AndroidManifest.xml`           |
//! | `LightColors`     | `res/values/colors.xml`         |
//! | `NightColors`     | `res/values-night/colors.xml`   |
//! | `DynamicColors`   | `res/values-v31/colors.xml`     |
//! | `OverlayConfig`   | `assets/overlays/config.xml`    |

pub mod colors;
pub mod descriptor;
pub mod manifest;

use chroma_color::SeedColor;

use crate::component::ComponentFlags;
use crate::error::{OverlayError, Result};
use crate::xml::{render_document, Element};

pub use colors::{
    AccentTriad, ColorEntry, ColorResources, ComponentColors, DynamicPalette, LightPalette,
    NavigationBarColors, NightPalette, StatusBarColors, SystemUiColors,
};
pub use descriptor::{OverlayDescriptor, ALWAYS_ON_FEATURES};
pub use manifest::{Manifest, OverlayTarget, OVERLAY_TARGETS};

/// Which generated file a document is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Manifest,
    LightColors,
    NightColors,
    DynamicColors,
    OverlayConfig,
}

impl DocumentKind {
    /// Archive entry path
    pub fn path(self) -> &'static str {
        match self {
            Self::Manifest => "AndroidManifest.xml",
            Self::LightColors => "res/values/colors.xml",
            Self::NightColors => "res/values-night/colors.xml",
            Self::DynamicColors => "res/values-v31/colors.xml",
            Self::OverlayConfig => "assets/overlays/config.xml",
        }
    }

    /// All kinds in archive order
    pub fn all() -> &'static [DocumentKind] {
        const KINDS: [DocumentKind; 5] = [
            DocumentKind::Manifest,
            DocumentKind::LightColors,
            DocumentKind::NightColors,
            DocumentKind::DynamicColors,
            DocumentKind::OverlayConfig,
        ];
        &KINDS
    }
}

/// One generated file: a fixed path and its UTF-8 text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDocument {
    kind: DocumentKind,
    content: String,
}

impl ResourceDocument {
    pub fn new(kind: DocumentKind, content: String) -> Self {
        Self { kind, content }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn path(&self) -> &'static str {
        self.kind.path()
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Render all five documents for one theme.
///
/// `package_name` and `theme_name` are written as given, escaped for XML.
pub fn build_documents(
    seed: SeedColor,
    package_name: &str,
    theme_name: &str,
    flags: &ComponentFlags,
) -> Result<[ResourceDocument; 5]> {
    Ok([
        render(
            DocumentKind::Manifest,
            &Manifest::new(package_name, theme_name, seed).to_element(),
        )?,
        render(
            DocumentKind::LightColors,
            &LightPalette::derive(seed, flags).to_element(),
        )?,
        render(
            DocumentKind::NightColors,
            &NightPalette::derive(seed, flags).to_element(),
        )?,
        render(
            DocumentKind::DynamicColors,
            &DynamicPalette::derive(seed, flags).to_element(),
        )?,
        render(
            DocumentKind::OverlayConfig,
            &OverlayDescriptor::new(package_name, *flags).to_element(),
        )?,
    ])
}

fn render(kind: DocumentKind, root: &Element) -> Result<ResourceDocument> {
    let content = render_document(root).map_err(|source| OverlayError::DocumentRender {
        path: kind.path(),
        source,
    })?;
    tracing::debug!(path = kind.path(), bytes = content.len(), "rendered document");
    Ok(ResourceDocument::new(kind, content))
}
