//! Chroma Theme Compiler
//!
//! Turns a seed color and a handful of component flags into an installable
//! resource overlay archive.
//!
//! # Overview
//!
//! A compile runs four forward-only stages:
//!
//! 1. **Validate**: parse the seed color and check the package identifier
//! 2. **Derive**: compute accents, on-colors and the tone ramp
//!    (see [`chroma_color`])
//! 3. **Render**: build five XML [`ResourceDocument`]s
//! 4. **Package**: write them into an in-memory zip archive
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_overlay::{compile, Component, ComponentFlags, ThemeRequest};
//!
//! let request = ThemeRequest::new("#FF6200EE", "com.example.theme")
//!     .theme_name("Sample")
//!     .components(ComponentFlags::default().with(Component::StatusBar, true));
//!
//! let bytes = compile(&request).unwrap();
//! assert!(!bytes.is_empty());
//! ```
//!
//! # Archive layout
//!
//! | Entry                           | Contents                                  |
//! |---------------------------------|-------------------------------------------|
//! | `AndroidManifest.xml`           | package identity, label, overlay targets  |
//! | `res/values/colors.xml`         | light palette                             |
//! | `res/values-night/colors.xml`   | dark palette                              |
//! | `res/values-v31/colors.xml`     | dynamic-color palette from the tone ramp  |
//! | `assets/overlays/config.xml`    | component flags and fixed features        |
//!
//! Installing, signing or applying the archive is up to the caller.

pub mod archive;
pub mod compile;
pub mod component;
pub mod documents;
pub mod error;
pub mod request;
pub mod xml;

pub use archive::package;
pub use compile::compile;
pub use component::{Component, ComponentFlags};
pub use documents::{build_documents, DocumentKind, ResourceDocument};
pub use error::{OverlayError, Result};
pub use request::{validate_package_name, ThemeRequest, DEFAULT_THEME_NAME};
