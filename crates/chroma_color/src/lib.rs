//! Chroma Color Engine
//!
//! The color half of the Chroma theme compiler. Everything here is pure and
//! deterministic: no global state, no I/O, safe to call from any thread.
//!
//! - **Seed parsing**: [`validate_and_normalize`] turns `#RRGGBB` or
//!   `#AARRGGBB` into an opaque [`SeedColor`]
//! - **Transforms**: additive and multiplicative shifts, hue rotation,
//!   desaturation, blending and a perceptual light/dark classifier
//! - **Tone ramps**: [`generate_tones`] derives the 11-stop [`ToneRamp`]
//!   used for dynamic-color resources
//!
//! # Example
//!
//! ```rust
//! use chroma_color::{generate_tones, on_color, validate_and_normalize, Color};
//!
//! let seed = validate_and_normalize("#6200EE").unwrap();
//! let ramp = generate_tones(seed);
//!
//! assert_eq!(ramp.get(500), Some(seed.color()));
//! assert_eq!(on_color(seed.color()), Color::WHITE);
//! ```

pub mod color;
pub mod error;
pub mod seed;
pub mod tones;
pub mod transform;

pub use color::Color;
pub use error::{ColorError, Result};
pub use seed::{validate_and_normalize, SeedColor};
pub use tones::{generate_tones, tone_for_stop, ToneRamp, TONE_STOPS};
pub use transform::{
    blend, darkness, desaturate, is_light, luma_permille, on_color, rotate_hue, shift_additive,
    shift_multiplicative,
};
