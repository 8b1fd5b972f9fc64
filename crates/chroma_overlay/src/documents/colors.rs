//! Color resource palettes
//!
//! Each palette is a typed struct derived from the seed color. Component
//! specific blocks are `Option`s that are only filled in when the matching
//! [`ComponentFlags`] entry is on, so a disabled component never produces
//! entries in any document.

use chroma_color::{
    blend, desaturate, generate_tones, on_color, rotate_hue, shift_additive, Color, SeedColor,
    ToneRamp, TONE_STOPS,
};

use crate::component::ComponentFlags;
use crate::xml::Element;

/// Stops emitted for the secondary and tertiary dynamic accents
pub const SUPPORTING_ACCENT_STOPS: [u16; 3] = [100, 500, 900];

/// Shift applied to each neutral stop, paired with [`TONE_STOPS`].
/// `(factor, lighter)`: lightening toward the seed, then darkening past it.
const NEUTRAL_SHIFTS: [(f32, bool); 11] = [
    (0.9, true),
    (0.8, true),
    (0.6, true),
    (0.4, true),
    (0.2, true),
    (0.0, true),
    (0.2, false),
    (0.4, false),
    (0.6, false),
    (0.7, false),
    (0.8, false),
];

const SUPPORTING_SHIFT: f32 = 0.4;
const ACCENT2_SATURATION: f32 = 0.5;
const ACCENT3_HUE_ROTATION: f32 = 60.0;
const SYSTEM_UI_BACKGROUND_RATIO: f32 = 0.15;
const NIGHT_COMPONENT_SHIFT: f32 = 0.1;

/// One `<color>` resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub color: Color,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn to_element(&self) -> Element {
        Element::new("color")
            .attr("name", self.name.as_str())
            .text(self.color.to_hex_rgb())
    }
}

/// A palette that can be written as a `<resources>` document
pub trait ColorResources {
    /// Entries in document order
    fn entries(&self) -> Vec<ColorEntry>;

    fn to_element(&self) -> Element {
        Element::new("resources").children(self.entries().iter().map(ColorEntry::to_element))
    }
}

/// The three system accent tones shared by light and night resources
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentTriad {
    pub accent_0: Color,
    pub accent_1: Color,
    pub accent_2: Color,
}

impl AccentTriad {
    pub fn derive(seed: Color) -> Self {
        Self {
            accent_0: seed,
            accent_1: shift_additive(seed, 0.1, true),
            accent_2: shift_additive(seed, 0.2, true),
        }
    }

    fn push_entries(&self, entries: &mut Vec<ColorEntry>) {
        entries.push(ColorEntry::new("system_accent_0", self.accent_0));
        entries.push(ColorEntry::new("system_accent_1", self.accent_1));
        entries.push(ColorEntry::new("system_accent_2", self.accent_2));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBarColors {
    pub background: Color,
    pub icon: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationBarColors {
    pub background: Color,
    pub divider: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemUiColors {
    pub accent: Color,
    pub background: Color,
}

/// Component overrides for light and dynamic-color resources
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComponentColors {
    pub status_bar: Option<StatusBarColors>,
    pub navigation_bar: Option<NavigationBarColors>,
    pub system_ui: Option<SystemUiColors>,
}

impl ComponentColors {
    pub fn derive(seed: Color, flags: &ComponentFlags) -> Self {
        Self {
            status_bar: flags.status_bar.then(|| StatusBarColors {
                background: seed,
                icon: on_color(seed),
            }),
            navigation_bar: flags.navigation_bar.then(|| NavigationBarColors {
                background: seed,
                divider: shift_additive(seed, 0.2, false),
            }),
            system_ui: flags.system_ui.then(|| SystemUiColors {
                accent: seed,
                background: blend(seed, Color::WHITE, SYSTEM_UI_BACKGROUND_RATIO),
            }),
        }
    }

    fn push_entries(&self, entries: &mut Vec<ColorEntry>) {
        if let Some(status_bar) = &self.status_bar {
            entries.push(ColorEntry::new("system_status_bar_color", status_bar.background));
            entries.push(ColorEntry::new("system_status_bar_icon_color", status_bar.icon));
        }
        if let Some(navigation_bar) = &self.navigation_bar {
            entries.push(ColorEntry::new(
                "system_navigation_bar_color",
                navigation_bar.background,
            ));
            entries.push(ColorEntry::new(
                "system_navigation_bar_divider_color",
                navigation_bar.divider,
            ));
        }
        if let Some(system_ui) = &self.system_ui {
            entries.push(ColorEntry::new("system_ui_accent_color", system_ui.accent));
            entries.push(ColorEntry::new("system_ui_background_color", system_ui.background));
        }
    }
}

/// `res/values/colors.xml`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightPalette {
    pub accents: AccentTriad,
    pub primary: Color,
    pub primary_variant: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub secondary_variant: Color,
    pub on_secondary: Color,
    pub components: ComponentColors,
}

impl LightPalette {
    pub fn derive(seed: SeedColor, flags: &ComponentFlags) -> Self {
        let seed = seed.color();
        // On-colors contrast with the seed, not with their own background
        let on_seed = on_color(seed);
        Self {
            accents: AccentTriad::derive(seed),
            primary: seed,
            primary_variant: shift_additive(seed, 0.2, false),
            on_primary: on_seed,
            secondary: shift_additive(seed, 0.3, true),
            secondary_variant: shift_additive(seed, 0.5, true),
            on_secondary: on_seed,
            components: ComponentColors::derive(seed, flags),
        }
    }
}

impl ColorResources for LightPalette {
    fn entries(&self) -> Vec<ColorEntry> {
        let mut entries = Vec::with_capacity(18);
        self.accents.push_entries(&mut entries);
        entries.extend([
            ColorEntry::new("color_primary", self.primary),
            ColorEntry::new("color_primary_variant", self.primary_variant),
            ColorEntry::new("color_on_primary", self.on_primary),
            ColorEntry::new("color_secondary", self.secondary),
            ColorEntry::new("color_secondary_variant", self.secondary_variant),
            ColorEntry::new("color_on_secondary", self.on_secondary),
            // Vendor aliases
            ColorEntry::new("colorAccent", self.primary),
            ColorEntry::new("accent_device_default_light", self.primary),
            ColorEntry::new("accent_material_light", self.primary),
        ]);
        self.components.push_entries(&mut entries);
        entries
    }
}

/// `res/values-night/colors.xml`
///
/// The accent triad is not re-derived for the dark scheme. Only component
/// overrides are darkened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NightPalette {
    pub accents: AccentTriad,
    pub status_bar: Option<Color>,
    pub navigation_bar: Option<Color>,
    pub system_ui: Option<Color>,
}

impl NightPalette {
    pub fn derive(seed: SeedColor, flags: &ComponentFlags) -> Self {
        let seed = seed.color();
        let darker = shift_additive(seed, NIGHT_COMPONENT_SHIFT, false);
        Self {
            accents: AccentTriad::derive(seed),
            status_bar: flags.status_bar.then_some(darker),
            navigation_bar: flags.navigation_bar.then_some(darker),
            system_ui: flags.system_ui.then_some(darker),
        }
    }
}

impl ColorResources for NightPalette {
    fn entries(&self) -> Vec<ColorEntry> {
        let mut entries = Vec::with_capacity(6);
        self.accents.push_entries(&mut entries);
        let overrides = [
            ("system_status_bar_color", self.status_bar),
            ("system_navigation_bar_color", self.navigation_bar),
            ("system_ui_accent_color", self.system_ui),
        ];
        entries.extend(
            overrides
                .into_iter()
                .filter_map(|(name, color)| color.map(|color| ColorEntry::new(name, color))),
        );
        entries
    }
}

/// `res/values-v31/colors.xml`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynamicPalette {
    pub accent1: ToneRamp,
    pub accent2: [Color; 3],
    pub accent3: [Color; 3],
    pub neutral1: [Color; 11],
    pub components: ComponentColors,
}

impl DynamicPalette {
    pub fn derive(seed: SeedColor, flags: &ComponentFlags) -> Self {
        let accent1 = generate_tones(seed);
        let seed = seed.color();
        Self {
            accent1,
            accent2: supporting_accent(desaturate(seed, ACCENT2_SATURATION)),
            accent3: supporting_accent(rotate_hue(seed, ACCENT3_HUE_ROTATION)),
            neutral1: NEUTRAL_SHIFTS.map(|(factor, lighter)| shift_additive(seed, factor, lighter)),
            components: ComponentColors::derive(seed, flags),
        }
    }
}

impl ColorResources for DynamicPalette {
    fn entries(&self) -> Vec<ColorEntry> {
        let mut entries = Vec::with_capacity(34);
        entries.extend(
            self.accent1
                .iter()
                .map(|(stop, color)| ColorEntry::new(format!("system_accent1_{stop}"), color)),
        );
        for (family, colors) in [("accent2", &self.accent2), ("accent3", &self.accent3)] {
            entries.extend(
                SUPPORTING_ACCENT_STOPS
                    .iter()
                    .zip(colors)
                    .map(|(stop, &color)| ColorEntry::new(format!("system_{family}_{stop}"), color)),
            );
        }
        entries.extend(
            TONE_STOPS
                .iter()
                .zip(&self.neutral1)
                .map(|(stop, &color)| ColorEntry::new(format!("system_neutral1_{stop}"), color)),
        );
        self.components.push_entries(&mut entries);
        entries
    }
}

/// Light, base and dark variants of `base` for [`SUPPORTING_ACCENT_STOPS`]
fn supporting_accent(base: Color) -> [Color; 3] {
    [
        shift_additive(base, SUPPORTING_SHIFT, true),
        base,
        shift_additive(base, SUPPORTING_SHIFT, false),
    ]
}
