//! `assets/overlays/config.xml`

use crate::component::ComponentFlags;
use crate::xml::Element;

/// Features every generated overlay turns on. Not configurable.
pub const ALWAYS_ON_FEATURES: [&str; 3] = [
    "dynamic_color_override",
    "high_contrast_channel",
    "dynamic_colors",
];

/// Overlay descriptor: package name plus an explicit flag per component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayDescriptor<'a> {
    pub package_name: &'a str,
    pub components: ComponentFlags,
}

impl<'a> OverlayDescriptor<'a> {
    pub fn new(package_name: &'a str, components: ComponentFlags) -> Self {
        Self {
            package_name,
            components,
        }
    }

    pub fn to_element(&self) -> Element {
        let components = self.components.iter().map(|(component, enabled)| {
            Element::new("component")
                .attr("name", component.key())
                .attr("enabled", enabled.to_string())
        });
        let features = ALWAYS_ON_FEATURES.iter().map(|&feature| {
            Element::new("feature")
                .attr("name", feature)
                .attr("enabled", "true")
        });

        Element::new("overlay-config")
            .attr("package", self.package_name)
            .child(Element::new("components").children(components))
            .child(Element::new("features").children(features))
    }
}
