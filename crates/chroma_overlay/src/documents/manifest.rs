//! `AndroidManifest.xml`

use chroma_color::SeedColor;

use crate::xml::Element;

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Target namespace of the platform framework resources
pub const PLATFORM_PACKAGE: &str = "android";
/// Target namespace of the system shell UI
pub const SYSTEM_UI_PACKAGE: &str = "com.android.systemui";

/// One `<overlay>` declaration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayTarget {
    pub name: &'static str,
    pub target_package: &'static str,
    pub priority: u32,
}

/// Every generated package declares exactly these targets
pub const OVERLAY_TARGETS: [OverlayTarget; 3] = [
    OverlayTarget {
        name: "AccentColor",
        target_package: PLATFORM_PACKAGE,
        priority: 1,
    },
    OverlayTarget {
        name: "StatusBar",
        target_package: SYSTEM_UI_PACKAGE,
        priority: 1,
    },
    OverlayTarget {
        name: "NavigationBar",
        target_package: SYSTEM_UI_PACKAGE,
        priority: 1,
    },
];

impl OverlayTarget {
    fn to_element(self) -> Element {
        Element::new("overlay")
            .attr("android:targetPackage", self.target_package)
            .attr("android:targetName", self.name)
            .attr("android:priority", self.priority.to_string())
            .attr("android:isStatic", "false")
    }
}

/// Package identity and display label of the overlay
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest<'a> {
    pub package_name: &'a str,
    pub label: String,
}

impl<'a> Manifest<'a> {
    pub fn new(package_name: &'a str, theme_name: &str, seed: SeedColor) -> Self {
        Self {
            package_name,
            label: format!("{theme_name} - {seed}"),
        }
    }

    pub fn to_element(&self) -> Element {
        Element::new("manifest")
            .attr("xmlns:android", ANDROID_NS)
            .attr("package", self.package_name)
            .attr("android:versionCode", "1")
            .attr("android:versionName", "1.0")
            .child(
                Element::new("application")
                    .attr("android:label", self.label.as_str())
                    .attr("android:hasCode", "false"),
            )
            .children(OVERLAY_TARGETS.iter().map(|target| target.to_element()))
    }
}
