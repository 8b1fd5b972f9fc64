use std::collections::HashMap;
use std::io::{Cursor, Read};

use chroma_color::{is_light, validate_and_normalize};
use chroma_overlay::{compile, DocumentKind, OverlayError, ThemeRequest};
use pretty_assertions::assert_eq;
use zip::ZipArchive;

fn sample_request() -> ThemeRequest {
    let flags = HashMap::from([
        ("status_bar".to_string(), true),
        ("navigation_bar".to_string(), false),
    ]);
    ThemeRequest::new("#FF6200EE", "com.example.theme")
        .theme_name("Sample")
        .component_map(&flags)
}

/// `(path, content)` for every entry, in archive order
fn entries(bytes: Vec<u8>) -> Vec<(String, String)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            (file.name().to_string(), content)
        })
        .collect()
}

fn document(entries: &[(String, String)], kind: DocumentKind) -> &str {
    entries
        .iter()
        .find(|(path, _)| path == kind.path())
        .map(|(_, content)| content.as_str())
        .unwrap()
}

/// Values of every `<color name="...">` whose name contains `needle`
fn colors_named<'a>(content: &'a str, needle: &str) -> Vec<&'a str> {
    content
        .lines()
        .filter(|line| line.contains("<color name=") && line.contains(needle))
        .filter_map(|line| {
            let start = line.find('>')? + 1;
            let end = line.rfind("</color>")?;
            Some(&line[start..end])
        })
        .collect()
}

#[test]
fn sample_theme_end_to_end() {
    let entries = entries(compile(&sample_request()).unwrap());

    let paths: Vec<&str> = entries.iter().map(|(path, _)| path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "AndroidManifest.xml",
            "res/values/colors.xml",
            "res/values-night/colors.xml",
            "res/values-v31/colors.xml",
            "assets/overlays/config.xml",
        ]
    );

    let manifest = document(&entries, DocumentKind::Manifest);
    assert!(manifest.contains(r#"android:label="Sample - #FF6200EE""#));

    let light = document(&entries, DocumentKind::LightColors);
    assert!(light.contains(r#"<color name="system_status_bar_color">"#));
    assert!(!light.contains("system_navigation_bar_color"));

    let config = document(&entries, DocumentKind::OverlayConfig);
    assert!(config.contains(r#"<component name="status_bar" enabled="true" />"#));
    assert!(config.contains(r#"<component name="navigation_bar" enabled="false" />"#));
    assert!(config.contains(r#"<component name="launcher" enabled="false" />"#));
}

#[test]
fn every_entry_is_well_formed_xml() {
    const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

    let request = sample_request().theme_name(r#"Rock & "Roll" <3>"#);
    let entries = entries(compile(&request).unwrap());

    let roots: Vec<String> = entries
        .iter()
        .map(|(path, content)| {
            let doc = roxmltree::Document::parse(content)
                .unwrap_or_else(|e| panic!("{path} is not well-formed: {e}"));
            doc.root_element().tag_name().name().to_string()
        })
        .collect();
    assert_eq!(
        roots,
        vec!["manifest", "resources", "resources", "resources", "overlay-config"]
    );

    let manifest = roxmltree::Document::parse(document(&entries, DocumentKind::Manifest)).unwrap();
    let application = manifest
        .descendants()
        .find(|node| node.has_tag_name("application"))
        .unwrap();
    assert_eq!(
        application.attribute((ANDROID_NS, "label")),
        Some(r#"Rock & "Roll" <3> - #FF6200EE"#)
    );

    for kind in [
        DocumentKind::LightColors,
        DocumentKind::NightColors,
        DocumentKind::DynamicColors,
    ] {
        let content = document(&entries, kind);
        let doc = roxmltree::Document::parse(content).unwrap();
        let colors: Vec<_> = doc.root_element().children().filter(|n| n.is_element()).collect();
        assert!(!colors.is_empty());
        for color in colors {
            assert!(color.has_tag_name("color"));
            assert!(color.attribute("name").is_some());
            assert!(color.text().is_some_and(|value| value.starts_with('#')));
        }
    }
}

#[test]
fn compiling_twice_is_byte_identical() {
    let request = sample_request();
    assert_eq!(compile(&request).unwrap(), compile(&request).unwrap());
}

#[test]
fn concurrent_compiles_agree() {
    let expected = compile(&sample_request()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| compile(&sample_request()).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn disabled_components_emit_nothing() {
    let request = ThemeRequest::new("#6200EE", "com.example.theme");
    let entries = entries(compile(&request).unwrap());

    for (path, content) in &entries {
        if path.ends_with("colors.xml") {
            for name in ["system_status_bar", "system_navigation_bar", "system_ui_"] {
                assert!(!content.contains(name), "{path} contains {name}");
            }
        }
    }
}

#[test]
fn enabled_components_appear_in_every_palette() {
    let flags = HashMap::from([
        ("status_bar".to_string(), true),
        ("navigation_bar".to_string(), true),
        ("system_ui".to_string(), true),
    ]);
    let request = ThemeRequest::new("#6200EE", "com.example.theme").component_map(&flags);
    let entries = entries(compile(&request).unwrap());

    let component_entries = [
        "system_status_bar_color",
        "system_status_bar_icon_color",
        "system_navigation_bar_color",
        "system_navigation_bar_divider_color",
        "system_ui_accent_color",
        "system_ui_background_color",
    ];
    for kind in [DocumentKind::LightColors, DocumentKind::DynamicColors] {
        let content = document(&entries, kind);
        for name in component_entries {
            assert!(
                content.contains(&format!(r#"<color name="{name}">"#)),
                "{} is missing {name}",
                kind.path()
            );
        }
    }

    let night = document(&entries, DocumentKind::NightColors);
    assert_eq!(colors_named(night, "system_status_bar_color"), vec!["#4800D4"]);
    assert_eq!(colors_named(night, "system_navigation_bar_color"), vec!["#4800D4"]);
    assert_eq!(colors_named(night, "system_ui_accent_color"), vec!["#4800D4"]);
}

#[test]
fn on_colors_contrast_with_the_seed() {
    let all = HashMap::from([("status_bar".to_string(), true)]);
    for hex in ["#FFEB3B", "#E0F7FA", "#1A237E", "#6200EE", "#000000", "#FFFFFF"] {
        let seed = validate_and_normalize(hex).unwrap();
        let expected = if is_light(seed.color()) { "#000000" } else { "#FFFFFF" };

        let request = ThemeRequest::new(hex, "com.example.theme").component_map(&all);
        let entries = entries(compile(&request).unwrap());
        let light = document(&entries, DocumentKind::LightColors);

        let on_colors = [
            colors_named(light, "_on_"),
            colors_named(light, "icon_color"),
        ]
        .concat();
        assert_eq!(on_colors.len(), 3, "{hex}");
        assert!(
            on_colors.iter().all(|value| *value == expected),
            "{hex}: {on_colors:?}"
        );
    }
}

#[test]
fn seed_digits_survive_into_documents() {
    for (input, rgb) in [
        ("#FF0000", "#FF0000"),
        ("00ff00", "#00FF00"),
        ("#80112233", "#112233"),
        ("  #aBcDeF ", "#ABCDEF"),
    ] {
        let entries = entries(compile(&ThemeRequest::new(input, "com.example.theme")).unwrap());
        let light = document(&entries, DocumentKind::LightColors);
        assert_eq!(colors_named(light, "color_primary\""), vec![rgb], "{input}");

        let dynamic = document(&entries, DocumentKind::DynamicColors);
        assert_eq!(colors_named(dynamic, "system_accent1_500"), vec![rgb], "{input}");
    }
}

#[test]
fn malformed_seeds_are_rejected() {
    for input in ["12345", "GGHHII", "#1234567"] {
        let err = compile(&ThemeRequest::new(input, "com.example.theme")).unwrap_err();
        assert!(
            matches!(err, OverlayError::InvalidColorFormat(_)),
            "{input}: {err:?}"
        );
    }
}

#[test]
fn malformed_package_names_are_rejected() {
    let err = compile(&ThemeRequest::new("#6200EE", "not a package")).unwrap_err();
    assert!(matches!(err, OverlayError::InvalidPackageName { .. }));
}

#[test]
fn blank_theme_name_uses_default_label() {
    let request = ThemeRequest::new("6200EE", "com.example.theme").theme_name("");
    let entries = entries(compile(&request).unwrap());
    let manifest = document(&entries, DocumentKind::Manifest);
    assert!(manifest.contains(r#"android:label="Custom Theme - #FF6200EE""#));
}
