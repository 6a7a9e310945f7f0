//! Integration tests resolving fixture styles against a fixture theme.
//!
//! The theme is loaded from `tests/fixtures/theme.yaml` and the style
//! description from `tests/fixtures/button.yaml`, exercising the
//! configuration loaders, the standard registries and CSS rendering together.

use std::path::PathBuf;

use serial_test::serial;
use tincture::registry::DEFAULT_DARK_SELECTOR;
use tincture::{
    css, keyframes, Declarations, KeyframesRegistry, StyleEngine, StyleObject, Theme,
};

const MD: &str = "@media screen and (max-width: 48em)";
const HOVER: &str = "&:hover, &[data-hover]";
const DISABLED: &str = "&:disabled, &[disabled], &[aria-disabled=true], &[data-disabled]";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn theme() -> Theme {
    Theme::from_file(fixture("theme.yaml")).expect("fixture theme should load")
}

fn button() -> StyleObject {
    serde_yaml::from_str(include_str!("fixtures/button.yaml"))
        .expect("fixture style should parse")
}

#[test]
fn test_fixture_theme() {
    let theme = theme();
    let breakpoints = theme.breakpoints().expect("fixture has breakpoints");
    assert_eq!(breakpoints.len(), 3);
    assert_eq!(breakpoints.query_for("md"), Some(MD));
    assert!(theme.token("spaces", "4").is_some());
    assert!(theme.token("animations", "pulse").is_some());
}

#[test]
fn test_button_declarations() {
    let theme = theme();
    let keyframes = KeyframesRegistry::new();
    let resolved = StyleEngine::new(&theme)
        .with_keyframes(&keyframes)
        .resolve(&button());

    let name = keyframes.names().pop().expect("pulse keyframes registered");
    let expected = Declarations::new()
        .with("display", "inline-flex")
        .with("paddingLeft", "1rem")
        .with("paddingRight", "1rem")
        .with(
            MD,
            Declarations::new()
                .with("paddingLeft", "0.5rem")
                .with("paddingRight", "0.5rem"),
        )
        .with("paddingTop", "0.5rem")
        .with("paddingBottom", "0.5rem")
        .with("borderRadius", "0.375rem")
        .with("color", "#3182ce")
        .with(
            DEFAULT_DARK_SELECTOR,
            Declarations::new()
                .with("color", "white")
                .with("background", "#718096"),
        )
        .with("background", "white")
        .with(
            HOVER,
            Declarations::new()
                .with("opacity", 0.8)
                .with("background", "#718096")
                .with(
                    DEFAULT_DARK_SELECTOR,
                    Declarations::new().with("background", "white"),
                ),
        )
        .with(DISABLED, Declarations::new().with("cursor", "not-allowed"))
        .with(
            "animation",
            format!(
                "{} 2s cubic-bezier(0.4, 0, 0.6, 1) 0s infinite normal none running",
                name
            ),
        );

    assert_eq!(resolved, expected);
}

#[test]
fn test_unconfigured_breakpoint_leaves_no_trace() {
    let theme = theme();
    let keyframes = KeyframesRegistry::new();
    let resolved = StyleEngine::new(&theme)
        .with_keyframes(&keyframes)
        .resolve(&button());
    assert!(!resolved.keys().any(|key| key.contains("xl")));
    assert_eq!(resolved.block(MD).map(|b| b.len()), Some(2));
}

#[test]
fn test_button_css() {
    let theme = theme();
    let keyframes = KeyframesRegistry::new();
    let style = StyleObject::new()
        .with("px", StyleObject::new().with("base", 4).with("md", 2))
        .with("_disabled", StyleObject::new().with("cursor", "not-allowed"));
    let resolved = StyleEngine::new(&theme)
        .with_keyframes(&keyframes)
        .resolve(&style);

    assert_eq!(
        resolved.to_css(".btn"),
        concat!(
            ".btn{padding-left:1rem;padding-right:1rem;}",
            "@media screen and (max-width: 48em){.btn{padding-left:0.5rem;padding-right:0.5rem;}}",
            ".btn:disabled,.btn[disabled],.btn[aria-disabled=true],.btn[data-disabled]",
            "{cursor:not-allowed;}",
        )
    );
    assert!(keyframes.is_empty());
}

#[test]
fn test_keyframes_css() {
    let theme = theme();
    let keyframes = KeyframesRegistry::new();
    let engine = StyleEngine::new(&theme).with_keyframes(&keyframes);

    engine.resolve(&button());
    engine.resolve(&button());

    assert_eq!(keyframes.len(), 1);
    let name = keyframes.names().pop().unwrap();
    assert_eq!(
        keyframes.to_css(),
        format!(
            "@keyframes {}{{0%{{opacity:1;}}50%{{opacity:0.5;}}100%{{opacity:1;}}}}",
            name
        )
    );
}

#[test]
fn test_json_description() {
    let theme = Theme::from_json(
        r##"{
            "breakpoints": {"md": 768},
            "colors": {"brand": "#ff0080"}
        }"##,
    )
    .unwrap();
    let style: StyleObject = serde_json::from_str(
        r#"{
            "color": "brand",
            "m": {"base": 2, "md": 0},
            "_hover": {"color": ["black", "white"]}
        }"#,
    )
    .unwrap();

    let resolved = css(&style, &theme);
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "color": "#ff0080",
            "margin": "2px",
            "@media screen and (max-width: 768px)": {"margin": "0px"},
            "&:hover, &[data-hover]": {
                "color": "black",
                (DEFAULT_DARK_SELECTOR): {"color": "white"}
            }
        })
    );
}

#[test]
#[serial]
fn test_global_keyframes_registry() {
    keyframes::global().clear();
    let theme = theme();

    let first = css(&button(), &theme);
    let second = css(&button(), &theme);

    assert_eq!(first, second);
    assert_eq!(keyframes::global().len(), 1);

    let name = keyframes::global().names().pop().unwrap();
    let animation = first.value("animation").unwrap().to_string();
    assert!(animation.starts_with(&name));
}

#[test]
#[serial]
fn test_global_keyframes_clear() {
    keyframes::global().clear();
    css(&button(), &theme());
    assert!(!keyframes::global().is_empty());

    keyframes::global().clear();
    assert!(keyframes::global().is_empty());
}
