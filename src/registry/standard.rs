//! Built-in property and pseudo tables.

use once_cell::sync::Lazy;

use super::property::{PropertyRegistry, PropertyRule};
use super::pseudo::{PseudoRegistry, DARK_PSEUDO, DEFAULT_DARK_SELECTOR};
use super::transforms;
use crate::declarations::Declarations;
use crate::value::{Scalar, StyleObject, StyleValue};

static STANDARD_PROPERTIES: Lazy<PropertyRegistry> = Lazy::new(standard_properties);
static STANDARD_PSEUDOS: Lazy<PseudoRegistry> = Lazy::new(standard_pseudos);

impl PropertyRegistry {
    /// The built-in property table, initialized on first use.
    pub fn standard() -> &'static PropertyRegistry {
        &STANDARD_PROPERTIES
    }
}

impl PseudoRegistry {
    /// The built-in pseudo table, initialized on first use.
    pub fn standard() -> &'static PseudoRegistry {
        &STANDARD_PSEUDOS
    }
}

const PASS_THROUGH: &[&str] = &[
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "overflow",
    "opacity",
    "cursor",
    "flex",
    "flexDirection",
    "flexWrap",
    "alignItems",
    "justifyContent",
    "fontStyle",
    "textAlign",
    "textDecoration",
    "textTransform",
    "whiteSpace",
    "transition",
    "transform",
    "visibility",
    "pointerEvents",
    "userSelect",
    "boxSizing",
    "verticalAlign",
];

fn standard_properties() -> PropertyRegistry {
    let mut registry = PASS_THROUGH
        .iter()
        .fold(PropertyRegistry::new(), |registry, name| {
            registry.pass_through(name)
        });

    for name in ["color", "backgroundColor", "borderColor", "fill", "stroke"] {
        registry = registry.rule(
            name,
            PropertyRule::property(name).transform(transforms::token("colors")),
        );
    }

    for name in [
        "margin",
        "marginTop",
        "marginRight",
        "marginBottom",
        "marginLeft",
        "padding",
        "paddingTop",
        "paddingRight",
        "paddingBottom",
        "paddingLeft",
        "gap",
    ] {
        registry = registry.rule(
            name,
            PropertyRule::property(name).transform(transforms::token_px("spaces")),
        );
    }

    for name in ["width", "height", "minWidth", "minHeight", "maxWidth", "maxHeight"] {
        registry = registry.rule(
            name,
            PropertyRule::property(name).transform(transforms::token_px("sizes")),
        );
    }

    registry
        .rule("bg", colors("background"))
        .rule("background", colors("background"))
        .rule("bgColor", colors("backgroundColor"))
        .rule("m", spaces(&["margin"]))
        .rule("mt", spaces(&["marginTop"]))
        .rule("mr", spaces(&["marginRight"]))
        .rule("mb", spaces(&["marginBottom"]))
        .rule("ml", spaces(&["marginLeft"]))
        .rule("marginX", spaces(&["marginLeft", "marginRight"]))
        .rule("mx", spaces(&["marginLeft", "marginRight"]))
        .rule("marginY", spaces(&["marginTop", "marginBottom"]))
        .rule("my", spaces(&["marginTop", "marginBottom"]))
        .rule("p", spaces(&["padding"]))
        .rule("pt", spaces(&["paddingTop"]))
        .rule("pr", spaces(&["paddingRight"]))
        .rule("pb", spaces(&["paddingBottom"]))
        .rule("pl", spaces(&["paddingLeft"]))
        .rule("paddingX", spaces(&["paddingLeft", "paddingRight"]))
        .rule("px", spaces(&["paddingLeft", "paddingRight"]))
        .rule("paddingY", spaces(&["paddingTop", "paddingBottom"]))
        .rule("py", spaces(&["paddingTop", "paddingBottom"]))
        .rule("w", sizes(&["width"]))
        .rule("h", sizes(&["height"]))
        .rule("boxSize", sizes(&["width", "height"]))
        .rule(
            "rounded",
            PropertyRule::property("borderRadius").transform(transforms::token_px("radii")),
        )
        .rule(
            "borderRadius",
            PropertyRule::property("borderRadius").transform(transforms::token_px("radii")),
        )
        .rule(
            "shadow",
            PropertyRule::property("boxShadow").transform(transforms::token("shadows")),
        )
        .rule(
            "boxShadow",
            PropertyRule::property("boxShadow").transform(transforms::token("shadows")),
        )
        .rule(
            "fontSize",
            PropertyRule::property("fontSize").transform(transforms::token("fontSizes")),
        )
        .rule(
            "fontWeight",
            PropertyRule::property("fontWeight").transform(transforms::token("fontWeights")),
        )
        .rule(
            "zIndex",
            PropertyRule::property("zIndex").transform(transforms::token("zIndices")),
        )
        .rule(
            "animation",
            PropertyRule::property("animation")
                .transform(transforms::token("animations"))
                .animation(),
        )
        .rule(
            "lineClamp",
            PropertyRule::property("WebkitLineClamp").static_rules(
                Declarations::new()
                    .with("overflow", "hidden")
                    .with("display", "-webkit-box")
                    .with("WebkitBoxOrient", "vertical"),
            ),
        )
        .rule(
            "truncated",
            PropertyRule::new()
                .transform(transforms::from_fn(|value, _| truncated(value)))
                .process_result(),
        )
}

fn colors(property: &str) -> PropertyRule {
    PropertyRule::property(property).transform(transforms::token("colors"))
}

fn spaces(properties: &[&str]) -> PropertyRule {
    PropertyRule::properties(properties.iter().copied()).transform(transforms::token_px("spaces"))
}

fn sizes(properties: &[&str]) -> PropertyRule {
    PropertyRule::properties(properties.iter().copied()).transform(transforms::token_px("sizes"))
}

fn truncated(value: StyleValue) -> StyleValue {
    match value {
        StyleValue::Scalar(Scalar::Bool(true)) => StyleObject::new()
            .with("overflow", "hidden")
            .with("textOverflow", "ellipsis")
            .with("whiteSpace", "nowrap")
            .into(),
        StyleValue::Scalar(Scalar::Bool(false)) => StyleObject::new().into(),
        other => other,
    }
}

fn standard_pseudos() -> PseudoRegistry {
    PseudoRegistry::new()
        .add("_hover", "&:hover, &[data-hover]")
        .add("_active", "&:active, &[data-active]")
        .add("_focus", "&:focus, &[data-focus]")
        .add("_focusVisible", "&:focus-visible, &[data-focus-visible]")
        .add(
            "_disabled",
            "&:disabled, &[disabled], &[aria-disabled=true], &[data-disabled]",
        )
        .add("_first", "&:first-of-type")
        .add("_last", "&:last-of-type")
        .add("_before", "&::before")
        .add("_after", "&::after")
        .add("_placeholder", "&::placeholder, &[data-placeholder]")
        .add(DARK_PSEUDO, DEFAULT_DARK_SELECTOR)
        .add(
            "_light",
            ".ui-light &:not([data-mode]), [data-mode=light] &:not([data-mode]), &[data-mode=light]",
        )
}
