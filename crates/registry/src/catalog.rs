//! Built-in component catalog
//!
//! The static table of components shipped with Pagecraft. Registration
//! order here is the palette order users see, so entries are grouped by
//! category.

use crate::descriptor::{ComponentDescriptor, PropSpec, VariantDescriptor};
use crate::registry::Registry;
use pagecraft_core::Category;

/// Build the registry of built-in components
///
/// Registration cannot fail here: ids are static and unique. A duplicate
/// would be a defect in this table, so it is surfaced loudly in debug
/// builds and skipped in release builds.
pub fn builtin() -> Registry {
    let mut registry = Registry::new();

    for descriptor in catalog_entries() {
        let id = descriptor.id.clone();
        if let Err(e) = registry.register(descriptor) {
            debug_assert!(false, "builtin catalog rejected '{}': {}", id, e);
            tracing::error!(component = %id, error = %e, "skipping builtin component");
        }
    }

    registry
}

fn catalog_entries() -> Vec<ComponentDescriptor> {
    vec![
        // ====================================================================
        // Buttons
        // ====================================================================
        ComponentDescriptor::new("shimmer-button", "Shimmer Button", Category::Buttons)
            .with_description("Button with a shimmer highlight sweeping across the surface")
            .with_tag("cta")
            .with_tag("animated")
            .with_prop(
                PropSpec::text("label")
                    .required()
                    .with_default("Get Started")
                    .with_doc("Button text"),
            )
            .with_prop(PropSpec::text("shimmerColor").with_default("#ffffff"))
            .with_prop(
                PropSpec::number("duration")
                    .with_default(3i64)
                    .with_doc("Seconds per shimmer sweep"),
            )
            .with_prop(PropSpec::bool("disabled").with_default(false))
            .with_source(include_str!("snippets/shimmer_button.jsx"))
            .with_source_path("components/ui/shimmer-button.tsx"),
        ComponentDescriptor::new("magnetic-button", "Magnetic Button", Category::Buttons)
            .with_description("Button that drifts toward the cursor before it is reached")
            .with_tag("cta")
            .with_tag("hover")
            .with_prop(PropSpec::text("label").required().with_default("Hover me"))
            .with_prop(
                PropSpec::number("strength")
                    .with_default(0.4)
                    .with_doc("Pull strength between 0 and 1"),
            )
            .with_source_path("components/ui/magnetic-button.tsx"),
        ComponentDescriptor::new("ripple-button", "Ripple Button", Category::Buttons)
            .with_description("Button with a click ripple radiating from the pointer")
            .with_tag("cta")
            .with_tag("click")
            .with_prop(PropSpec::text("label").required().with_default("Click me"))
            .with_prop(PropSpec::text("rippleColor").with_default("#ffffff66"))
            .with_variant(VariantDescriptor::new("outline", "RippleButtonOutline"))
            .with_source_path("components/ui/ripple-button.tsx"),
        // ====================================================================
        // Cards
        // ====================================================================
        ComponentDescriptor::new("hover-expand-card", "Hover Expand Card", Category::Cards)
            .with_description("Card that grows to reveal extra content on hover")
            .with_tag("hover")
            .with_tag("reveal")
            .with_prop(PropSpec::text("title").required().with_default("Card title"))
            .with_prop(PropSpec::text("subtitle"))
            .with_prop(
                PropSpec::number("expandedHeight")
                    .with_default(320i64)
                    .with_doc("Height in pixels when expanded"),
            )
            .with_source_path("components/ui/hover-expand-card.tsx"),
        ComponentDescriptor::new("tilt-card", "Tilt Card", Category::Cards)
            .with_description("Card that tilts in 3D toward the cursor")
            .with_tag("hover")
            .with_tag("3d")
            .with_prop(PropSpec::text("title").required().with_default("Tilt me"))
            .with_prop(PropSpec::number("maxTilt").with_default(12i64))
            .with_prop(PropSpec::bool("glare").with_default(true))
            .with_source_path("components/ui/tilt-card.tsx"),
        ComponentDescriptor::new("spotlight-card", "Spotlight Card", Category::Cards)
            .with_description("Card lit by a spotlight that follows the pointer")
            .with_tag("hover")
            .with_tag("glow")
            .with_prop(PropSpec::text("title").required().with_default("Spotlight"))
            .with_prop(PropSpec::text("spotlightColor").with_default("#6366f1"))
            .pro()
            .with_source_path("components/ui/spotlight-card.tsx"),
        // ====================================================================
        // Text
        // ====================================================================
        ComponentDescriptor::new("typing-text", "Typing Text", Category::Text)
            .with_description("Typewriter effect cycling through a list of words")
            .with_tag("typewriter")
            .with_tag("headline")
            .with_prop(
                PropSpec::list("words")
                    .required()
                    .with_default(vec!["fast", "animated", "yours"]),
            )
            .with_prop(
                PropSpec::number("speed")
                    .with_default(80i64)
                    .with_doc("Milliseconds per character"),
            )
            .with_source(include_str!("snippets/typing_text.jsx"))
            .with_source_path("components/ui/typing-text.tsx"),
        ComponentDescriptor::new("gradient-text", "Gradient Text", Category::Text)
            .with_description("Heading filled with an animated color gradient")
            .with_tag("headline")
            .with_tag("gradient")
            .with_prop(PropSpec::text("text").required().with_default("Gradient"))
            .with_prop(PropSpec::text("from").with_default("#ec4899"))
            .with_prop(PropSpec::text("to").with_default("#8b5cf6"))
            .with_source_path("components/ui/gradient-text.tsx"),
        ComponentDescriptor::new("blur-reveal-text", "Blur Reveal Text", Category::Text)
            .with_description("Text that sharpens into focus word by word")
            .with_tag("reveal")
            .with_tag("scroll")
            .with_prop(PropSpec::text("text").required().with_default("Reveal me"))
            .with_prop(PropSpec::number("delay").with_default(0i64))
            .with_source_path("components/ui/blur-reveal-text.tsx"),
        ComponentDescriptor::new("counting-number", "Counting Number", Category::Text)
            .with_description("Number that counts up when it scrolls into view")
            .with_tag("metric")
            .with_tag("scroll")
            .with_prop(PropSpec::number("to").required().with_default(100i64))
            .with_prop(PropSpec::number("duration").with_default(2i64))
            .with_prop(PropSpec::text("suffix")),
        // ====================================================================
        // Backgrounds
        // ====================================================================
        ComponentDescriptor::new("aurora-background", "Aurora Background", Category::Backgrounds)
            .with_description("Slow-moving aurora gradient behind a section")
            .with_tag("hero")
            .with_tag("gradient")
            .with_prop(PropSpec::number("speed").with_default(1i64))
            .with_prop(PropSpec::node("children"))
            .with_source_path("components/ui/aurora-background.tsx"),
        ComponentDescriptor::new(
            "particles-background",
            "Particles Background",
            Category::Backgrounds,
        )
        .with_description("Floating particle field that reacts to the pointer")
        .with_tag("hero")
        .with_tag("interactive")
        .with_prop(PropSpec::number("quantity").with_default(80i64))
        .with_prop(PropSpec::text("color").with_default("#ffffff"))
        .with_prop(PropSpec::node("children"))
        .with_source_path("components/ui/particles-background.tsx"),
        ComponentDescriptor::new("grid-beam-background", "Grid Beam Background", Category::Backgrounds)
            .with_description("Grid of lines with light beams tracing across it")
            .with_tag("hero")
            .with_prop(PropSpec::number("density").with_default(24i64))
            .with_prop(PropSpec::node("children"))
            .pro(),
        // ====================================================================
        // Loaders
        // ====================================================================
        ComponentDescriptor::new("orbit-loader", "Orbit Loader", Category::Loaders)
            .with_description("Dots orbiting a center point")
            .with_tag("spinner")
            .with_prop(PropSpec::number("size").with_default(48i64))
            .with_prop(PropSpec::text("color").with_default("#6366f1"))
            .with_source_path("components/ui/orbit-loader.tsx"),
        ComponentDescriptor::new("pulse-loader", "Pulse Loader", Category::Loaders)
            .with_description("Row of dots pulsing in sequence")
            .with_tag("spinner")
            .with_prop(PropSpec::number("count").with_default(3i64))
            .with_prop(PropSpec::text("color").with_default("#6366f1")),
        // ====================================================================
        // Layout
        // ====================================================================
        ComponentDescriptor::new("bento-grid", "Bento Grid", Category::Layout)
            .with_description("Asymmetric feature grid with animated tiles")
            .with_tag("grid")
            .with_tag("features")
            .with_prop(PropSpec::number("columns").with_default(3i64))
            .with_prop(PropSpec::number("gap").with_default(4i64))
            .with_prop(PropSpec::node("children"))
            .with_source_path("components/ui/bento-grid.tsx"),
        ComponentDescriptor::new("marquee", "Marquee", Category::Layout)
            .with_description("Endless horizontal scroller for logos and quotes")
            .with_tag("scroll")
            .with_tag("logos")
            .with_prop(PropSpec::number("speed").with_default(40i64))
            .with_prop(PropSpec::bool("pauseOnHover").with_default(true))
            .with_prop(PropSpec::bool("reverse").with_default(false))
            .with_prop(PropSpec::node("children"))
            .with_source_path("components/ui/marquee.tsx"),
        ComponentDescriptor::new("dock", "Dock", Category::Layout)
            .with_description("macOS style dock with magnifying icons")
            .with_tag("navigation")
            .with_prop(PropSpec::number("magnification").with_default(60i64))
            .with_prop(PropSpec::node("children"))
            .pro()
            .with_source_path("components/ui/dock.tsx"),
        // ====================================================================
        // Forms
        // ====================================================================
        ComponentDescriptor::new("glow-input", "Glow Input", Category::Forms)
            .with_description("Input with an animated glow border on focus")
            .with_tag("input")
            .with_tag("glow")
            .with_prop(PropSpec::text("placeholder").with_default("Your email"))
            .with_prop(PropSpec::text("glowColor").with_default("#8b5cf6"))
            .pro()
            .with_source_path("components/ui/glow-input.tsx"),
        ComponentDescriptor::new("animated-tabs", "Animated Tabs", Category::Forms)
            .with_description("Tab strip with a sliding active indicator")
            .with_tag("tabs")
            .with_tag("navigation")
            .with_prop(
                PropSpec::list("tabs")
                    .required()
                    .with_default(vec!["Overview", "Pricing", "FAQ"]),
            )
            .with_prop(PropSpec::number("defaultIndex").with_default(0i64)),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let registry = builtin();
        assert!(registry.len() >= 20);
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let entries = catalog_entries();
        let mut ids: Vec<&str> = entries.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_spec_named_components_exist() {
        let registry = builtin();
        assert!(registry.contains("shimmer-button"));
        assert!(registry.contains("hover-expand-card"));
    }

    #[test]
    fn test_every_category_has_components() {
        let registry = builtin();
        for category in Category::all() {
            assert!(
                !registry.components_by_category(*category).is_empty(),
                "no builtin components in {}",
                category,
            );
        }
    }

    #[test]
    fn test_catalog_has_pro_and_free_components() {
        let registry = builtin();
        assert!(registry.components().any(|c| c.pro));
        assert!(registry.components().any(|c| !c.pro));
    }

    #[test]
    fn test_required_props_carry_defaults() {
        let registry = builtin();
        for descriptor in registry.components() {
            for prop in descriptor.required_props() {
                assert!(
                    prop.default.is_some(),
                    "required prop {}.{} has no default",
                    descriptor.id,
                    prop.name,
                );
            }
        }
    }
}
