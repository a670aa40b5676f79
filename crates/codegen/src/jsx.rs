//! JSX emission primitives
//!
//! Low-level helpers that turn prop values and placed components into
//! JSX text. Everything here is pure; determinism comes from emitting
//! props in descriptor order followed by any remaining overrides in
//! their map order.

use pagecraft_core::PropValue;
use pagecraft_model::PlacedComponent;
use pagecraft_registry::ComponentDescriptor;
use std::collections::BTreeSet;

// ============================================================================
// Value Emission
// ============================================================================

/// Format a number the way JSX authors write them
///
/// Integral values print without a decimal point (`3`, not `3.0`).
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Escape a string for use inside a double-quoted JSX attribute
pub fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// Emit a value as a JS expression (the inside of `{...}`)
pub fn emit_expression(value: &PropValue) -> String {
    match value {
        PropValue::Bool(b) => b.to_string(),
        PropValue::Number(n) => format_number(*n),
        // serde_json writes a valid JS string literal, escapes included
        PropValue::String(s) => serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string()),
        PropValue::List(items) => {
            let rendered: Vec<String> = items.iter().map(emit_expression).collect();
            format!("[{}]", rendered.join(", "))
        }
    }
}

/// Emit one JSX attribute
///
/// Strings become quoted attributes, `true` becomes a bare attribute,
/// and everything else is wrapped in braces.
pub fn emit_attribute(name: &str, value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("{}=\"{}\"", name, escape_attribute(s)),
        PropValue::Bool(true) => name.to_string(),
        PropValue::Bool(false) => format!("{}={{false}}", name),
        PropValue::Number(n) => format!("{}={{{}}}", name, format_number(*n)),
        PropValue::List(_) => format!("{}={{{}}}", name, emit_expression(value)),
    }
}

// ============================================================================
// Component Emission
// ============================================================================

/// Emit a self-contained invocation of a placed component
///
/// Props appear in descriptor order: an override wins over the default,
/// required props fall back to their default when not overridden, and
/// optional props without an override are omitted (their defaults live
/// in the component implementation). Overrides for props the descriptor
/// does not declare are appended afterwards in map order, so data loaded
/// from older catalogs still round-trips into the output.
pub fn emit_component(descriptor: &ComponentDescriptor, placed: &PlacedComponent) -> String {
    let mut attributes = Vec::new();
    let mut emitted: BTreeSet<&str> = BTreeSet::new();

    for spec in &descriptor.props {
        if let Some(value) = placed.prop(&spec.name) {
            attributes.push(emit_attribute(&spec.name, value));
            emitted.insert(spec.name.as_str());
        } else if spec.required {
            if let Some(default) = &spec.default {
                attributes.push(emit_attribute(&spec.name, default));
            }
            emitted.insert(spec.name.as_str());
        }
    }

    for (name, value) in &placed.props {
        if !emitted.contains(name.as_str()) {
            attributes.push(emit_attribute(name, value));
        }
    }

    if attributes.is_empty() {
        format!("<{} />", descriptor.tag_name)
    } else {
        format!("<{} {} />", descriptor.tag_name, attributes.join(" "))
    }
}

/// Emit the placeholder for a component the registry does not know
pub fn emit_unknown_component(component_id: &str) -> String {
    format!("{{/* unknown component: {} */}}", component_id)
}

/// Emit an import line for a descriptor
pub fn emit_import(descriptor: &ComponentDescriptor) -> String {
    format!(
        "import {{ {} }} from \"{}\";",
        descriptor.tag_name, descriptor.import_path,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::Category;
    use pagecraft_registry::PropSpec;

    fn button_descriptor() -> ComponentDescriptor {
        ComponentDescriptor::new("shimmer-button", "Shimmer Button", Category::Buttons)
            .with_prop(PropSpec::text("label").required().with_default("Get Started"))
            .with_prop(PropSpec::number("duration").with_default(3i64))
            .with_prop(PropSpec::bool("disabled").with_default(false))
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.4), "0.4");
        assert_eq!(format_number(-2.0), "-2");
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("plain"), "plain");
        assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_attribute("a & b"), "a &amp; b");
    }

    #[test]
    fn test_emit_attribute_shapes() {
        assert_eq!(
            emit_attribute("label", &PropValue::from("Buy")),
            "label=\"Buy\""
        );
        assert_eq!(emit_attribute("glare", &PropValue::from(true)), "glare");
        assert_eq!(
            emit_attribute("glare", &PropValue::from(false)),
            "glare={false}"
        );
        assert_eq!(
            emit_attribute("duration", &PropValue::from(3i64)),
            "duration={3}"
        );
        assert_eq!(
            emit_attribute("words", &PropValue::from(vec!["a", "b"])),
            "words={[\"a\", \"b\"]}"
        );
    }

    #[test]
    fn test_emit_component_uses_required_defaults() {
        let descriptor = button_descriptor();
        let placed = PlacedComponent::new("shimmer-button");

        // label is required so its default appears; duration and
        // disabled are optional and stay omitted
        assert_eq!(
            emit_component(&descriptor, &placed),
            "<ShimmerButton label=\"Get Started\" />"
        );
    }

    #[test]
    fn test_emit_component_overrides_win() {
        let descriptor = button_descriptor();
        let placed = PlacedComponent::new("shimmer-button")
            .with_prop("label", "Buy now")
            .with_prop("duration", 5i64);

        assert_eq!(
            emit_component(&descriptor, &placed),
            "<ShimmerButton label=\"Buy now\" duration={5} />"
        );
    }

    #[test]
    fn test_emit_component_keeps_descriptor_prop_order() {
        let descriptor = button_descriptor();
        // Override insertion order differs from descriptor order
        let placed = PlacedComponent::new("shimmer-button")
            .with_prop("duration", 1i64)
            .with_prop("disabled", true)
            .with_prop("label", "Go");

        assert_eq!(
            emit_component(&descriptor, &placed),
            "<ShimmerButton label=\"Go\" duration={1} disabled />"
        );
    }

    #[test]
    fn test_emit_component_appends_undeclared_overrides() {
        let descriptor = button_descriptor();
        let placed = PlacedComponent::new("shimmer-button").with_prop("legacyProp", "kept");

        assert_eq!(
            emit_component(&descriptor, &placed),
            "<ShimmerButton label=\"Get Started\" legacyProp=\"kept\" />"
        );
    }

    #[test]
    fn test_emit_unknown_component() {
        assert_eq!(
            emit_unknown_component("ghost"),
            "{/* unknown component: ghost */}"
        );
    }

    #[test]
    fn test_emit_import() {
        let descriptor = button_descriptor();
        assert_eq!(
            emit_import(&descriptor),
            "import { ShimmerButton } from \"@/components/ui/shimmer-button\";"
        );
    }
}
