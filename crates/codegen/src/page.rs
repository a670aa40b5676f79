//! Page generation
//!
//! Turns one page into a complete JSX source file: header comment,
//! deduplicated imports in first-use order, and the placed components in
//! page order inside the page component's `<main>` element.

use crate::context::GenerationContext;
use crate::jsx;
use pagecraft_model::Page;

/// Header comment emitted at the top of generated files
const GENERATED_HEADER: &str = "// Generated by Pagecraft. Edits will be overwritten on export.";

/// Generate the JSX source for a single page
///
/// Pure and deterministic: identical input produces byte-identical
/// output. Components whose descriptor is missing from the registry are
/// replaced with a placeholder comment.
pub fn generate_page(ctx: &GenerationContext, page: &Page) -> String {
    render_page(ctx, page, &mut Vec::new())
}

/// Generate a page, collecting warnings into `warnings`
pub(crate) fn render_page(
    ctx: &GenerationContext,
    page: &Page,
    warnings: &mut Vec<String>,
) -> String {
    let mut out = String::new();

    if ctx.config().include_header {
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
    }

    // Import block: one line per distinct descriptor, first-use order
    let mut imported: Vec<&str> = Vec::new();
    let mut imports = String::new();
    for placed in &page.components {
        let Some(descriptor) = ctx.descriptor_for(placed) else {
            continue;
        };
        if !imported.contains(&descriptor.id.as_str()) {
            imported.push(&descriptor.id);
            imports.push_str(&jsx::emit_import(descriptor));
            imports.push('\n');
        }
    }
    if !imports.is_empty() {
        out.push_str(&imports);
        out.push('\n');
    }

    // Page component
    out.push_str(&format!(
        "export default function {}() {{\n",
        ctx.page_component_name(page),
    ));
    out.push_str(&format!("{}return (\n", ctx.indent(1)));

    if page.is_empty() {
        out.push_str(&format!("{}<main />\n", ctx.indent(2)));
    } else {
        out.push_str(&format!("{}<main>\n", ctx.indent(2)));
        for placed in &page.components {
            let line = match ctx.descriptor_for(placed) {
                Some(descriptor) => jsx::emit_component(descriptor, placed),
                None => {
                    warnings.push(format!(
                        "Page '{}': component '{}' is not in the registry; a placeholder was emitted.",
                        page.name, placed.component_id,
                    ));
                    jsx::emit_unknown_component(&placed.component_id)
                }
            };
            out.push_str(&format!("{}{}\n", ctx.indent(3), line));
        }
        out.push_str(&format!("{}</main>\n", ctx.indent(2)));
    }

    out.push_str(&format!("{});\n", ctx.indent(1)));
    out.push_str("}\n");

    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeneratorConfig;
    use pagecraft_model::PlacedComponent;
    use pagecraft_registry::builtin;

    fn demo_page() -> Page {
        let mut page = Page::new("Home");
        page.push(PlacedComponent::new("hover-expand-card").with_prop("title", "Features"));
        page.push(PlacedComponent::new("shimmer-button").with_prop("label", "Try it"));
        page
    }

    #[test]
    fn test_generated_page_shape() {
        let registry = builtin();
        let ctx = GenerationContext::with_defaults(&registry);

        let source = generate_page(&ctx, &demo_page());

        assert!(source.starts_with("// Generated by Pagecraft"));
        assert!(source.contains(
            "import { HoverExpandCard } from \"@/components/ui/hover-expand-card\";"
        ));
        assert!(source.contains("export default function HomePage() {"));
        assert!(source.contains("<HoverExpandCard title=\"Features\" />"));
        assert!(source.contains("<ShimmerButton label=\"Try it\" />"));

        // Page order is preserved in the emitted body
        let card = source.find("<HoverExpandCard").unwrap();
        let button = source.find("<ShimmerButton").unwrap();
        assert!(card < button);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let registry = builtin();
        let ctx = GenerationContext::with_defaults(&registry);
        let page = demo_page();

        let first = generate_page(&ctx, &page);
        let second = generate_page(&ctx, &page);
        assert_eq!(first, second);
    }

    #[test]
    fn test_imports_are_deduplicated_in_first_use_order() {
        let registry = builtin();
        let ctx = GenerationContext::with_defaults(&registry);

        let mut page = Page::new("Home");
        page.push(PlacedComponent::new("marquee"));
        page.push(PlacedComponent::new("shimmer-button"));
        page.push(PlacedComponent::new("marquee"));

        let source = generate_page(&ctx, &page);
        assert_eq!(source.matches("import { Marquee }").count(), 1);

        let marquee = source.find("import { Marquee }").unwrap();
        let button = source.find("import { ShimmerButton }").unwrap();
        assert!(marquee < button);
    }

    #[test]
    fn test_unknown_component_becomes_placeholder() {
        let registry = builtin();
        let ctx = GenerationContext::with_defaults(&registry);

        let mut page = Page::new("Home");
        page.push(PlacedComponent::new("ghost-component"));

        let mut warnings = Vec::new();
        let source = render_page(&ctx, &page, &mut warnings);

        assert!(source.contains("{/* unknown component: ghost-component */}"));
        assert_eq!(warnings.len(), 1);
        assert!(!source.contains("import { GhostComponent }"));
    }

    #[test]
    fn test_empty_page() {
        let registry = builtin();
        let ctx = GenerationContext::with_defaults(&registry);

        let source = generate_page(&ctx, &Page::new("Blank"));
        assert!(source.contains("<main />"));
        assert!(!source.contains("import"));
    }

    #[test]
    fn test_header_can_be_disabled() {
        let registry = builtin();
        let ctx = GenerationContext::new(&registry, GeneratorConfig::new().without_header());

        let source = generate_page(&ctx, &Page::new("Blank"));
        assert!(source.starts_with("export default function"));
    }
}
