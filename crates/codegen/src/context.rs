//! Generation context
//!
//! The context bundles everything the emitters need: the registry to
//! resolve descriptors against, the configuration, and the naming rules
//! for page components and routes.

use crate::GeneratorConfig;
use heck::{ToKebabCase, ToUpperCamelCase};
use pagecraft_model::{Page, PlacedComponent};
use pagecraft_registry::{ComponentDescriptor, Registry};

// ============================================================================
// GenerationContext
// ============================================================================

/// Shared state for one generation run
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    registry: &'a Registry,
    config: GeneratorConfig,
}

impl<'a> GenerationContext<'a> {
    /// Create a context over a registry with the given configuration
    pub fn new(registry: &'a Registry, config: GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Create a context with default configuration
    pub fn with_defaults(registry: &'a Registry) -> Self {
        Self::new(registry, GeneratorConfig::default())
    }

    /// The registry descriptors are resolved against
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// The generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Resolve the descriptor for a placed component
    pub fn descriptor_for(&self, placed: &PlacedComponent) -> Option<&ComponentDescriptor> {
        self.registry.component_by_id(&placed.component_id)
    }

    /// Indentation string for one level
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.config.indent * level)
    }

    // ========================================================================
    // Naming
    // ========================================================================

    /// JSX component name for a page ("Pricing FAQ" → "PricingFaqPage")
    pub fn page_component_name(&self, page: &Page) -> String {
        let base = page.name.to_upper_camel_case();
        if base.is_empty() {
            "UntitledPage".to_string()
        } else {
            format!("{}Page", base)
        }
    }

    /// Route slug for a page ("Pricing FAQ" → "pricing-faq")
    ///
    /// The page at index 0 is the home route and has no slug.
    pub fn page_slug(&self, page: &Page) -> String {
        page.name.to_kebab_case()
    }

    /// Relative output path for the page at `index`
    ///
    /// The first page is the home route (`app/page.jsx`); later pages
    /// live under their slug. Pages whose slug is empty or collides with
    /// an earlier one fall back to `page-<index>`.
    pub fn page_file_path(&self, index: usize, page: &Page, used_slugs: &mut Vec<String>) -> String {
        if index == 0 {
            return "app/page.jsx".to_string();
        }

        let mut slug = self.page_slug(page);
        if slug.is_empty() || used_slugs.contains(&slug) {
            slug = format!("page-{}", index);
        }
        used_slugs.push(slug.clone());

        format!("app/{}/page.jsx", slug)
    }
}

// ============================================================================
// Tests
// ============================================================================
