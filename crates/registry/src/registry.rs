//! Component registry
//!
//! The registry is a read-only, ordered catalog of component descriptors.
//! Iteration order is registration order, lookups never panic, and prop
//! overrides are sanitized here before they enter the data model.

use crate::descriptor::ComponentDescriptor;
use pagecraft_core::{BuilderError, BuilderResult, Category, PropValue};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Registry
// ============================================================================

/// Ordered, id-indexed catalog of component descriptors
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Descriptors in registration order
    components: Vec<ComponentDescriptor>,

    /// Index from component id to position in `components`
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a descriptor
    ///
    /// Returns an error if a descriptor with the same id is already
    /// registered.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> BuilderResult<()> {
        if self.index.contains_key(&descriptor.id) {
            return Err(BuilderError::DuplicateComponent(descriptor.id));
        }
        self.index
            .insert(descriptor.id.clone(), self.components.len());
        self.components.push(descriptor);
        Ok(())
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Look up a descriptor by id
    ///
    /// Unknown ids yield `None`, never a panic.
    pub fn component_by_id(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.index.get(id).map(|&i| &self.components[i])
    }

    /// Check whether a component id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All descriptors in registration order
    pub fn components(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.components.iter()
    }

    /// Descriptors in one category, in registration order
    pub fn components_by_category(&self, category: Category) -> Vec<&ComponentDescriptor> {
        self.components
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Search descriptors by name, description, or tag
    ///
    /// Case-insensitive substring match with no ranking; results keep
    /// registration order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&ComponentDescriptor> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.components
            .iter()
            .filter(|c| c.matches_query(query))
            .collect()
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // ========================================================================
    // Prop sanitization
    // ========================================================================

    /// Sanitize prop overrides against a descriptor's prop specs
    ///
    /// - Unknown prop names are dropped (logged at debug level).
    /// - Values whose kind does not match the declared kind are dropped
    ///   (logged at warn level).
    /// - Overrides for renderable-node props are rejected with an error:
    ///   they cannot be stored as data.
    ///
    /// Returns the sanitized map, or an error if the component id is
    /// unknown or a node prop was overridden.
    pub fn sanitize_props(
        &self,
        component_id: &str,
        props: &BTreeMap<String, PropValue>,
    ) -> BuilderResult<BTreeMap<String, PropValue>> {
        let descriptor = self
            .component_by_id(component_id)
            .ok_or_else(|| BuilderError::ComponentNotFound(component_id.to_string()))?;

        let mut sanitized = BTreeMap::new();
        for (name, value) in props {
            let Some(spec) = descriptor.prop(name) else {
                tracing::debug!(component = %component_id, prop = %name, "dropping unknown prop");
                continue;
            };

            if !spec.kind.is_serializable() {
                return Err(BuilderError::prop_validation(
                    component_id,
                    name,
                    "renderable props cannot be overridden with data values",
                ));
            }

            if !value.matches_kind(spec.kind) {
                tracing::warn!(
                    component = %component_id,
                    prop = %name,
                    expected = %spec.kind,
                    found = %value.kind(),
                    "dropping prop override with mismatched kind",
                );
                continue;
            }

            sanitized.insert(name.clone(), value.clone());
        }

        Ok(sanitized)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PropSpec;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(
                ComponentDescriptor::new("shimmer-button", "Shimmer Button", Category::Buttons)
                    .with_description("Button with a moving shimmer highlight")
                    .with_tag("cta")
                    .with_prop(PropSpec::text("label").with_default("Get Started"))
                    .with_prop(PropSpec::number("duration"))
                    .with_prop(PropSpec::node("icon")),
            )
            .unwrap();
        registry
            .register(
                ComponentDescriptor::new("tilt-card", "Tilt Card", Category::Cards)
                    .with_description("Card that tilts toward the cursor")
                    .with_tag("hover"),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = sample_registry();
        assert!(registry.component_by_id("shimmer-button").is_some());
        assert!(registry.component_by_id("does-not-exist").is_none());
        assert!(registry.contains("tilt-card"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = sample_registry();
        let err = registry
            .register(ComponentDescriptor::new(
                "tilt-card",
                "Tilt Card Again",
                Category::Cards,
            ))
            .unwrap_err();
        assert!(matches!(err, BuilderError::DuplicateComponent(_)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_category_listing_keeps_registration_order() {
        let mut registry = sample_registry();
        registry
            .register(ComponentDescriptor::new(
                "ripple-button",
                "Ripple Button",
                Category::Buttons,
            ))
            .unwrap();

        let buttons = registry.components_by_category(Category::Buttons);
        let ids: Vec<&str> = buttons.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["shimmer-button", "ripple-button"]);
    }

    #[test]
    fn test_search() {
        let registry = sample_registry();

        let hits = registry.search("shimmer");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "shimmer-button");

        let hits = registry.search("CURSOR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "tilt-card");

        assert!(registry.search("").is_empty());
        assert!(registry.search("   ").is_empty());
        assert!(registry.search("nothing-matches").is_empty());
    }

    #[test]
    fn test_sanitize_props_drops_unknown_keys() {
        let registry = sample_registry();
        let mut props = BTreeMap::new();
        props.insert("label".to_string(), PropValue::from("Buy now"));
        props.insert("bogus".to_string(), PropValue::from(true));

        let sanitized = registry.sanitize_props("shimmer-button", &props).unwrap();
        assert_eq!(sanitized.len(), 1);
        assert_eq!(sanitized["label"].as_str(), Some("Buy now"));
    }

    #[test]
    fn test_sanitize_props_drops_mismatched_kinds() {
        let registry = sample_registry();
        let mut props = BTreeMap::new();
        props.insert("duration".to_string(), PropValue::from("fast"));

        let sanitized = registry.sanitize_props("shimmer-button", &props).unwrap();
        assert!(sanitized.is_empty());
    }

    #[test]
    fn test_sanitize_props_rejects_node_overrides() {
        let registry = sample_registry();
        let mut props = BTreeMap::new();
        props.insert("icon".to_string(), PropValue::from("<Star />"));

        let err = registry
            .sanitize_props("shimmer-button", &props)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_sanitize_props_unknown_component() {
        let registry = sample_registry();
        let err = registry
            .sanitize_props("does-not-exist", &BTreeMap::new())
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
