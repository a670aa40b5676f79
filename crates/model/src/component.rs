//! Placed component instances
//!
//! A `PlacedComponent` is one occurrence of a catalog component on a
//! page. It references its descriptor by id (the registry owns the
//! descriptor) and carries only the prop overrides the user made.

use pagecraft_core::{Identifiable, PropValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// PlacedComponent
// ============================================================================

/// An instance of a catalog component placed on a page
///
/// Serialized with camelCase keys; `props` is omitted when there are no
/// overrides, and readers treat a missing `props` as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedComponent {
    /// Identifier unique within the page, generated at placement time
    pub instance_id: Uuid,

    /// Back-reference to the descriptor's id in the registry
    pub component_id: String,

    /// Prop overrides; keys absent here fall back to descriptor defaults
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, PropValue>,
}

impl PlacedComponent {
    /// Create a new instance of the given catalog component
    pub fn new(component_id: impl Into<String>) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            component_id: component_id.into(),
            props: BTreeMap::new(),
        }
    }

    /// Add a prop override (builder style)
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Set a prop override
    pub fn set_prop(&mut self, name: impl Into<String>, value: impl Into<PropValue>) {
        self.props.insert(name.into(), value.into());
    }

    /// Remove a prop override, returning the previous value
    pub fn remove_prop(&mut self, name: &str) -> Option<PropValue> {
        self.props.remove(name)
    }

    /// Get a prop override
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Check whether any props are overridden
    pub fn has_overrides(&self) -> bool {
        !self.props.is_empty()
    }
}

impl Identifiable for PlacedComponent {
    fn id(&self) -> Uuid {
        self.instance_id
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instance() {
        let placed = PlacedComponent::new("shimmer-button");
        assert_eq!(placed.component_id, "shimmer-button");
        assert!(!placed.has_overrides());

        let other = PlacedComponent::new("shimmer-button");
        assert_ne!(placed.instance_id, other.instance_id);
    }

    #[test]
    fn test_prop_overrides() {
        let mut placed = PlacedComponent::new("shimmer-button").with_prop("label", "Buy now");
        assert!(placed.has_overrides());
        assert_eq!(placed.prop("label").and_then(|v| v.as_str()), Some("Buy now"));

        placed.set_prop("duration", 5i64);
        assert_eq!(placed.props.len(), 2);

        let removed = placed.remove_prop("label");
        assert_eq!(removed, Some(PropValue::from("Buy now")));
        assert!(placed.prop("label").is_none());
    }

    #[test]
    fn test_serde_camel_case_keys() {
        let placed = PlacedComponent::new("tilt-card").with_prop("maxTilt", 8i64);
        let json = serde_json::to_string(&placed).unwrap();
        assert!(json.contains("\"instanceId\""));
        assert!(json.contains("\"componentId\":\"tilt-card\""));
        assert!(json.contains("\"maxTilt\":8.0"));
    }

    #[test]
    fn test_serde_props_omitted_when_empty() {
        let placed = PlacedComponent::new("tilt-card");
        let json = serde_json::to_string(&placed).unwrap();
        assert!(!json.contains("props"));
    }

    #[test]
    fn test_serde_tolerates_missing_props_and_unknown_fields() {
        let json = format!(
            "{{\"instanceId\":\"{}\",\"componentId\":\"marquee\",\"futureField\":42}}",
            Uuid::new_v4(),
        );
        let placed: PlacedComponent = serde_json::from_str(&json).unwrap();
        assert_eq!(placed.component_id, "marquee");
        assert!(placed.props.is_empty());
    }
}
