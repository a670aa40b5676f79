//! Project pages
//!
//! A page is an ordered sequence of placed components. Insertion order
//! is meaningful: it is the render and export order. All mutation goes
//! through the three pure sequence operations (`insert_at`, `move_to`,
//! `remove`) so the ordering rules live in one place and the UI layer
//! only binds pointer events to them.

use crate::component::PlacedComponent;
use pagecraft_core::{BuilderError, BuilderResult, Identifiable, Named, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

// ============================================================================
// Page
// ============================================================================

/// One page of a builder project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Placed components in render order
    #[serde(default)]
    pub components: Vec<PlacedComponent>,
}

impl Page {
    /// Create an empty page with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            components: Vec::new(),
        }
    }

    // ========================================================================
    // Sequence operations
    // ========================================================================

    /// Insert a component at the given index
    ///
    /// Indexes past the end append; the rest of the sequence shifts
    /// right, so positions stay gapless and duplicate-free.
    pub fn insert_at(&mut self, index: usize, component: PlacedComponent) {
        let index = index.min(self.components.len());
        self.components.insert(index, component);
    }

    /// Append a component at the end
    pub fn push(&mut self, component: PlacedComponent) {
        self.components.push(component);
    }

    /// Move an instance to a new index
    ///
    /// The component is spliced out and reinserted, preserving a strict
    /// total order. Returns false (and leaves the page untouched) if the
    /// instance id is unknown; a target index past the end moves to the
    /// end.
    pub fn move_to(&mut self, instance_id: Uuid, to_index: usize) -> bool {
        let Some(from_index) = self.position_of(instance_id) else {
            return false;
        };
        let component = self.components.remove(from_index);
        let to_index = to_index.min(self.components.len());
        self.components.insert(to_index, component);
        true
    }

    /// Remove an instance by id
    ///
    /// Unknown ids are a no-op and yield `None`.
    pub fn remove(&mut self, instance_id: Uuid) -> Option<PlacedComponent> {
        let index = self.position_of(instance_id)?;
        Some(self.components.remove(index))
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Find the index of an instance
    pub fn position_of(&self, instance_id: Uuid) -> Option<usize> {
        self.components
            .iter()
            .position(|c| c.instance_id == instance_id)
    }

    /// Get an instance by id
    pub fn component(&self, instance_id: Uuid) -> Option<&PlacedComponent> {
        self.components
            .iter()
            .find(|c| c.instance_id == instance_id)
    }

    /// Get a mutable instance by id
    pub fn component_mut(&mut self, instance_id: Uuid) -> Option<&mut PlacedComponent> {
        self.components
            .iter_mut()
            .find(|c| c.instance_id == instance_id)
    }

    /// Number of placed components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the page has no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component ids referenced by this page, in order
    pub fn component_ids(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.component_id.as_str())
    }
}

impl Identifiable for Page {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Named for Page {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Validatable for Page {
    fn validate(&self) -> BuilderResult<()> {
        if self.name.trim().is_empty() {
            return Err(BuilderError::validation("Page name cannot be empty"));
        }

        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.instance_id) {
                return Err(BuilderError::validation(format!(
                    "Duplicate instance id {} on page '{}'",
                    component.instance_id, self.name,
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(ids: &[&str]) -> Page {
        let mut page = Page::new("Test");
        for id in ids {
            page.push(PlacedComponent::new(*id));
        }
        page
    }

    #[test]
    fn test_insert_at_orders_components() {
        let mut page = Page::new("Home");
        page.insert_at(0, PlacedComponent::new("a"));
        page.insert_at(0, PlacedComponent::new("b"));
        page.insert_at(1, PlacedComponent::new("c"));

        let order: Vec<&str> = page.component_ids().collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut page = page_with(&["a"]);
        page.insert_at(99, PlacedComponent::new("b"));
        let order: Vec<&str> = page.component_ids().collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_move_to_splices() {
        let mut page = page_with(&["a", "b", "c"]);
        let c_id = page.components[2].instance_id;

        assert!(page.move_to(c_id, 0));
        let order: Vec<&str> = page.component_ids().collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(page.position_of(c_id), Some(0));
    }

    #[test]
    fn test_move_past_end_clamps() {
        let mut page = page_with(&["a", "b", "c"]);
        let a_id = page.components[0].instance_id;

        assert!(page.move_to(a_id, 99));
        let order: Vec<&str> = page.component_ids().collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let mut page = page_with(&["a", "b"]);
        let before = page.clone();

        assert!(!page.move_to(Uuid::new_v4(), 0));
        assert_eq!(page, before);
    }

    #[test]
    fn test_remove() {
        let mut page = page_with(&["a", "b"]);
        let a_id = page.components[0].instance_id;

        let removed = page.remove(a_id).unwrap();
        assert_eq!(removed.component_id, "a");
        assert_eq!(page.len(), 1);

        // Unknown id is a no-op, not an error
        assert!(page.remove(Uuid::new_v4()).is_none());
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_validation() {
        let page = page_with(&["a"]);
        assert!(page.is_valid());

        let unnamed = Page::new("  ");
        assert!(!unnamed.is_valid());

        let mut duplicated = page_with(&["a"]);
        let clone = duplicated.components[0].clone();
        duplicated.push(clone);
        assert!(!duplicated.is_valid());
    }
}
