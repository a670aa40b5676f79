//! Shared data types for Pagecraft
//!
//! This module contains the types used across the registry, model,
//! builder, and codegen crates: component categories, prop kinds, and
//! the serializable prop value union.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Category
// ============================================================================

/// Fixed set of component categories in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Animated buttons and call-to-action triggers
    Buttons,
    /// Cards, tiles, and hover surfaces
    Cards,
    /// Animated text effects
    Text,
    /// Full-bleed animated backgrounds
    Backgrounds,
    /// Spinners and progress indicators
    Loaders,
    /// Structural sections and grids
    Layout,
    /// Inputs and form controls
    Forms,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Buttons,
            Category::Cards,
            Category::Text,
            Category::Backgrounds,
            Category::Loaders,
            Category::Layout,
            Category::Forms,
        ]
    }

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Buttons => "Buttons",
            Category::Cards => "Cards",
            Category::Text => "Text",
            Category::Backgrounds => "Backgrounds",
            Category::Loaders => "Loaders",
            Category::Layout => "Layout",
            Category::Forms => "Forms",
        }
    }

    /// Parse a category from its kebab-case slug
    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::all()
            .iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
            .copied()
    }

    /// Get the kebab-case slug for this category
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Buttons => "buttons",
            Category::Cards => "cards",
            Category::Text => "text",
            Category::Backgrounds => "backgrounds",
            Category::Loaders => "loaders",
            Category::Layout => "layout",
            Category::Forms => "forms",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// PropKind
// ============================================================================

/// Declared kind of a component prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropKind {
    /// Plain text value
    Text,
    /// Numeric value
    Number,
    /// Boolean flag
    Bool,
    /// List of serializable values
    List,
    /// Renderable node (children, icons); cannot be stored as data
    Node,
}

impl PropKind {
    /// Whether a value of this kind can be stored and re-emitted as data
    pub fn is_serializable(&self) -> bool {
        !matches!(self, PropKind::Node)
    }

    /// Get the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            PropKind::Text => "text",
            PropKind::Number => "number",
            PropKind::Bool => "bool",
            PropKind::List => "list",
            PropKind::Node => "node",
        }
    }
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// PropValue
// ============================================================================

/// A statically serializable prop override value
///
/// Prop overrides are the only mutable data carried by a placed component.
/// The union is limited to values that survive a JSON round trip and can
/// be re-emitted as JSX attributes; renderable nodes never enter the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text value
    String(String),
    /// List of values
    List(Vec<PropValue>),
}

impl PropValue {
    /// The prop kind this value satisfies
    pub fn kind(&self) -> PropKind {
        match self {
            PropValue::Bool(_) => PropKind::Bool,
            PropValue::Number(_) => PropKind::Number,
            PropValue::String(_) => PropKind::Text,
            PropValue::List(_) => PropKind::List,
        }
    }

    /// Check whether this value matches a declared prop kind
    pub fn matches_kind(&self, kind: PropKind) -> bool {
        kind == self.kind()
    }

    /// Get the string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric content, if this is a number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean content, if this is a bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value as f64)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(value: Vec<T>) -> Self {
        PropValue::List(value.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::all() {
            assert_eq!(Category::from_slug(category.slug()), Some(*category));
        }
        assert_eq!(Category::from_slug("BUTTONS"), Some(Category::Buttons));
        assert_eq!(Category::from_slug("widgets"), None);
    }

    #[test]
    fn test_category_serde_kebab_case() {
        let json = serde_json::to_string(&Category::Backgrounds).unwrap();
        assert_eq!(json, "\"backgrounds\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Backgrounds);
    }

    #[test]
    fn test_prop_kind_serializability() {
        assert!(PropKind::Text.is_serializable());
        assert!(PropKind::List.is_serializable());
        assert!(!PropKind::Node.is_serializable());
    }

    #[test]
    fn test_prop_value_kinds() {
        assert_eq!(PropValue::from(true).kind(), PropKind::Bool);
        assert_eq!(PropValue::from(2.5).kind(), PropKind::Number);
        assert_eq!(PropValue::from("hello").kind(), PropKind::Text);
        assert_eq!(PropValue::from(vec![1i64, 2]).kind(), PropKind::List);
    }

    #[test]
    fn test_prop_value_accessors() {
        assert_eq!(PropValue::from("hi").as_str(), Some("hi"));
        assert_eq!(PropValue::from(3i64).as_number(), Some(3.0));
        assert_eq!(PropValue::from(false).as_bool(), Some(false));
        assert_eq!(PropValue::from("hi").as_number(), None);
    }

    #[test]
    fn test_prop_value_untagged_serde() {
        let value = PropValue::List(vec![
            PropValue::from("a"),
            PropValue::from(1i64),
            PropValue::from(true),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "[\"a\",1.0,true]");

        let back: PropValue = serde_json::from_str("[\"a\",1.0,true]").unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_prop_value_matches_kind() {
        assert!(PropValue::from("x").matches_kind(PropKind::Text));
        assert!(!PropValue::from("x").matches_kind(PropKind::Number));
    }
}
