//! Component descriptor definitions
//!
//! This module contains `ComponentDescriptor` and its prop/variant
//! metadata. Descriptors are the registry's entries: immutable records
//! created at load time that describe one placeable component.

use heck::ToUpperCamelCase;
use pagecraft_core::{Category, PropKind, PropValue};
use serde::Serialize;
use std::path::PathBuf;

// ============================================================================
// PropSpec
// ============================================================================

/// Declares one prop a component accepts
#[derive(Debug, Clone, Serialize)]
pub struct PropSpec {
    /// Prop name as it appears in the emitted markup
    pub name: String,

    /// Declared kind
    pub kind: PropKind,

    /// Default value, emitted when the prop is marked required and not
    /// overridden
    pub default: Option<PropValue>,

    /// Whether the prop must appear in every emitted invocation
    pub required: bool,

    /// One-line description
    pub doc: Option<String>,
}

impl PropSpec {
    /// Create a prop spec with the given name and kind
    pub fn new(name: impl Into<String>, kind: PropKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            required: false,
            doc: None,
        }
    }

    /// Create a text prop
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, PropKind::Text)
    }

    /// Create a number prop
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, PropKind::Number)
    }

    /// Create a bool prop
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, PropKind::Bool)
    }

    /// Create a list prop
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, PropKind::List)
    }

    /// Create a renderable-node prop (children, icons)
    pub fn node(name: impl Into<String>) -> Self {
        Self::new(name, PropKind::Node)
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<PropValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the prop as required in every emitted invocation
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the description
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

// ============================================================================
// VariantDescriptor
// ============================================================================

/// An alternate renderable implementation under the same descriptor
#[derive(Debug, Clone, Serialize)]
pub struct VariantDescriptor {
    /// Variant name (e.g. "outline")
    pub name: String,

    /// JSX tag name of the variant implementation
    pub tag_name: String,
}

impl VariantDescriptor {
    /// Create a new variant descriptor
    pub fn new(name: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag_name: tag_name.into(),
        }
    }
}

// ============================================================================
// ComponentDescriptor
// ============================================================================

/// A registry entry describing one placeable component
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDescriptor {
    /// Unique identifier (kebab-case, e.g. "shimmer-button")
    pub id: String,

    /// Display name (e.g. "Shimmer Button")
    pub name: String,

    /// Catalog category
    pub category: Category,

    /// One-line description
    pub description: String,

    /// Tags for search
    pub tags: Vec<String>,

    /// JSX tag name (e.g. "ShimmerButton")
    pub tag_name: String,

    /// Import path of the renderable implementation
    pub import_path: String,

    /// Props this component accepts
    pub props: Vec<PropSpec>,

    /// Alternate implementations under this descriptor
    pub variants: Vec<VariantDescriptor>,

    /// Whether this component requires a pro license
    pub pro: bool,

    /// Inline source code for display, if bundled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Path to the source code for on-demand loading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
}

impl ComponentDescriptor {
    /// Create a new descriptor
    ///
    /// The JSX tag name is derived from the id (`shimmer-button` →
    /// `ShimmerButton`) and the import path defaults to the catalog's
    /// `@/components/ui/<id>` convention. Both can be overridden with the
    /// builder methods.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        let id = id.into();
        let tag_name = id.to_upper_camel_case();
        let import_path = format!("@/components/ui/{}", id);

        Self {
            id,
            name: name.into(),
            category,
            description: String::new(),
            tags: Vec::new(),
            tag_name,
            import_path,
            props: Vec::new(),
            variants: Vec::new(),
            pro: false,
            source: None,
            source_path: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a search tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a prop spec
    pub fn with_prop(mut self, prop: PropSpec) -> Self {
        self.props.push(prop);
        self
    }

    /// Add a variant
    pub fn with_variant(mut self, variant: VariantDescriptor) -> Self {
        self.variants.push(variant);
        self
    }

    /// Override the JSX tag name
    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Override the import path
    pub fn with_import_path(mut self, import_path: impl Into<String>) -> Self {
        self.import_path = import_path.into();
        self
    }

    /// Mark the component as pro-only
    pub fn pro(mut self) -> Self {
        self.pro = true;
        self
    }

    /// Attach inline source code
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach a source path for on-demand loading
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Find a prop spec by name
    pub fn prop(&self, name: &str) -> Option<&PropSpec> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Props that must appear in every emitted invocation
    pub fn required_props(&self) -> impl Iterator<Item = &PropSpec> {
        self.props.iter().filter(|p| p.required)
    }

    /// Find a variant by name
    pub fn variant(&self, name: &str) -> Option<&VariantDescriptor> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Check whether the descriptor matches a search query
    ///
    /// Case-insensitive substring match over name, description, and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&query))
    }
}

impl pagecraft_core::Named for ComponentDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

// ============================================================================
// Tests
// ============================================================================
