//! # Pagecraft Registry
//!
//! Read-only component catalog for Pagecraft.
//!
//! The registry maps component ids to descriptors: metadata, prop specs,
//! JSX tag and import information, and optional source code. It supplies
//! the palette the builder places from and the descriptors the code
//! generator emits against.
//!
//! ## Core concepts
//!
//! - **ComponentDescriptor**: one catalog entry (id, category, tags,
//!   props, variants, pro flag, source)
//! - **Registry**: ordered, id-indexed collection with lookup, category
//!   listing, search, and prop sanitization
//! - **SourceLoader**: collaborator seam for fetching component source
//!   on demand
//!

// Module declarations
pub mod catalog;
pub mod descriptor;
pub mod registry;
pub mod source;

// Re-export commonly used types at crate root
pub use catalog::builtin;
pub use descriptor::{ComponentDescriptor, PropSpec, VariantDescriptor};
pub use registry::Registry;
pub use source::{FsSourceLoader, SourceLoader};

// Re-export core types that are commonly used with the registry
pub use pagecraft_core::{BuilderError, BuilderResult, Category, PropKind, PropValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_reexport() {
        let registry = builtin();
        assert!(!registry.is_empty());
    }
}
