//! # Pagecraft Model
//!
//! Data model and persistence for Pagecraft projects.
//!
//! ## Core concepts
//!
//! - **PlacedComponent**: one instance of a catalog component on a page,
//!   referencing its descriptor by id and carrying prop overrides
//! - **Page**: an ordered sequence of placed components; insertion order
//!   is render and export order
//! - **Project**: a named collection of pages; always at least one page,
//!   and the first page is the home route
//! - **ProjectStore**: string-keyed persistence of `SavedProject`
//!   snapshots, with file-backed and in-memory implementations
//!

// Module declarations
pub mod component;
pub mod page;
pub mod project;
pub mod storage;
pub mod validation;

// Re-export commonly used types at crate root
pub use component::PlacedComponent;
pub use page::Page;
pub use project::{DEFAULT_PAGE_NAME, Project};
pub use storage::{
    FileStore, MemoryStore, ProjectStore, SCHEMA_VERSION, SavedProject, storage_key,
};
pub use validation::{Severity, ValidationIssue, ValidationReport, validate_project};

// Re-export core types that are commonly used with the model
pub use pagecraft_core::{BuilderError, BuilderResult, PropValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Tests
// ============================================================================
