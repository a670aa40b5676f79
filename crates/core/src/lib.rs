//! # Pagecraft Core
//!
//! Core types, traits, and error handling for Pagecraft.
//!
//! This crate provides the foundational building blocks used throughout
//! the Pagecraft workspace, including:
//!
//! - **Types**: component categories, prop kinds, and the serializable
//!   prop value union
//! - **Traits**: common behaviors like `Validatable` and `Named`
//! - **Errors**: unified error handling with `BuilderError` and
//!   `BuilderResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{BuilderError, BuilderResult, ResultExt};
pub use traits::{Identifiable, Named, Validatable};
pub use types::{Category, PropKind, PropValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
