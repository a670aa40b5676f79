//! Error types for Pagecraft
//!
//! This module provides unified error handling across the engine,
//! covering lookup failures, storage failures, serialization problems,
//! invariant violations, and code generation errors.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for Pagecraft
#[derive(Debug, Error)]
pub enum BuilderError {
    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Component descriptor not found in the registry
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Page not found in the project
    #[error("Page not found: {0}")]
    PageNotFound(Uuid),

    /// Placed component instance not found on the page
    #[error("Component instance not found: {0}")]
    InstanceNotFound(Uuid),

    /// Saved project not found in the store
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    // ========================================================================
    // Duplicate Errors
    // ========================================================================
    /// Duplicate component id registered
    #[error("Duplicate component id: '{0}' is already registered")]
    DuplicateComponent(String),

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Prop validation failed
    #[error("Prop validation failed for '{component}.{prop}': {message}")]
    PropValidation {
        component: String,
        prop: String,
        message: String,
    },

    // ========================================================================
    // Invariant Violations
    // ========================================================================
    /// Attempted to delete the last remaining page
    #[error("Cannot delete '{0}': a project must keep at least one page")]
    LastPage(String),

    /// Generic invariant violation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    // ========================================================================
    // Storage Errors
    // ========================================================================
    /// The persistence medium is unavailable
    #[error("Project store unavailable: {0}")]
    StorageUnavailable(String),

    /// Failed to read a stored project
    #[error("Failed to read project '{key}': {message}")]
    StoreRead { key: String, message: String },

    /// Failed to write a stored project
    #[error("Failed to write project '{key}': {message}")]
    StoreWrite { key: String, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Stored project data is not in a recognized format
    #[error("Invalid project format: {0}")]
    InvalidProjectFormat(String),

    /// Stored schema version is newer than this build supports
    #[error("Unsupported schema version: found {found}, supported up to {supported}")]
    UnsupportedSchemaVersion { found: u32, supported: u32 },

    // ========================================================================
    // Code Generation Errors
    // ========================================================================
    /// Code generation failed
    #[error("Code generation failed: {0}")]
    CodeGeneration(String),

    // ========================================================================
    // Source Lookup Errors
    // ========================================================================
    /// Component has neither inline source nor a source path
    #[error("No code path for component: {0}")]
    NoCodePath(String),

    /// Failed to read component source from its path
    #[error("Failed to read source '{path}': {message}")]
    SourceRead { path: PathBuf, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl BuilderError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        BuilderError::Validation(msg.into())
    }

    /// Create a prop validation error
    pub fn prop_validation(
        component: impl Into<String>,
        prop: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        BuilderError::PropValidation {
            component: component.into(),
            prop: prop.into(),
            message: msg.into(),
        }
    }

    /// Create a code generation error
    pub fn codegen(msg: impl Into<String>) -> Self {
        BuilderError::CodeGeneration(msg.into())
    }

    /// Create a storage-unavailable error
    pub fn storage(msg: impl Into<String>) -> Self {
        BuilderError::StorageUnavailable(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        BuilderError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        BuilderError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BuilderError::ComponentNotFound(_)
                | BuilderError::PageNotFound(_)
                | BuilderError::InstanceNotFound(_)
                | BuilderError::ProjectNotFound(_)
        )
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BuilderError::Validation(_) | BuilderError::PropValidation { .. }
        )
    }

    /// Check if this error is an invariant violation
    pub fn is_invariant(&self) -> bool {
        matches!(
            self,
            BuilderError::LastPage(_) | BuilderError::InvariantViolation(_)
        )
    }

    /// Check if this error is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            BuilderError::StorageUnavailable(_)
                | BuilderError::StoreRead { .. }
                | BuilderError::StoreWrite { .. }
        )
    }

    /// Check if this error is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            BuilderError::JsonSerialization(_)
                | BuilderError::InvalidProjectFormat(_)
                | BuilderError::UnsupportedSchemaVersion { .. }
        )
    }
}

/// Result type alias using BuilderError
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> BuilderResult<T>;
}

impl<T, E: Into<BuilderError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> BuilderResult<T> {
        self.map_err(|e| {
            let err: BuilderError = e.into();
            BuilderError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
