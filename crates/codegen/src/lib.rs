//! # Pagecraft Codegen
//!
//! Code generation for Pagecraft projects.
//!
//! This crate turns a project's pages into JSX source a user can copy
//! out or write to disk. Generation is pure and deterministic: the same
//! page always produces byte-identical output, which is what makes
//! copy-to-clipboard reproducible and snapshot tests possible.
//!
//! ## Pipeline
//!
//! ```text
//! Project + Registry + GeneratorConfig
//!         │
//!         ▼
//!   GenerationContext::new()
//!         │
//!         ├──► page::generate_page()  → one JSX file per page
//!         │
//!         ▼
//!   GeneratedProject { files, warnings }
//! ```
//!

// ============================================================================
// Modules
// ============================================================================

pub mod context;
pub mod generator;
pub mod jsx;
pub mod page;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::GenerationContext;
pub use generator::{Generator, generate};
pub use page::generate_page;

use pagecraft_core::{BuilderError, BuilderResult};
use std::path::{Path, PathBuf};

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the code generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Output directory for generated files
    pub output_dir: PathBuf,

    /// Whether to emit the do-not-edit header comment
    pub include_header: bool,

    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./export"),
            include_header: true,
            indent: 2,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Disable the header comment
    pub fn without_header(mut self) -> Self {
        self.include_header = false;
        self
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// A single generated source file
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    /// Relative path from the output directory
    pub path: PathBuf,

    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Create a new generated file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// GeneratedProject
// ============================================================================

/// All files generated for a project
#[derive(Debug, Clone, Default)]
pub struct GeneratedProject {
    /// Project name
    pub name: String,

    /// Generated files in page order
    pub files: Vec<GeneratedFile>,

    /// Warnings collected during generation
    pub warnings: Vec<String>,
}

impl GeneratedProject {
    /// Create an empty generated project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a file
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Number of generated files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Write all files under the given base directory
    pub fn write_to_disk(&self, base_dir: impl AsRef<Path>) -> BuilderResult<()> {
        let base_dir = base_dir.as_ref();

        for file in &self.files {
            let full_path = base_dir.join(&file.path);

            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    BuilderError::with_context(
                        format!("Creating directory '{}'", parent.display()),
                        e.to_string(),
                    )
                })?;
            }

            std::fs::write(&full_path, &file.content).map_err(|e| {
                BuilderError::with_context(
                    format!("Writing file '{}'", full_path.display()),
                    e.to_string(),
                )
            })?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
