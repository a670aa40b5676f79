//! On-demand component source lookup
//!
//! Descriptors may bundle their source inline or point at a path. The
//! actual fetch is delegated to a `SourceLoader` collaborator so the
//! registry stays free of IO concerns.

use crate::descriptor::ComponentDescriptor;
use crate::registry::Registry;
use pagecraft_core::{BuilderError, BuilderResult};
use std::path::{Path, PathBuf};

// ============================================================================
// SourceLoader Trait
// ============================================================================

/// Fetches component source code by path
///
/// Implementations decide where paths resolve (a local checkout, a
/// bundled archive, a remote mirror). The registry only hands them the
/// descriptor's stored path.
pub trait SourceLoader {
    /// Load the source text stored at `path`
    fn load(&self, path: &Path) -> BuilderResult<String>;
}

// ============================================================================
// FsSourceLoader
// ============================================================================

/// Source loader reading from a directory on disk
#[derive(Debug, Clone)]
pub struct FsSourceLoader {
    /// Directory that descriptor source paths are resolved against
    root: PathBuf,
}

impl FsSourceLoader {
    /// Create a loader rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory paths resolve against
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceLoader for FsSourceLoader {
    fn load(&self, path: &Path) -> BuilderResult<String> {
        let full_path = self.root.join(path);
        std::fs::read_to_string(&full_path).map_err(|e| BuilderError::SourceRead {
            path: full_path,
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Source Resolution
// ============================================================================

impl ComponentDescriptor {
    /// Resolve this component's source code
    ///
    /// Inline source wins; otherwise the loader fetches by the stored
    /// path. A descriptor with neither yields `NoCodePath`.
    pub fn source_code(&self, loader: &dyn SourceLoader) -> BuilderResult<String> {
        if let Some(source) = &self.source {
            return Ok(source.clone());
        }
        match &self.source_path {
            Some(path) => loader.load(path),
            None => Err(BuilderError::NoCodePath(self.id.clone())),
        }
    }
}

impl Registry {
    /// Resolve the source code of a registered component
    pub fn component_source(&self, id: &str, loader: &dyn SourceLoader) -> BuilderResult<String> {
        let descriptor = self
            .component_by_id(id)
            .ok_or_else(|| BuilderError::ComponentNotFound(id.to_string()))?;
        descriptor.source_code(loader)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::Category;
    use tempfile::TempDir;

    fn registry_with(descriptor: ComponentDescriptor) -> Registry {
        let mut registry = Registry::new();
        registry.register(descriptor).unwrap();
        registry
    }

    #[test]
    fn test_inline_source_wins() {
        let registry = registry_with(
            ComponentDescriptor::new("gradient-text", "Gradient Text", Category::Text)
                .with_source("export function GradientText() {}")
                .with_source_path("never/read.tsx"),
        );
        let loader = FsSourceLoader::new("/nonexistent");

        let source = registry.component_source("gradient-text", &loader).unwrap();
        assert_eq!(source, "export function GradientText() {}");
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("components")).unwrap();
        std::fs::write(
            temp_dir.path().join("components/marquee.tsx"),
            "export function Marquee() {}",
        )
        .unwrap();

        let registry = registry_with(
            ComponentDescriptor::new("marquee", "Marquee", Category::Layout)
                .with_source_path("components/marquee.tsx"),
        );
        let loader = FsSourceLoader::new(temp_dir.path());

        let source = registry.component_source("marquee", &loader).unwrap();
        assert_eq!(source, "export function Marquee() {}");
    }

    #[test]
    fn test_missing_file_is_source_read_error() {
        let registry = registry_with(
            ComponentDescriptor::new("dock", "Dock", Category::Layout)
                .with_source_path("components/dock.tsx"),
        );
        let loader = FsSourceLoader::new("/nonexistent");

        let err = registry.component_source("dock", &loader).unwrap_err();
        assert!(matches!(err, BuilderError::SourceRead { .. }));
    }

    #[test]
    fn test_no_code_path() {
        let registry = registry_with(ComponentDescriptor::new(
            "pulse-loader",
            "Pulse Loader",
            Category::Loaders,
        ));
        let loader = FsSourceLoader::new("/nonexistent");

        let err = registry.component_source("pulse-loader", &loader).unwrap_err();
        assert!(matches!(err, BuilderError::NoCodePath(_)));
    }

    #[test]
    fn test_unknown_component() {
        let registry = Registry::new();
        let loader = FsSourceLoader::new("/nonexistent");

        let err = registry.component_source("ghost", &loader).unwrap_err();
        assert!(err.is_not_found());
    }
}
