//! # Code Generator Orchestrator
//!
//! The `Generator` is the top-level entry point for whole-project
//! export. It takes a [`Project`] and a [`Registry`], builds a
//! [`GenerationContext`], renders every page, and assembles a
//! [`GeneratedProject`] with one file per page plus collected warnings.
//!
//! The first page becomes the home route (`app/page.jsx`); later pages
//! land under their slug (`app/<slug>/page.jsx`).

use pagecraft_model::{Project, validate_project};
use pagecraft_registry::Registry;

use crate::context::GenerationContext;
use crate::page::render_page;
use crate::{GeneratedFile, GeneratedProject, GeneratorConfig};

// ============================================================================
// Generator
// ============================================================================

/// Top-level code generator for whole-project export
///
/// Stateless aside from its configuration. Generation itself never
/// fails: problems surface as warnings on the output so a partially
/// broken project still exports what it can.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a new generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render every page of a project
    ///
    /// # Steps
    ///
    /// 1. Validate the project against the registry; issues become
    ///    warnings on the output rather than hard failures.
    /// 2. Render each page in order, first page as the home route.
    /// 3. Collect per-page warnings (unknown components).
    pub fn generate(&self, registry: &Registry, project: &Project) -> GeneratedProject {
        let ctx = GenerationContext::new(registry, self.config.clone());
        let mut output = GeneratedProject::new(&project.name);

        let report = validate_project(project, Some(registry));
        for issue in &report.issues {
            output.add_warning(issue.to_string());
        }

        let mut used_slugs = Vec::new();
        for (index, page) in project.pages.iter().enumerate() {
            let mut warnings = Vec::new();
            let source = render_page(&ctx, page, &mut warnings);
            let path = ctx.page_file_path(index, page, &mut used_slugs);

            output.add_file(GeneratedFile::new(path, source));
            for warning in warnings {
                output.add_warning(warning);
            }
        }

        tracing::info!(
            project = %project.name,
            files = output.file_count(),
            warnings = output.warnings.len(),
            "code generation complete",
        );

        output
    }

    /// Generate and write all files to the configured output directory
    pub fn generate_and_write(
        &self,
        registry: &Registry,
        project: &Project,
    ) -> pagecraft_core::BuilderResult<GeneratedProject> {
        let output = self.generate(registry, project);
        output.write_to_disk(&self.config.output_dir)?;
        tracing::info!(
            output_dir = %self.config.output_dir.display(),
            files = output.file_count(),
            "files written to disk",
        );
        Ok(output)
    }
}

// ============================================================================
// Standalone convenience function
// ============================================================================

/// Generate a project's files using default configuration
///
/// This is a shorthand for `Generator::with_defaults().generate(...)`.
pub fn generate(registry: &Registry, project: &Project) -> GeneratedProject {
    Generator::with_defaults().generate(registry, project)
}

// ============================================================================
// Tests
// ============================================================================
