//! Project validation
//!
//! Structural checks over a whole project, optionally cross-checked
//! against a registry. Unlike `Validatable::validate`, which stops at
//! the first problem, the validator collects every issue into a report
//! so tooling can show them all at once.

use crate::project::Project;
use pagecraft_registry::Registry;
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// ValidationIssue
// ============================================================================

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The project cannot be exported as-is
    Error,
    /// The project exports, but something looks wrong
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One problem found in a project
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Issue severity
    pub severity: Severity,

    /// Where the problem is ("page 'Home'", "project")
    pub location: String,

    /// What is wrong
    pub message: String,
}

impl ValidationIssue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

// ============================================================================
// ValidationReport
// ============================================================================

/// All issues found in one validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Issues in discovery order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Check if no issues were found
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Check if any error-severity issues were found
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == Severity::Error)
    }

    /// Error-severity issues
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    /// Warning-severity issues
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Validate a project's structure
///
/// Pass a registry to also check that every placed component references
/// a known descriptor; pass `None` for structure-only validation.
pub fn validate_project(project: &Project, registry: Option<&Registry>) -> ValidationReport {
    let mut report = ValidationReport::default();

    if project.name.trim().is_empty() {
        report.push(ValidationIssue::error("project", "name is empty"));
    }
    if project.pages.is_empty() {
        report.push(ValidationIssue::error("project", "no pages"));
    }

    let mut page_ids = HashSet::new();
    for page in &project.pages {
        let location = format!("page '{}'", page.name);

        if !page_ids.insert(page.id) {
            report.push(ValidationIssue::error(&location, "duplicate page id"));
        }
        if page.name.trim().is_empty() {
            report.push(ValidationIssue::error("page", "name is empty"));
        }
        if page.is_empty() {
            report.push(ValidationIssue::warning(&location, "page has no components"));
        }

        let mut instance_ids = HashSet::new();
        for component in &page.components {
            if !instance_ids.insert(component.instance_id) {
                report.push(ValidationIssue::error(
                    &location,
                    format!("duplicate instance id {}", component.instance_id),
                ));
            }

            if let Some(registry) = registry {
                if !registry.contains(&component.component_id) {
                    report.push(ValidationIssue::error(
                        &location,
                        format!("unknown component '{}'", component.component_id),
                    ));
                }
            }
        }
    }

    report
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::PlacedComponent;
    use pagecraft_registry::builtin;

    #[test]
    fn test_clean_project() {
        let mut project = Project::new("Landing");
        let home_id = project.home_page().id;
        project
            .page_mut(home_id)
            .unwrap()
            .push(PlacedComponent::new("shimmer-button"));

        let report = validate_project(&project, Some(&builtin()));
        assert!(report.is_clean());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_empty_page_is_warning_not_error() {
        let project = Project::new("Landing");
        let report = validate_project(&project, None);

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_unknown_component_detected_with_registry() {
        let mut project = Project::new("Landing");
        let home_id = project.home_page().id;
        project
            .page_mut(home_id)
            .unwrap()
            .push(PlacedComponent::new("no-such-component"));

        let without_registry = validate_project(&project, None);
        assert!(!without_registry.has_errors());

        let with_registry = validate_project(&project, Some(&builtin()));
        assert!(with_registry.has_errors());
        let first_error = with_registry.errors().next().unwrap();
        assert!(first_error.message.contains("no-such-component"));
    }

    #[test]
    fn test_duplicate_instance_ids_detected() {
        let mut project = Project::new("Landing");
        let home_id = project.home_page().id;
        let page = project.page_mut(home_id).unwrap();
        let placed = PlacedComponent::new("marquee");
        page.push(placed.clone());
        page.push(placed);

        let report = validate_project(&project, None);
        assert!(report.has_errors());
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::error("page 'Home'", "duplicate page id");
        assert_eq!(issue.to_string(), "error: page 'Home': duplicate page id");
    }
}
