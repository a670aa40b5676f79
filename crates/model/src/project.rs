//! Builder projects
//!
//! A project is a named, ordered collection of pages. The first page is
//! the home route. A project always has at least one page; the last page
//! cannot be deleted.

use crate::page::Page;
use chrono::{DateTime, Utc};
use pagecraft_core::{BuilderError, BuilderResult, Named, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Name of the page seeded into every new project
pub const DEFAULT_PAGE_NAME: &str = "Home";

// ============================================================================
// Project
// ============================================================================

/// The in-memory working project owned by the builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name; also the storage key when saved
    pub name: String,

    /// Pages in navigation order; the first page is the home route
    pub pages: Vec<Page>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project seeded with a single empty home page
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            pages: vec![Page::new(DEFAULT_PAGE_NAME)],
            created_at: now,
            modified_at: now,
        }
    }

    /// Rebuild a project from loaded pages
    ///
    /// An empty page list is repaired by seeding the default page, so a
    /// loaded project always satisfies the at-least-one-page invariant.
    pub fn from_pages(name: impl Into<String>, mut pages: Vec<Page>) -> Self {
        if pages.is_empty() {
            pages.push(Page::new(DEFAULT_PAGE_NAME));
        }
        let now = Utc::now();
        Self {
            name: name.into(),
            pages,
            created_at: now,
            modified_at: now,
        }
    }

    // ========================================================================
    // Page management
    // ========================================================================

    /// Add a new empty page and return its id
    ///
    /// Pass `None` to auto-name the page ("Page 2", "Page 3", ...).
    pub fn add_page(&mut self, name: Option<String>) -> Uuid {
        let name = name.unwrap_or_else(|| format!("Page {}", self.pages.len() + 1));
        let page = Page::new(name);
        let id = page.id;
        self.pages.push(page);
        self.touch();
        id
    }

    /// Remove a page by id
    ///
    /// Deleting the last remaining page is rejected and leaves the
    /// project untouched.
    pub fn remove_page(&mut self, id: Uuid) -> BuilderResult<Page> {
        let index = self
            .page_index(id)
            .ok_or(BuilderError::PageNotFound(id))?;

        if self.pages.len() == 1 {
            return Err(BuilderError::LastPage(self.pages[index].name.clone()));
        }

        self.touch();
        Ok(self.pages.remove(index))
    }

    /// Rename a page
    pub fn rename_page(&mut self, id: Uuid, name: impl Into<String>) -> BuilderResult<()> {
        let page = self.page_mut(id).ok_or(BuilderError::PageNotFound(id))?;
        page.set_name(name.into());
        self.touch();
        Ok(())
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Get a page by id
    pub fn page(&self, id: Uuid) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Get a mutable page by id
    pub fn page_mut(&mut self, id: Uuid) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Find the index of a page
    pub fn page_index(&self, id: Uuid) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// The home page (always present)
    pub fn home_page(&self) -> &Page {
        &self.pages[0]
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of placed components across all pages
    pub fn component_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    // ========================================================================
    // Utility methods
    // ========================================================================

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl Named for Project {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Validatable for Project {
    fn validate(&self) -> BuilderResult<()> {
        if self.name.trim().is_empty() {
            return Err(BuilderError::validation("Project name cannot be empty"));
        }
        if self.pages.is_empty() {
            return Err(BuilderError::validation(
                "A project must have at least one page",
            ));
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.id) {
                return Err(BuilderError::validation(format!(
                    "Duplicate page id {}",
                    page.id,
                )));
            }
            page.validate()?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
