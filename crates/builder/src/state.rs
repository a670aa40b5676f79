//! Builder state management
//!
//! `BuilderState` is the single owner of the working project. Every
//! mutation is a synchronous method whose effect is visible to the next
//! read; rejected operations are no-ops that set a status message
//! instead of returning errors, so the UI layer can stay passive.

use crate::clipboard::Clipboard;
use crate::history::{History, HistorySnapshot};
use pagecraft_codegen::{GenerationContext, GeneratorConfig, generate_page};
use pagecraft_core::PropValue;
use pagecraft_model::{PlacedComponent, Project, ProjectStore, SavedProject};
use pagecraft_registry::Registry;
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// Mode
// ============================================================================

/// Interaction mode of the builder canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal editing: placing, reordering, deleting
    #[default]
    Editing,
    /// In-place text editing overlay: dragging is disabled
    TextEditing,
}

// ============================================================================
// Status Messages
// ============================================================================

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Status message for the builder chrome
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

// ============================================================================
// BuilderState
// ============================================================================

/// Working state of the page builder
///
/// The default state is a fresh single-page project; there is no
/// project-less state. The working project is owned exclusively here
/// and synchronized with the store only at explicit save/load
/// boundaries.
#[derive(Debug, Clone)]
pub struct BuilderState {
    /// The working project
    project: Project,

    /// Id of the page being edited
    active_page: Uuid,

    /// Selected instance on the active page, if any
    selection: Option<Uuid>,

    /// Current interaction mode
    mode: Mode,

    /// Whether the project has unsaved changes
    dirty: bool,

    /// Undo/redo history
    history: History,

    /// Last status message
    status: Option<StatusMessage>,
}

impl Default for BuilderState {
    fn default() -> Self {
        let project = Project::default();
        let active_page = project.home_page().id;
        Self {
            project,
            active_page,
            selection: None,
            mode: Mode::Editing,
            dirty: false,
            history: History::new(),
            status: None,
        }
    }
}

impl BuilderState {
    /// Create a fresh builder with a default single-page project
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder around an existing project
    pub fn with_project(project: Project) -> Self {
        let active_page = project.home_page().id;
        Self {
            project,
            active_page,
            ..Self::default()
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// The working project
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Id of the active page
    pub fn active_page_id(&self) -> Uuid {
        self.active_page
    }

    /// The active page
    pub fn active_page(&self) -> &pagecraft_model::Page {
        // The active page id always tracks an existing page; fall back
        // to home if it ever goes stale.
        self.project
            .page(self.active_page)
            .unwrap_or_else(|| self.project.home_page())
    }

    /// Selected instance id, if any
    pub fn selection(&self) -> Option<Uuid> {
        self.selection
    }

    /// Current interaction mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Last status message
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ========================================================================
    // Page transitions
    // ========================================================================

    /// Add a new page and make it active
    pub fn new_page(&mut self, name: Option<String>) -> Uuid {
        self.push_history("add page");
        let id = self.project.add_page(name);
        self.active_page = id;
        self.selection = None;
        self.dirty = true;
        id
    }

    /// Switch the active page
    ///
    /// Unknown page ids are rejected with a status message.
    pub fn select_page(&mut self, id: Uuid) -> bool {
        if self.project.page(id).is_none() {
            self.set_status(StatusLevel::Warning, format!("No such page: {}", id));
            return false;
        }
        self.active_page = id;
        self.selection = None;
        true
    }

    /// Rename a page
    pub fn rename_page(&mut self, id: Uuid, name: impl Into<String>) -> bool {
        if self.project.page(id).is_none() {
            self.set_status(StatusLevel::Warning, format!("No such page: {}", id));
            return false;
        }

        self.push_history("rename page");
        match self.project.rename_page(id, name) {
            Ok(()) => {
                self.dirty = true;
                true
            }
            Err(e) => {
                self.set_status(StatusLevel::Warning, e.to_string());
                false
            }
        }
    }

    /// Delete a page
    ///
    /// Deleting the last remaining page is a no-op with a message. If
    /// the deleted page was active, editing moves to the home page.
    pub fn delete_page(&mut self, id: Uuid) -> bool {
        if self.project.page(id).is_none() {
            self.set_status(StatusLevel::Warning, format!("No such page: {}", id));
            return false;
        }
        if self.project.page_count() == 1 {
            let name = self.project.home_page().name.clone();
            self.set_status(
                StatusLevel::Warning,
                pagecraft_core::BuilderError::LastPage(name).to_string(),
            );
            return false;
        }

        self.push_history("delete page");
        match self.project.remove_page(id) {
            Ok(page) => {
                if self.active_page == id {
                    self.active_page = self.project.home_page().id;
                    self.selection = None;
                }
                self.dirty = true;
                self.set_status(StatusLevel::Info, format!("Deleted page '{}'", page.name));
                true
            }
            Err(e) => {
                self.set_status(StatusLevel::Warning, e.to_string());
                false
            }
        }
    }

    // ========================================================================
    // Component transitions
    // ========================================================================

    /// Place a component on the active page
    ///
    /// The descriptor id is checked against the registry; unknown ids
    /// are rejected with a status message and no mutation. Returns the
    /// new instance id, which also becomes the selection.
    pub fn add_component(
        &mut self,
        registry: &Registry,
        descriptor_id: &str,
        at_index: usize,
    ) -> Option<Uuid> {
        if !registry.contains(descriptor_id) {
            self.set_status(
                StatusLevel::Error,
                format!("Unknown component: {}", descriptor_id),
            );
            return None;
        }

        self.push_history("add component");
        let placed = PlacedComponent::new(descriptor_id);
        let instance_id = placed.instance_id;
        self.active_page_mut().insert_at(at_index, placed);
        self.selection = Some(instance_id);
        self.dirty = true;
        tracing::debug!(component = %descriptor_id, index = at_index, "component placed");
        Some(instance_id)
    }

    /// Move an instance to a new index on the active page
    ///
    /// Disabled while text editing (dragging is off); unknown instance
    /// ids are a no-op.
    pub fn reorder_component(&mut self, instance_id: Uuid, to_index: usize) -> bool {
        if self.mode == Mode::TextEditing {
            self.set_status(
                StatusLevel::Info,
                "Finish text editing before rearranging components",
            );
            return false;
        }

        if self.active_page().position_of(instance_id).is_none() {
            return false;
        }

        self.push_history("reorder component");
        self.active_page_mut().move_to(instance_id, to_index);
        self.dirty = true;
        true
    }

    /// Remove an instance from the active page
    ///
    /// Unknown instance ids are a no-op, not an error.
    pub fn remove_component(&mut self, instance_id: Uuid) -> bool {
        if self.active_page().component(instance_id).is_none() {
            return false;
        }

        self.push_history("remove component");
        self.active_page_mut().remove(instance_id);
        if self.selection == Some(instance_id) {
            self.selection = None;
        }
        self.dirty = true;
        true
    }

    /// Override a prop on an instance of the active page
    ///
    /// The override is sanitized at the registry boundary: unknown prop
    /// names and mismatched kinds are dropped, and renderable-node props
    /// are rejected.
    pub fn set_prop(
        &mut self,
        registry: &Registry,
        instance_id: Uuid,
        name: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> bool {
        let name = name.into();
        let Some(component_id) = self
            .active_page()
            .component(instance_id)
            .map(|c| c.component_id.clone())
        else {
            self.set_status(
                StatusLevel::Warning,
                format!("No such component instance: {}", instance_id),
            );
            return false;
        };

        let mut requested = BTreeMap::new();
        requested.insert(name.clone(), value.into());

        let sanitized = match registry.sanitize_props(&component_id, &requested) {
            Ok(sanitized) => sanitized,
            Err(e) => {
                self.set_status(StatusLevel::Error, e.to_string());
                return false;
            }
        };

        let Some(value) = sanitized.into_values().next() else {
            self.set_status(
                StatusLevel::Warning,
                format!("'{}' is not an editable prop of {}", name, component_id),
            );
            return false;
        };

        self.push_history("edit prop");
        if let Some(component) = self.active_page_mut().component_mut(instance_id) {
            component.set_prop(name, value);
        }
        self.dirty = true;
        true
    }

    // ========================================================================
    // Selection and mode
    // ========================================================================

    /// Select an instance on the active page
    pub fn select(&mut self, instance_id: Uuid) -> bool {
        if self.active_page().component(instance_id).is_none() {
            return false;
        }
        self.selection = Some(instance_id);
        true
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Toggle the in-place text editing overlay
    pub fn toggle_text_editing(&mut self) {
        self.mode = match self.mode {
            Mode::Editing => Mode::TextEditing,
            Mode::TextEditing => Mode::Editing,
        };
    }

    // ========================================================================
    // Persistence boundaries
    // ========================================================================

    /// Replace the working project with a loaded one
    ///
    /// Selection, history, and the dirty flag are reset; editing starts
    /// on the home page.
    pub fn load_project(&mut self, saved: SavedProject) {
        let name = saved.name.clone();
        self.project = saved.into_project();
        self.active_page = self.project.home_page().id;
        self.selection = None;
        self.mode = Mode::Editing;
        self.dirty = false;
        self.history.clear();
        self.set_status(StatusLevel::Info, format!("Loaded '{}'", name));
    }

    /// Save the working project under a name
    ///
    /// A storage failure is surfaced as a warning and never rolls back
    /// or corrupts the working state.
    pub fn save(&mut self, name: &str, store: &mut dyn ProjectStore) -> Option<SavedProject> {
        match store.save(name, &self.project) {
            Ok(saved) => {
                self.project.name = saved.name.clone();
                self.dirty = false;
                self.set_status(StatusLevel::Success, format!("Saved '{}'", name));
                Some(saved)
            }
            Err(e) => {
                tracing::warn!(project = %name, error = %e, "save failed");
                self.set_status(
                    StatusLevel::Warning,
                    format!("Could not save '{}': {}", name, e),
                );
                None
            }
        }
    }

    // ========================================================================
    // Undo / Redo
    // ========================================================================

    /// Undo the last mutation
    pub fn undo(&mut self) -> bool {
        let Ok(current) = HistorySnapshot::new("current", &self.project) else {
            return false;
        };
        if let Some(previous) = self.history.undo(current) {
            if let Ok(restored) = previous.restore() {
                self.replace_project(restored);
                return true;
            }
        }
        false
    }

    /// Redo the last undone mutation
    pub fn redo(&mut self) -> bool {
        let Ok(current) = HistorySnapshot::new("current", &self.project) else {
            return false;
        };
        if let Some(next) = self.history.redo(current) {
            if let Ok(restored) = next.restore() {
                self.replace_project(restored);
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Generate the active page's code and hand it to the clipboard
    ///
    /// A clipboard failure is reported as a warning; the generated text
    /// is returned either way so it is never lost.
    pub fn export_page(&mut self, registry: &Registry, clipboard: &mut dyn Clipboard) -> String {
        let ctx = GenerationContext::new(registry, GeneratorConfig::default());
        let source = generate_page(&ctx, self.active_page());

        match clipboard.write(&source) {
            Ok(()) => self.set_status(StatusLevel::Success, "Code copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.set_status(
                    StatusLevel::Warning,
                    format!("Copy failed ({}); the code is still shown below", e),
                );
            }
        }

        source
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn active_page_mut(&mut self) -> &mut pagecraft_model::Page {
        // The active page id always tracks an existing page; repair to
        // home if it ever goes stale.
        let index = self.project.page_index(self.active_page).unwrap_or(0);
        self.active_page = self.project.pages[index].id;
        &mut self.project.pages[index]
    }

    fn push_history(&mut self, action: &str) {
        if let Ok(snapshot) = HistorySnapshot::new(action, &self.project) {
            self.history.push(snapshot);
        }
    }

    fn replace_project(&mut self, project: Project) {
        self.project = project;
        if self.project.page(self.active_page).is_none() {
            self.active_page = self.project.home_page().id;
        }
        self.selection = None;
        self.dirty = true;
    }

    fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
