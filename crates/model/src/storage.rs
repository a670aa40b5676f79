//! Project persistence
//!
//! Projects are saved as JSON under their name in a string-keyed store.
//! The wire format uses camelCase keys, tolerates missing optional
//! fields, ignores unknown fields, and carries a schema version so old
//! files can be migrated on read. Reads fail soft: a malformed or
//! future-versioned entry is reported as absent, never as a crash.

use crate::page::Page;
use crate::project::Project;
use chrono::{DateTime, Utc};
use pagecraft_core::{BuilderError, BuilderResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ============================================================================
// Constants
// ============================================================================

/// Current schema version for saved projects
pub const SCHEMA_VERSION: u32 = 1;

/// File extension for stored projects
pub const PROJECT_EXTENSION: &str = "json";

// ============================================================================
// SavedProject
// ============================================================================

/// A persisted snapshot of a project
///
/// This is the wire format: `{ name, savedAt, schemaVersion, pages }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProject {
    /// Project name; unique key within the store
    pub name: String,

    /// Save timestamp (ISO-8601)
    pub saved_at: DateTime<Utc>,

    /// Schema version for migration purposes
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// The saved pages
    #[serde(default)]
    pub pages: Vec<Page>,
}

fn default_schema_version() -> u32 {
    1
}

impl SavedProject {
    /// Snapshot a working project under the given save name
    pub fn from_project(name: impl Into<String>, project: &Project) -> Self {
        Self {
            name: name.into(),
            saved_at: Utc::now(),
            schema_version: SCHEMA_VERSION,
            pages: project.pages.clone(),
        }
    }

    /// Rebuild a working project from this snapshot
    pub fn into_project(self) -> Project {
        Project::from_pages(self.name, self.pages)
    }

    /// Total number of placed components across all pages
    pub fn component_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    /// Check if migration is needed
    pub fn needs_migration(&self) -> bool {
        self.schema_version < SCHEMA_VERSION
    }

    /// Migrate to the latest schema version
    ///
    /// Fails if the entry was written by a newer build than this one.
    pub fn migrate(&mut self) -> BuilderResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(BuilderError::UnsupportedSchemaVersion {
                found: self.schema_version,
                supported: SCHEMA_VERSION,
            });
        }
        while self.schema_version < SCHEMA_VERSION {
            self.migrate_one_version()?;
        }
        Ok(())
    }

    /// Migrate one version at a time
    fn migrate_one_version(&mut self) -> BuilderResult<()> {
        match self.schema_version {
            // Add migration logic for each version here
            _ => {
                self.schema_version = SCHEMA_VERSION;
            }
        }
        Ok(())
    }

    /// Parse a stored JSON string, migrating if needed
    pub fn from_json(json: &str) -> BuilderResult<SavedProject> {
        let mut saved: SavedProject = serde_json::from_str(json)?;
        saved.migrate()?;
        Ok(saved)
    }

    /// Serialize to the stored JSON representation
    pub fn to_json(&self) -> BuilderResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

// ============================================================================
// Storage Keys
// ============================================================================

/// Derive the storage key for a project name
///
/// Characters outside `[A-Za-z0-9_-]` map to `_`, and the result is
/// lowercased, so every project name yields a safe file name. Distinct
/// names can collide after sanitization; the last write wins, matching
/// the store's overwrite semantics.
pub fn storage_key(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    safe.to_lowercase()
}

// ============================================================================
// ProjectStore Trait
// ============================================================================

/// String-keyed persistence for saved projects
///
/// All operations are synchronous. `load` and `delete` signal a missing
/// entry through their return value rather than an error, so callers can
/// branch on not-found without exception handling.
pub trait ProjectStore {
    /// All saved projects, ordered by storage key
    fn list(&self) -> Vec<SavedProject>;

    /// Save a project under `name`, overwriting any existing entry
    fn save(&mut self, name: &str, project: &Project) -> BuilderResult<SavedProject>;

    /// Load a saved project; absent or unreadable entries yield `None`
    fn load(&self, name: &str) -> Option<SavedProject>;

    /// Delete a saved project; returns false if it did not exist
    fn delete(&mut self, name: &str) -> bool;
}

// ============================================================================
// FileStore
// ============================================================================

/// Project store backed by a flat directory of JSON files
///
/// Each project is one file named `<storage_key>.json` under the root.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the stored projects
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", storage_key(name), PROJECT_EXTENSION))
    }

    fn read_entry(&self, path: &Path) -> Option<SavedProject> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable project entry");
                return None;
            }
        };

        match SavedProject::from_json(&json) {
            Ok(saved) => Some(saved),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed project entry");
                None
            }
        }
    }
}

impl ProjectStore for FileStore {
    fn list(&self) -> Vec<SavedProject> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext == PROJECT_EXTENSION)
            })
            .collect();
        paths.sort();

        paths
            .iter()
            .filter_map(|p| self.read_entry(p))
            .collect()
    }

    fn save(&mut self, name: &str, project: &Project) -> BuilderResult<SavedProject> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| BuilderError::storage(e.to_string()))?;

        let saved = SavedProject::from_project(name, project);
        let json = saved.to_json()?;
        let path = self.path_for(name);

        std::fs::write(&path, json).map_err(|e| BuilderError::StoreWrite {
            key: name.to_string(),
            message: e.to_string(),
        })?;

        tracing::info!(project = %name, path = %path.display(), "project saved");
        Ok(saved)
    }

    fn load(&self, name: &str) -> Option<SavedProject> {
        self.read_entry(&self.path_for(name))
    }

    fn delete(&mut self, name: &str) -> bool {
        let path = self.path_for(name);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(project = %name, "project deleted");
                true
            }
            Err(_) => false,
        }
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory project store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, SavedProject>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProjectStore for MemoryStore {
    fn list(&self) -> Vec<SavedProject> {
        self.entries.values().cloned().collect()
    }

    fn save(&mut self, name: &str, project: &Project) -> BuilderResult<SavedProject> {
        let saved = SavedProject::from_project(name, project);
        self.entries.insert(storage_key(name), saved.clone());
        Ok(saved)
    }

    fn load(&self, name: &str) -> Option<SavedProject> {
        self.entries.get(&storage_key(name)).cloned()
    }

    fn delete(&mut self, name: &str) -> bool {
        self.entries.remove(&storage_key(name)).is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::PlacedComponent;
    use tempfile::TempDir;

    fn demo_project() -> Project {
        let mut project = Project::new("Demo");
        let home_id = project.home_page().id;
        let page = project.page_mut(home_id).unwrap();
        page.push(PlacedComponent::new("shimmer-button").with_prop("label", "Try it"));
        page.push(PlacedComponent::new("marquee"));
        project
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key("My Project"), "my_project");
        assert_eq!(storage_key("Test!@#"), "test___");
        assert_eq!(storage_key("simple-name_1"), "simple-name_1");
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("projects"));
        let project = demo_project();

        let saved = store.save("demo", &project).unwrap();
        assert_eq!(saved.name, "demo");
        assert_eq!(saved.schema_version, SCHEMA_VERSION);

        let loaded = store.load("demo").unwrap();
        assert_eq!(loaded.pages, project.pages);
        assert_eq!(loaded.component_count(), 2);
    }

    #[test]
    fn test_file_store_overwrites_same_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        store.save("demo", &demo_project()).unwrap();
        store.save("demo", &Project::new("Demo v2")).unwrap();

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.load("demo").unwrap().component_count(), 0);
    }

    #[test]
    fn test_file_store_load_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert!(store.load("ghost").is_none());
    }

    #[test]
    fn test_file_store_malformed_entry_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        store.save("good", &demo_project()).unwrap();

        std::fs::write(temp_dir.path().join("bad.json"), "{ not json").unwrap();

        assert!(store.load("bad").is_none());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_file_store_future_schema_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        std::fs::write(
            temp_dir.path().join("future.json"),
            "{\"name\":\"future\",\"savedAt\":\"2026-01-01T00:00:00Z\",\"schemaVersion\":99,\"pages\":[]}",
        )
        .unwrap();

        assert!(store.load("future").is_none());
    }

    #[test]
    fn test_file_store_delete() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        store.save("demo", &demo_project()).unwrap();

        assert!(store.delete("demo"));
        assert!(store.load("demo").is_none());
        assert!(!store.delete("demo"));
    }

    #[test]
    fn test_file_store_list_is_key_ordered() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());
        store.save("Zeta", &Project::new("Zeta")).unwrap();
        store.save("alpha", &Project::new("alpha")).unwrap();

        let names: Vec<String> = store.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "Zeta"]);
    }

    #[test]
    fn test_save_failure_leaves_project_intact() {
        // A file where the store root should be makes every save fail.
        let temp_dir = TempDir::new().unwrap();
        let blocked = temp_dir.path().join("blocked");
        std::fs::write(&blocked, "not a directory").unwrap();

        let mut store = FileStore::new(blocked.join("projects"));
        let project = demo_project();
        let before = project.clone();

        let err = store.save("demo", &project).unwrap_err();
        assert!(err.is_storage());
        assert_eq!(project, before);
    }

    #[test]
    fn test_wire_format_tolerates_missing_optional_fields() {
        let json = "{\"name\":\"legacy\",\"savedAt\":\"2025-06-01T12:00:00Z\"}";
        let saved = SavedProject::from_json(json).unwrap();
        assert_eq!(saved.name, "legacy");
        assert_eq!(saved.schema_version, SCHEMA_VERSION);
        assert!(saved.pages.is_empty());

        // Rebuilding repairs the page invariant
        let project = saved.into_project();
        assert_eq!(project.page_count(), 1);
    }

    #[test]
    fn test_old_schema_is_migrated_on_read() {
        let json = "{\"name\":\"old\",\"savedAt\":\"2025-06-01T12:00:00Z\",\"schemaVersion\":0,\"pages\":[]}";
        let mut saved: SavedProject = serde_json::from_str(json).unwrap();
        assert!(saved.needs_migration());

        saved.migrate().unwrap();
        assert!(!saved.needs_migration());
        assert_eq!(saved.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn test_wire_format_ignores_unknown_fields() {
        let json = "{\"name\":\"forward\",\"savedAt\":\"2025-06-01T12:00:00Z\",\"theme\":\"dark\",\"pages\":[]}";
        let saved = SavedProject::from_json(json).unwrap();
        assert_eq!(saved.name, "forward");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let project = demo_project();

        store.save("demo", &project).unwrap();
        let loaded = store.load("demo").unwrap();
        assert_eq!(loaded.pages, project.pages);

        assert!(store.delete("demo"));
        assert!(store.load("demo").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_list_order() {
        let mut store = MemoryStore::new();
        store.save("beta", &Project::new("beta")).unwrap();
        store.save("Alpha", &Project::new("Alpha")).unwrap();

        let names: Vec<String> = store.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Alpha", "beta"]);
    }
}
