//! Undo/redo history
//!
//! History is a pair of snapshot stacks. A snapshot is the serialized
//! working project, taken before each mutation; undo swaps the current
//! state with the top of the past stack, redo with the future stack.

use pagecraft_core::{BuilderError, BuilderResult};
use pagecraft_model::Project;

// ============================================================================
// HistorySnapshot
// ============================================================================

/// A snapshot of the working project for history
#[derive(Debug, Clone)]
pub struct HistorySnapshot {
    /// Description of the action that followed this snapshot
    pub action: String,

    /// Serialized project state
    project_json: String,
}

impl HistorySnapshot {
    /// Snapshot a project before an action
    pub fn new(action: impl Into<String>, project: &Project) -> BuilderResult<Self> {
        let project_json = serde_json::to_string(project)
            .map_err(|e| BuilderError::internal(format!("Failed to serialize project: {}", e)))?;

        Ok(Self {
            action: action.into(),
            project_json,
        })
    }

    /// Restore the project captured by this snapshot
    pub fn restore(&self) -> BuilderResult<Project> {
        serde_json::from_str(&self.project_json)
            .map_err(|e| BuilderError::internal(format!("Failed to deserialize project: {}", e)))
    }
}

// ============================================================================
// History
// ============================================================================

/// History state for undo/redo operations
#[derive(Debug, Clone)]
pub struct History {
    /// Past states (for undo)
    past: Vec<HistorySnapshot>,

    /// Future states (for redo)
    future: Vec<HistorySnapshot>,

    /// Maximum history size
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_size: 50,
        }
    }
}

impl History {
    /// Create new history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create history with custom max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Default::default()
        }
    }

    /// Push a new snapshot (clears the redo stack)
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        self.past.push(snapshot);
        self.future.clear();

        if self.past.len() > self.max_size {
            self.past.remove(0);
        }
    }

    /// Undo: pop from past, push current to future
    pub fn undo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        if let Some(previous) = self.past.pop() {
            self.future.push(current);
            Some(previous)
        } else {
            None
        }
    }

    /// Redo: pop from future, push current to past
    pub fn redo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        if let Some(next) = self.future.pop() {
            self.past.push(current);
            Some(next)
        } else {
            None
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Get undo stack size
    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    /// Get redo stack size
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let project = Project::new("History Test");
        let snapshot = HistorySnapshot::new("create", &project).unwrap();

        let restored = snapshot.restore().unwrap();
        assert_eq!(restored.name, "History Test");
        assert_eq!(restored.pages, project.pages);
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        let project = Project::new("v1");
        history.push(HistorySnapshot::new("edit", &project).unwrap());
        assert!(history.can_undo());

        let current = HistorySnapshot::new("current", &Project::new("v2")).unwrap();
        let previous = history.undo(current).unwrap();
        assert_eq!(previous.restore().unwrap().name, "v1");
        assert!(!history.can_undo());
        assert!(history.can_redo());

        let current = HistorySnapshot::new("current", &Project::new("v1")).unwrap();
        let next = history.redo(current).unwrap();
        assert_eq!(next.restore().unwrap().name, "v2");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_clears_redo_stack() {
        let mut history = History::new();
        history.push(HistorySnapshot::new("a", &Project::new("a")).unwrap());
        history
            .undo(HistorySnapshot::new("current", &Project::new("b")).unwrap())
            .unwrap();
        assert!(history.can_redo());

        history.push(HistorySnapshot::new("c", &Project::new("c")).unwrap());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::with_max_size(3);
        for i in 0..5 {
            let project = Project::new(format!("v{}", i));
            history.push(HistorySnapshot::new("edit", &project).unwrap());
        }
        assert_eq!(history.undo_count(), 3);
    }
}
