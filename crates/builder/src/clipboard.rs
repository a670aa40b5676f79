//! Clipboard boundary
//!
//! Exported code is handed to a `Clipboard` collaborator. The engine
//! never depends on a real platform clipboard; the UI layer supplies
//! one, and a failed write is reported without losing the generated
//! text.

use pagecraft_core::{BuilderError, BuilderResult};

// ============================================================================
// Clipboard Trait
// ============================================================================

/// Receives generated code on export
pub trait Clipboard {
    /// Write text to the clipboard
    fn write(&mut self, text: &str) -> BuilderResult<()>;
}

// ============================================================================
// MemoryClipboard
// ============================================================================

/// Clipboard that keeps the last written text in memory
///
/// Used in tests and headless sessions where no platform clipboard
/// exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// The last written text, if any
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> BuilderResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

// ============================================================================
// UnavailableClipboard
// ============================================================================

/// Clipboard that always fails
///
/// Stands in when the platform clipboard cannot be reached, so callers
/// exercise the failure path deterministically.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write(&mut self, _text: &str) -> BuilderResult<()> {
        Err(BuilderError::with_context(
            "Clipboard",
            "no clipboard available in this session",
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
