//! # Pagecraft Builder
//!
//! State management for the page builder canvas.
//!
//! `BuilderState` owns the working project exclusively and exposes every
//! canvas operation as a synchronous method: placing, reordering, and
//! removing components, page management, prop editing, selection, the
//! text-editing overlay, undo/redo, and the save/load and clipboard
//! export boundaries.
//!
//! The visual layer binds pointer events to these methods; nothing in
//! this crate renders.

// Module declarations
pub mod clipboard;
pub mod history;
pub mod state;

// Re-export commonly used types at crate root
pub use clipboard::{Clipboard, MemoryClipboard, UnavailableClipboard};
pub use history::{History, HistorySnapshot};
pub use state::{BuilderState, Mode, StatusLevel, StatusMessage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
