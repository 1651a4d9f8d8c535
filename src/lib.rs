//! Line-based structured text editing core for slide outlines.
//!
//! A document is an ordered list of lines. Each line may carry a block
//! attribute (heading level, list marker or layout marker) that is kept apart
//! from its text and written back as a leading token on save.

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod document_model;
pub mod editing;
pub mod view;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, NoClipboard, SystemClipboard};
pub use config::{EditorConfig, RcLoader};
pub use controller::{Command, Editor, KeyHandler, Outcome};
pub use document_model::{Attribute, Caret, Document, Line, LineId, Position, Selection};
pub use editing::{EditorState, History, Motion};
