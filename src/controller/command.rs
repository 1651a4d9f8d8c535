use crate::document_model::Position;
use crate::editing::Motion;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Text input
    InsertChar(char),
    InsertText(String),
    Enter,
    DeleteBackward,
    DeleteForward,

    // Tab / Shift+Tab
    Indent,
    Outdent,

    // Selection
    ToggleBold,
    SelectAll,

    // Clipboard
    Copy,
    Cut,
    Paste,

    // History
    Undo,
    Redo,

    // Caret
    Move(Motion),
    Extend(Motion),
    Click { position: Position, at: Instant },
}
