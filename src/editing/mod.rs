/// Editing subsystem - the edit engine
///
/// Every operation here is a pure transform over an [`EditorState`]
/// snapshot: it takes `&self` and returns the next snapshot, leaving the
/// input untouched. An operation whose precondition does not hold returns an
/// unchanged copy instead of failing.

pub mod history;
pub mod movement;
pub mod paste;
pub mod range;
pub mod text;

pub use history::History;
pub use movement::Motion;
pub use paste::sanitize_paste_text;

use crate::document_model::text::char_len;
use crate::document_model::{Caret, Document, Line, LineId, Position, Selection};

#[derive(Debug, Clone)]
pub struct EditorState {
    pub document: Document,
    pub caret: Caret,
    pub selection: Option<Selection>,
    /// The line the last operation split off with Enter. Its leading
    /// whitespace came from the middle of the line above, so Backspace at its
    /// start joins it back whole instead of removing an indent level.
    pub split_line: Option<LineId>,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            caret: Caret::default(),
            selection: None,
            split_line: None,
        }
    }

    pub fn with_caret(mut self, caret: Caret) -> Self {
        self.caret = caret;
        self
    }

    pub fn with_selection(mut self, selection: Option<Selection>) -> Self {
        self.selection = selection;
        self
    }

    pub fn current_line(&self) -> &Line {
        self.document.line_clamped(self.caret.line)
    }

    /// Caret moved back inside the document.
    pub fn clamped_caret(&self) -> Caret {
        let line = self.caret.line.min(self.document.last_index());
        let len = self.document.line_clamped(line).content_len();
        Caret {
            line,
            start: self.caret.start.min(len),
            end: self.caret.end.min(len),
        }
    }

    pub fn caret_position(&self) -> Position {
        self.clamped_caret().head()
    }

    /// The selection, if it covers anything.
    pub fn active_selection(&self) -> Option<Selection> {
        self.selection
            .filter(|selection| !selection.is_empty())
            .map(|selection| Selection::normalize(selection.start(), selection.end()))
    }

    /// Drop the selection, deleting its text when it covers anything.
    pub(crate) fn without_selection(&self) -> EditorState {
        if self.active_selection().is_some() {
            self.delete_selection()
        } else {
            EditorState {
                document: self.document.clone(),
                caret: self.clamped_caret(),
                selection: None,
                split_line: None,
            }
        }
    }

    /// Replace line `index` and put a collapsed caret `from_end` chars before
    /// the end of its content. Measuring from the end keeps the caret on the
    /// same character when leading whitespace moved into the indentation.
    pub(crate) fn rewrite_line(&self, index: usize, line: Line, from_end: usize) -> EditorState {
        let column = line.content_len().saturating_sub(from_end);
        EditorState {
            document: self.document.replace(index, line),
            caret: Caret::at(index, column),
            selection: None,
            split_line: None,
        }
    }

    pub(crate) fn content_len(&self, index: usize) -> usize {
        char_len(self.document.line_clamped(index).content())
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Document::new())
    }
}
