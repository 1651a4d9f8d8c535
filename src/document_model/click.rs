use super::document::Document;
use super::selection::{Position, Selection, find_word_boundaries};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Place the caret, dropping any selection.
    Caret(Position),
    /// Double click: the word under the pointer.
    Word(Selection),
    /// Triple click: the whole line.
    Line(Selection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickKind {
    Single,
    Double,
    Triple,
}

#[derive(Debug, Clone, Copy)]
struct LastClick {
    line: usize,
    at: Instant,
    kind: ClickKind,
    word: Option<Selection>,
}

/// Multi-click state, owned by whoever routes pointer input.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    threshold: Duration,
    last: Option<LastClick>,
}

impl ClickTracker {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Classify a click at `position` and remember it.
    ///
    /// A second click on the same line within the threshold selects the word.
    /// A third one escalates to the whole line only while `selection` is still
    /// the word the double click produced, that word starts at column 0, and
    /// it does not already span the line.
    pub fn register(
        &mut self,
        position: Position,
        document: &Document,
        selection: Option<&Selection>,
        at: Instant,
    ) -> ClickOutcome {
        let line_index = position.line.min(document.last_index());
        let content = document.line(line_index).map_or("", |line| line.content());
        let line_len = content.chars().count();
        let column = position.column.min(line_len);

        let recent = self.last.filter(|last| {
            last.line == line_index && at.saturating_duration_since(last.at) <= self.threshold
        });

        let (outcome, kind, word) = match recent {
            Some(last) if last.kind == ClickKind::Double && Self::escalates(&last, selection, line_len) => {
                let whole = Selection::normalize(
                    Position::new(line_index, 0),
                    Position::new(line_index, line_len),
                );
                (ClickOutcome::Line(whole), ClickKind::Triple, None)
            }
            Some(last) if last.kind == ClickKind::Single => {
                let range = find_word_boundaries(content, column);
                let word = Selection::normalize(
                    Position::new(line_index, range.start),
                    Position::new(line_index, range.end),
                );
                (ClickOutcome::Word(word), ClickKind::Double, Some(word))
            }
            _ => (
                ClickOutcome::Caret(Position::new(line_index, column)),
                ClickKind::Single,
                None,
            ),
        };

        self.last = Some(LastClick {
            line: line_index,
            at,
            kind,
            word,
        });
        outcome
    }

    fn escalates(last: &LastClick, selection: Option<&Selection>, line_len: usize) -> bool {
        match (last.word, selection) {
            (Some(word), Some(current)) => {
                word == *current && word.start_char == 0 && word.end_char < line_len
            }
            _ => false,
        }
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}
