use super::EditorState;
use crate::document_model::{Caret, Position, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

impl EditorState {
    fn step(&self, from: Position, motion: Motion) -> Position {
        let last = self.document.last_index();
        let len = self.content_len(from.line);
        match motion {
            Motion::Left if from.column > 0 => Position::new(from.line, from.column - 1),
            Motion::Left if from.line > 0 => {
                Position::new(from.line - 1, self.content_len(from.line - 1))
            }
            Motion::Right if from.column < len => Position::new(from.line, from.column + 1),
            Motion::Right if from.line < last => Position::new(from.line + 1, 0),
            Motion::Up if from.line > 0 => Position::new(
                from.line - 1,
                from.column.min(self.content_len(from.line - 1)),
            ),
            Motion::Up => Position::new(0, 0),
            Motion::Down if from.line < last => Position::new(
                from.line + 1,
                from.column.min(self.content_len(from.line + 1)),
            ),
            Motion::Down => Position::new(last, self.content_len(last)),
            Motion::LineStart => Position::new(from.line, 0),
            Motion::LineEnd => Position::new(from.line, len),
            Motion::Left | Motion::Right => from,
        }
    }

    /// Move the caret and drop any selection. Left and Right collapse an
    /// existing selection onto its start or end instead of moving.
    pub fn move_caret(&self, motion: Motion) -> EditorState {
        let caret = self.clamped_caret();
        let collapsed_to = match (motion, self.active_selection()) {
            (Motion::Left, Some(selection)) => Some(selection.start()),
            (Motion::Right, Some(selection)) => Some(selection.end()),
            (Motion::Left, None) if !caret.is_collapsed() => {
                Some(Position::new(caret.line, caret.range().start))
            }
            (Motion::Right, None) if !caret.is_collapsed() => {
                Some(Position::new(caret.line, caret.range().end))
            }
            _ => None,
        };
        let target = collapsed_to.unwrap_or_else(|| self.step(caret.head(), motion));
        self.set_caret(target)
    }

    /// Shift+movement: move the head of the selection, keeping its anchor.
    pub fn extend_selection(&self, motion: Motion) -> EditorState {
        let head = self.caret_position();
        let anchor = match self.active_selection() {
            Some(selection) if selection.start() == head => selection.end(),
            Some(selection) => selection.start(),
            None => {
                let caret = self.clamped_caret();
                Position::new(caret.line, caret.start)
            }
        };
        let target = self.step(head, motion);
        self.select(anchor, target)
    }

    /// Place a collapsed caret, clamped into the document.
    pub fn set_caret(&self, position: Position) -> EditorState {
        let clamped = self.clamp_position(position);
        EditorState {
            document: self.document.clone(),
            caret: Caret::at(clamped.line, clamped.column),
            selection: None,
            split_line: None,
        }
    }

    /// Select from `anchor` to `head`; the caret sits at `head`.
    pub fn select(&self, anchor: Position, head: Position) -> EditorState {
        let anchor = self.clamp_position(anchor);
        let head = self.clamp_position(head);
        EditorState {
            document: self.document.clone(),
            caret: Caret::at(head.line, head.column),
            selection: Some(Selection::normalize(anchor, head)),
            split_line: None,
        }
    }

    pub fn clamp_position(&self, position: Position) -> Position {
        let line = position.line.min(self.document.last_index());
        Position::new(line, position.column.min(self.content_len(line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_model::{Document, Line};

    fn state(texts: &[&str], line: usize, column: usize) -> EditorState {
        EditorState::new(Document::from_lines(
            texts.iter().map(|t| Line::new(None, *t)).collect(),
        ))
        .with_caret(Caret::at(line, column))
    }

    #[test]
    fn test_left_right_wrap_lines() {
        let start = state(&["ab", "\tcd"], 1, 0);
        assert_eq!(start.move_caret(Motion::Left).caret, Caret::at(0, 2));
        let end = state(&["ab", "cd"], 0, 2);
        assert_eq!(end.move_caret(Motion::Right).caret, Caret::at(1, 0));
        let stuck = state(&["ab"], 0, 2);
        assert_eq!(stuck.move_caret(Motion::Right).caret, Caret::at(0, 2));
    }

    #[test]
    fn test_up_down_clamp_column() {
        let start = state(&["long line", "ab", "longer line"], 0, 7);
        let down = start.move_caret(Motion::Down);
        assert_eq!(down.caret, Caret::at(1, 2));
        assert_eq!(down.move_caret(Motion::Down).caret, Caret::at(2, 2));
        assert_eq!(start.move_caret(Motion::Up).caret, Caret::at(0, 0));
    }

    #[test]
    fn test_line_start_and_end() {
        let start = state(&["\thello"], 0, 2);
        assert_eq!(start.move_caret(Motion::LineEnd).caret, Caret::at(0, 5));
        assert_eq!(start.move_caret(Motion::LineStart).caret, Caret::at(0, 0));
    }

    #[test]
    fn test_extend_selection_keeps_anchor() {
        let start = state(&["abc", "def"], 0, 1);
        let extended = start
            .extend_selection(Motion::Right)
            .extend_selection(Motion::Down);
        assert_eq!(
            extended.selection,
            Some(Selection::normalize(Position::new(0, 1), Position::new(1, 2)))
        );
        assert_eq!(extended.caret, Caret::at(1, 2));
    }

    #[test]
    fn test_extend_selection_backwards_is_normalized() {
        let start = state(&["abc", "def"], 1, 1);
        let extended = start
            .extend_selection(Motion::Up)
            .extend_selection(Motion::Left);
        let selection = extended.selection.unwrap();
        assert_eq!(selection.start(), Position::new(0, 0));
        assert_eq!(selection.end(), Position::new(1, 1));

        let shrunk = extended.extend_selection(Motion::Right);
        assert_eq!(shrunk.selection.unwrap().start(), Position::new(0, 1));
    }

    #[test]
    fn test_move_collapses_selection() {
        let selected = state(&["abc", "def"], 0, 0).select(Position::new(0, 1), Position::new(1, 2));
        let left = selected.move_caret(Motion::Left);
        assert_eq!(left.caret, Caret::at(0, 1));
        assert!(left.selection.is_none());
        assert_eq!(selected.move_caret(Motion::Right).caret, Caret::at(1, 2));
    }

    #[test]
    fn test_set_caret_clamps() {
        let state = state(&["abc"], 0, 0).set_caret(Position::new(9, 9));
        assert_eq!(state.caret, Caret::at(0, 3));
    }
}
