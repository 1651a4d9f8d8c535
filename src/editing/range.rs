use super::EditorState;
use crate::document_model::text::{self, char_len};
use crate::document_model::{Caret, Position, Selection};
use log::debug;

const BOLD_MARKER: &str = "**";

impl EditorState {
    /// The range `toggle_bold`, copy and cut act on: the global selection,
    /// or the caret's in-line selection as a one-line range.
    pub fn effective_selection(&self) -> Option<Selection> {
        if let Some(selection) = self.active_selection() {
            return Some(selection);
        }
        let caret = self.clamped_caret();
        if caret.is_collapsed() {
            return None;
        }
        let range = caret.range();
        Some(Selection::normalize(
            Position::new(caret.line, range.start),
            Position::new(caret.line, range.end),
        ))
    }

    /// Global delete of the selection. The caret lands on the selection
    /// start and the selection is cleared.
    pub fn delete_selection(&self) -> EditorState {
        let Some(selection) = self.active_selection() else {
            return EditorState {
                document: self.document.clone(),
                caret: self.clamped_caret(),
                selection: None,
                split_line: None,
            };
        };

        let last = self.document.last_index();
        let start_line = selection.start_line.min(last);
        let end_line = selection.end_line.min(last);
        let first = self.document.line_clamped(start_line);
        let final_line = self.document.line_clamped(end_line);

        let start = selection
            .per_line_range(start_line, first.content_len())
            .map_or(0, |range| range.start);
        let end = selection
            .per_line_range(end_line, final_line.content_len())
            .map_or(final_line.content_len(), |range| range.end);

        let head = text::slice_chars(first.content(), 0, start);
        let tail = text::slice_chars(final_line.content(), end, final_line.content_len());
        let merged = first.with_text(format!("{}{head}{tail}", first.indent()));
        let from_end = char_len(tail);

        let document = self
            .document
            .splice(start_line..end_line + 1, std::iter::once(merged));
        if end_line > start_line {
            debug!("deleted lines {}..={end_line}", start_line + 1);
        }

        let column = document
            .line_clamped(start_line)
            .content_len()
            .saturating_sub(from_end);
        EditorState {
            document,
            caret: Caret::at(start_line, column),
            selection: None,
            split_line: None,
        }
    }

    /// Wrap every selected segment in `**`, or unwrap the ones already
    /// wrapped. Each line is judged on its own, so a mixed selection can end
    /// up with some lines wrapped and others unwrapped.
    pub fn toggle_bold(&self) -> EditorState {
        let Some(selection) = self.effective_selection() else {
            return self.clone();
        };

        let last = self.document.last_index();
        let start_line = selection.start_line.min(last);
        let end_line = selection.end_line.min(last);
        let mut document = self.document.clone();
        let mut end_char = selection.end_char;

        for index in start_line..=end_line {
            let line = self.document.line_clamped(index);
            let len = line.content_len();
            let Some(range) = selection.per_line_range(index, len) else {
                continue;
            };
            if range.is_empty() {
                continue;
            }

            let segment = text::slice_chars(line.content(), range.start, range.end);
            let toggled = toggle_bold_segment(segment, range.start == 0);
            let content = text::splice_chars(line.content(), range.start, range.end, &toggled);
            let updated = line.with_text(format!("{}{content}", line.indent()));

            if index == end_line {
                end_char = updated.content_len().saturating_sub(len - range.end);
            }
            document = document.replace(index, updated);
        }

        let selection = Selection {
            end_char,
            ..selection
        };
        let caret = if self.active_selection().is_some() {
            Caret::at(end_line, end_char)
        } else {
            Caret {
                line: end_line,
                start: selection.start_char,
                end: end_char,
            }
        };

        EditorState {
            document,
            caret,
            selection: self.active_selection().map(|_| selection),
            split_line: None,
        }
    }

    /// The text copy would place on the clipboard: each line's selected
    /// segment, joined by newlines. Attributes are never included.
    pub fn selected_text(&self) -> String {
        let Some(selection) = self.effective_selection() else {
            return String::new();
        };

        let last = self.document.last_index();
        (selection.start_line.min(last)..=selection.end_line.min(last))
            .filter_map(|index| {
                let line = self.document.line_clamped(index);
                selection
                    .per_line_range(index, line.content_len())
                    .map(|range| text::slice_chars(line.content(), range.start, range.end))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Copy the selected text, then delete it.
    pub fn cut(&self) -> (EditorState, String) {
        let copied = self.selected_text();
        let next = if self.active_selection().is_some() {
            self.delete_selection()
        } else if !self.clamped_caret().is_collapsed() {
            self.delete_caret_range()
        } else {
            self.clone()
        };
        (next, copied)
    }

    pub fn select_all(&self) -> EditorState {
        let last = self.document.last_index();
        let end = Position::new(last, self.content_len(last));
        EditorState {
            document: self.document.clone(),
            caret: Caret::at(end.line, end.column),
            selection: Some(Selection::normalize(Position::default(), end)),
            split_line: None,
        }
    }
}

fn is_bold(segment: &str) -> bool {
    char_len(segment) >= 2 * BOLD_MARKER.len()
        && segment.starts_with(BOLD_MARKER)
        && segment.ends_with(BOLD_MARKER)
}

/// Unwrap a bold segment or wrap a plain one. At the start of the content an
/// unwrap that would leave leading whitespace is not taken, since that
/// whitespace would become indentation; the segment is wrapped again instead
/// and a second toggle restores it.
fn toggle_bold_segment(segment: &str, at_content_start: bool) -> String {
    if is_bold(segment) {
        let inner = &segment[BOLD_MARKER.len()..segment.len() - BOLD_MARKER.len()];
        if !at_content_start || text::leading_whitespace(inner).is_empty() {
            return inner.to_string();
        }
    }
    format!("{BOLD_MARKER}{segment}{BOLD_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_model::{Attribute, Document, Line};

    fn state(texts: &[&str]) -> EditorState {
        EditorState::new(Document::from_lines(
            texts.iter().map(|t| Line::new(None, *t)).collect(),
        ))
    }

    fn select(state: EditorState, a: (usize, usize), b: (usize, usize)) -> EditorState {
        state.with_selection(Some(Selection::normalize(
            Position::new(a.0, a.1),
            Position::new(b.0, b.1),
        )))
    }

    #[test]
    fn test_delete_selection_across_two_lines() {
        let deleted = select(state(&["abc", "def"]), (0, 1), (1, 1)).delete_selection();
        assert_eq!(deleted.document.entries(), vec![(None, "aef")]);
        assert_eq!(deleted.caret, Caret::at(0, 1));
        assert!(deleted.selection.is_none());
    }

    #[test]
    fn test_delete_selection_removes_interior_lines() {
        let deleted = select(state(&["one", "two", "three", "four"]), (0, 2), (2, 3)).delete_selection();
        assert_eq!(deleted.document.entries(), vec![(None, "onee"), (None, "four")]);
        assert_eq!(deleted.caret, Caret::at(0, 2));
    }

    #[test]
    fn test_delete_selection_single_line() {
        let deleted = select(state(&["abcdef"]), (0, 4), (0, 1)).delete_selection();
        assert_eq!(deleted.document.entries(), vec![(None, "aef")]);
        assert_eq!(deleted.caret, Caret::at(0, 1));
    }

    #[test]
    fn test_delete_selection_keeps_first_line_attribute_and_indent() {
        let document = Document::from_lines(vec![
            Line::new(Some(Attribute::Bullet), "\tfirst"),
            Line::new(Some(Attribute::Heading(1)), "second"),
        ]);
        let deleted = select(EditorState::new(document), (0, 2), (1, 3)).delete_selection();
        assert_eq!(deleted.document.entries(), vec![(Some(Attribute::Bullet), "\tfiond")]);
    }

    #[test]
    fn test_delete_everything_leaves_one_empty_line() {
        let all = state(&["abc", "def"]).select_all();
        let deleted = all.delete_selection();
        assert_eq!(deleted.document.entries(), vec![(None, "")]);
        assert_eq!(deleted.caret, Caret::at(0, 0));
    }

    #[test]
    fn test_bold_toggle_twice_restores_text() {
        let selected = select(state(&["say hello"]), (0, 4), (0, 9));
        let bold = selected.toggle_bold();
        assert_eq!(bold.document.entries(), vec![(None, "say **hello**")]);
        assert_eq!(bold.selection.map(|s| s.end_char), Some(13));

        let plain = bold.toggle_bold();
        assert_eq!(plain.document.entries(), vec![(None, "say hello")]);
        assert_eq!(plain.selection, selected.selection);
    }

    #[test]
    fn test_bold_toggle_twice_restores_whitespace_segments() {
        let cases = [
            ("** x**", (0, 0), (0, 6)),
            ("**x **", (0, 0), (0, 6)),
            ("say ** hi **", (0, 4), (0, 12)),
            ("a  b", (0, 1), (0, 3)),
            (" lead", (0, 0), (0, 4)),
            ("**\tx**y", (0, 0), (0, 6)),
        ];
        for (text, a, b) in cases {
            let selected = select(state(&[text]), a, b);
            let twice = selected.toggle_bold().toggle_bold();
            assert_eq!(twice.document.entries(), selected.document.entries(), "{text:?}");
            assert_eq!(twice.selection, selected.selection, "{text:?}");
        }
    }

    #[test]
    fn test_bold_unwrap_at_line_start_keeps_whitespace_as_content() {
        let selected = select(state(&["** x**"]), (0, 0), (0, 6));
        let toggled = selected.toggle_bold();
        assert_eq!(toggled.document.entries(), vec![(None, "**** x****")]);
        assert_eq!(toggled.selection.map(|s| s.end_char), Some(10));

        let inner = select(state(&["a ** x**"]), (0, 2), (0, 8)).toggle_bold();
        assert_eq!(inner.document.entries(), vec![(None, "a  x")]);
        assert_eq!(inner.selection.map(|s| s.end_char), Some(4));
    }

    #[test]
    fn test_bold_toggle_on_caret_range() {
        let caret = Caret {
            line: 0,
            start: 0,
            end: 5,
        };
        let bold = state(&["hello"]).with_caret(caret).toggle_bold();
        assert_eq!(bold.document.entries(), vec![(None, "**hello**")]);
        assert_eq!(bold.caret.range(), 0..9);
        assert!(bold.selection.is_none());
    }

    #[test]
    fn test_bold_toggle_multi_line_judges_each_line() {
        let selected = select(state(&["ab**cd**", "**ef**", "gh"]), (0, 2), (2, 1));
        let toggled = selected.toggle_bold();
        assert_eq!(
            toggled.document.entries(),
            vec![(None, "abcd"), (None, "ef"), (None, "**g**h")]
        );
        assert_eq!(toggled.selection.map(|s| (s.start_char, s.end_char)), Some((2, 5)));
    }

    #[test]
    fn test_bold_toggle_skips_empty_segments() {
        let selected = select(state(&["abc", "", "de"]), (0, 3), (2, 2));
        let toggled = selected.toggle_bold();
        assert_eq!(
            toggled.document.entries(),
            vec![(None, "abc"), (None, ""), (None, "**de**")]
        );
    }

    #[test]
    fn test_bold_without_selection_is_noop() {
        let start = state(&["abc"]);
        assert!(start.toggle_bold().document.is_same_snapshot(&start.document));
    }

    #[test]
    fn test_selected_text_joins_segments() {
        let document = Document::from_lines(vec![
            Line::new(Some(Attribute::Heading(1)), "Title"),
            Line::new(Some(Attribute::Bullet), "\titem"),
            Line::new(None, "tail"),
        ]);
        let selected = select(EditorState::new(document), (0, 2), (2, 2));
        assert_eq!(selected.selected_text(), "tle\nitem\nta");
    }

    #[test]
    fn test_cut_returns_text_and_deletes() {
        let (next, copied) = select(state(&["abc", "def"]), (0, 1), (1, 2)).cut();
        assert_eq!(copied, "bc\nde");
        assert_eq!(next.document.entries(), vec![(None, "af")]);
    }

    #[test]
    fn test_cut_without_selection_is_empty() {
        let start = state(&["abc"]);
        let (next, copied) = start.cut();
        assert!(copied.is_empty());
        assert!(next.document.is_same_snapshot(&start.document));
    }

    #[test]
    fn test_select_all_spans_document() {
        let all = state(&["abc", "\tdefg"]).select_all();
        assert_eq!(
            all.selection,
            Some(Selection {
                start_line: 0,
                start_char: 0,
                end_line: 1,
                end_char: 4,
            })
        );
        assert_eq!(all.selected_text(), "abc\ndefg");
    }
}
