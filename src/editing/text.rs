use super::EditorState;
use crate::config::EditorConfig;
use crate::document_model::attribute::{self, IndentDirection, toggle_indent_and_level};
use crate::document_model::text::{self, char_len, indent_level, pop_indent, push_indent};
use crate::document_model::{Attribute, AttributeChange, Caret, Line};
use log::debug;

impl EditorState {
    pub fn insert_char(&self, c: char) -> EditorState {
        let mut buffer = [0; 4];
        self.insert_text(c.encode_utf8(&mut buffer))
    }

    /// Type `text` at the caret, replacing any selected text. The line is
    /// re-decoded afterwards, so typing `# ` at the start turns it into a
    /// heading immediately.
    pub fn insert_text(&self, typed: &str) -> EditorState {
        if typed.contains(['\n', '\r']) {
            return self.paste_text(typed);
        }

        let base = self.without_selection();
        let caret = base.caret;
        let line = base.document.line_clamped(caret.line);
        let content = line.content();
        let range = caret.range();

        let new_content = text::splice_chars(content, range.start, range.end, typed);
        let from_end = char_len(content) - range.end;
        let updated = line
            .with_text(format!("{}{new_content}", line.indent()))
            .reparse();
        base.rewrite_line(caret.line, updated, from_end)
    }

    /// Backspace.
    pub fn delete_backward(&self, config: &EditorConfig) -> EditorState {
        if self.active_selection().is_some() {
            return self.delete_selection();
        }

        let caret = self.clamped_caret();
        if !caret.is_collapsed() {
            return self.delete_caret_range();
        }

        let line = self.document.line_clamped(caret.line);
        let column = caret.end;

        if column == 0 {
            if caret.line > 0 && self.split_line == Some(line.id) {
                return self.merge_into_previous(caret.line, &line.text);
            }
            let indent = line.indent();
            if !indent.is_empty() {
                let updated = line.with_text(format!(
                    "{}{}",
                    pop_indent(indent, config.tab_stop),
                    line.content()
                ));
                let from_end = line.content_len();
                return self.rewrite_line(caret.line, updated, from_end);
            }
            if caret.line == 0 {
                return self.without_selection();
            }
            return self.merge_into_previous(caret.line, line.content());
        }

        let content = line.content();
        let new_content = text::splice_chars(content, column - 1, column, "");
        let from_end = char_len(content) - column;
        let updated = line
            .with_text(format!("{}{new_content}", line.indent()))
            .reparse();
        self.rewrite_line(caret.line, updated, from_end)
    }

    /// Delete (forward).
    pub fn delete_forward(&self) -> EditorState {
        if self.active_selection().is_some() {
            return self.delete_selection();
        }

        let caret = self.clamped_caret();
        if !caret.is_collapsed() {
            return self.delete_caret_range();
        }

        let line = self.document.line_clamped(caret.line);
        let len = line.content_len();
        let column = caret.end;

        if column >= len {
            if caret.line < self.document.last_index() {
                return self.merge_next_into(caret.line);
            }
            return self.without_selection();
        }

        let content = line.content();
        let new_content = text::splice_chars(content, column, column + 1, "");
        let from_end = len - column - 1;
        let updated = line
            .with_text(format!("{}{new_content}", line.indent()))
            .reparse();
        self.rewrite_line(caret.line, updated, from_end)
    }

    /// Remove the in-line text selection of the caret, keeping the indent.
    pub fn delete_caret_range(&self) -> EditorState {
        let caret = self.clamped_caret();
        let line = self.document.line_clamped(caret.line);
        let content = line.content();
        let range = caret.range();

        let new_content = text::splice_chars(content, range.start, range.end, "");
        let from_end = char_len(content) - range.end;
        let updated = line
            .with_text(format!("{}{new_content}", line.indent()))
            .reparse();
        self.rewrite_line(caret.line, updated, from_end)
    }

    /// Enter: split the line at the caret. The new line continues the list
    /// marker of the old one, and a numbered list is renumbered below it.
    pub fn enter(&self) -> EditorState {
        let base = self.without_selection();
        let caret = base.caret;
        let index = caret.line;
        let line = base.document.line_clamped(index);
        let content = line.content();
        let range = caret.range();

        let (before, _) = text::split_at_char(content, range.start);
        let (_, after) = text::split_at_char(content, range.end);
        let next_attribute = attribute::next_attribute_for_split(line.attribute);

        let head = line.with_text(format!("{}{before}", line.indent()));
        let tail = Line::new(next_attribute, after);
        let tail_id = tail.id;
        let mut document = base.document.replace(index, head).insert(index + 1, tail);

        if let Some(Attribute::Numbered(number)) = next_attribute {
            document =
                attribute::renumber_following(&document, index + 2, number.saturating_add(1));
        }

        debug!("split line {index} at column {}", range.start);
        EditorState {
            document,
            caret: Caret::at(index + 1, 0),
            selection: None,
            split_line: Some(tail_id),
        }
    }

    /// Tab / Shift+Tab on the caret line, or on every line the selection
    /// touches. Headings change level along with the indent.
    pub fn indent(&self, direction: IndentDirection, config: &EditorConfig) -> EditorState {
        let caret = self.clamped_caret();
        let last = self.document.last_index();
        let lines = match self.active_selection() {
            Some(selection) => selection.start_line.min(last)..=selection.end_line.min(last),
            None => caret.line..=caret.line,
        };

        let mut document = self.document.clone();
        for index in lines {
            let updated = {
                let line = document.line_clamped(index);
                let indent = line.indent();
                let level = indent_level(indent, config.tab_stop);
                let (new_level, change) =
                    toggle_indent_and_level(level, line.attribute, direction, config.max_indent);

                let mut new_indent = indent.to_string();
                if new_level > level {
                    new_indent = push_indent(indent, config.tab_stop, config.expand_tab);
                }
                while new_level < indent_level(&new_indent, config.tab_stop) && !new_indent.is_empty() {
                    new_indent = pop_indent(&new_indent, config.tab_stop);
                }

                if new_indent == indent && change == AttributeChange::Unchanged {
                    continue;
                }
                Line {
                    id: line.id,
                    attribute: change.apply(line.attribute),
                    text: format!("{new_indent}{}", line.content()),
                }
            };
            document = document.replace(index, updated);
        }

        EditorState {
            document,
            caret,
            selection: self.selection,
            split_line: None,
        }
    }

    /// Append `appended` (the current line's content, or its whole text for
    /// a line just split off) to the line above and drop the current line.
    fn merge_into_previous(&self, index: usize, appended: &str) -> EditorState {
        let previous = self.document.line_clamped(index - 1);

        // The merged line keeps the previous line's attribute.
        let merged = previous.with_text(format!("{}{appended}", previous.text));
        let column = merged.content_len().saturating_sub(char_len(appended));
        let document = self.document.replace(index - 1, merged).remove(index);

        debug!("merged line {index} into line {}", index - 1);
        EditorState {
            document,
            caret: Caret::at(index - 1, column),
            selection: None,
            split_line: None,
        }
    }

    fn merge_next_into(&self, index: usize) -> EditorState {
        let current = self.document.line_clamped(index);
        let next = self.document.line_clamped(index + 1);

        let merged = current.with_text(format!("{}{}", current.text, next.text));
        let document = self.document.replace(index, merged).remove(index + 1);

        debug!("merged line {} into line {index}", index + 1);
        EditorState {
            document,
            caret: self.clamped_caret(),
            selection: None,
            split_line: None,
        }
    }
}
