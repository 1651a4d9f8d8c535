use crate::document_model::text::indent_level;
use crate::document_model::{Document, Line};
use crate::editing::EditorState;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

const ELLIPSIS: char = '…';

/// Display width of `text`, expanding tabs to the next tab stop.
pub fn display_width(text: &str, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    text.chars().fold(0, |column, c| match c {
        '\t' => ((column / tab_stop) + 1) * tab_stop,
        c => column + c.width().unwrap_or(1),
    })
}

/// Cut `text` to at most `width` display columns, ending in an ellipsis
/// when anything was dropped. Wide characters are never split.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push(ELLIPSIS);
    result
}

#[derive(Debug, Clone)]
pub struct OutlineView {
    pub tab_stop: usize,
    /// Row width limit in display columns; rows are cut with an ellipsis.
    pub max_width: Option<usize>,
}

impl OutlineView {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            tab_stop,
            max_width: None,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn render_document(&self, document: &Document) -> Vec<String> {
        document
            .lines()
            .enumerate()
            .map(|(index, line)| self.row(index, line, line.content().to_string()))
            .collect()
    }

    /// Like `render_document`, with the selection in `[ ]` and a collapsed
    /// caret as `|`.
    pub fn render_state(&self, state: &EditorState) -> Vec<String> {
        let selection = state.effective_selection();
        let caret = state.caret_position();

        state
            .document
            .lines()
            .enumerate()
            .map(|(index, line)| {
                let selected = selection
                    .and_then(|s| s.per_line_range(index, line.content_len()))
                    .filter(|range| !range.is_empty());
                let caret_column = (selection.is_none() && caret.line == index).then_some(caret.column);
                let content = decorate(line.content(), selected, caret_column);
                self.row(index, line, content)
            })
            .collect()
    }

    fn row(&self, index: usize, line: &Line, content: String) -> String {
        let token = line.attribute.map(|a| a.token()).unwrap_or_default();
        let level = indent_level(line.indent(), self.tab_stop);
        let prefix = format!("{index:>4}  {token:<5} {level}  ");

        match self.max_width {
            Some(max_width) => {
                let room = max_width.saturating_sub(display_width(&prefix, self.tab_stop));
                format!("{prefix}{}", truncate_to_width(&content, room))
            }
            None => format!("{prefix}{content}"),
        }
    }
}

fn decorate(content: &str, selected: Option<Range<usize>>, caret: Option<usize>) -> String {
    let mut result = String::with_capacity(content.len() + 2);
    let mut len = 0;
    for (i, c) in content.chars().enumerate() {
        mark(&mut result, i, &selected, caret);
        result.push(c);
        len = i + 1;
    }
    mark(&mut result, len, &selected, caret);
    result
}

fn mark(out: &mut String, at: usize, selected: &Option<Range<usize>>, caret: Option<usize>) {
    if let Some(range) = selected {
        if range.end == at {
            out.push(']');
        }
        if range.start == at {
            out.push('[');
        }
    }
    if caret == Some(at) {
        out.push('|');
    }
}
