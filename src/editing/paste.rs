use super::EditorState;
use crate::document_model::text::{self, char_len};
use crate::document_model::{Caret, Line};
use log::debug;

/// Normalize line endings and drop control characters other than tab and
/// newline. Trailing newlines are kept: they paste as empty lines.
pub fn sanitize_paste_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| *c == '\t' || *c == '\n' || !c.is_control())
        .collect()
}

impl EditorState {
    /// Paste plain text at the caret, replacing any selection first.
    ///
    /// The first pasted line joins the text before the caret and the last one
    /// the text after it. Lines in between are new lines without attribute;
    /// pasted text is never decoded.
    pub fn paste_text(&self, pasted: &str) -> EditorState {
        let pasted = sanitize_paste_text(pasted);
        let base = self.without_selection();
        if pasted.is_empty() {
            return base;
        }

        let caret = base.caret;
        let index = caret.line;
        let line = base.document.line_clamped(index);
        let content = line.content();
        let range = caret.range();
        let before = text::slice_chars(content, 0, range.start);
        let after = text::slice_chars(content, range.end, char_len(content));
        let from_end = char_len(after);

        let pieces: Vec<&str> = pasted.split('\n').collect();
        let [first, middle @ .., last] = pieces.as_slice() else {
            let updated = line.with_text(format!("{}{before}{pasted}{after}", line.indent()));
            return base.rewrite_line(index, updated, from_end);
        };

        let mut replacement = Vec::with_capacity(pieces.len());
        replacement.push(line.with_text(format!("{}{before}{first}", line.indent())));
        replacement.extend(middle.iter().map(|piece| Line::new(None, *piece)));
        let tail = Line::new(None, format!("{last}{after}"));
        let tail_index = index + pieces.len() - 1;
        let column = tail.content_len().saturating_sub(from_end);
        replacement.push(tail);

        debug!("pasted {} lines at line {index}", pieces.len());
        EditorState {
            document: base.document.splice(index..index + 1, replacement),
            caret: Caret::at(tail_index, column),
            selection: None,
            split_line: None,
        }
    }
}
