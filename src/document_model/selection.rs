use super::text;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A point in the document. `column` counts chars of the line's content.
/// Ordering is lexicographic on `(line, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The caret of the focused line. `start != end` is an in-line text
/// selection, which may run in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caret {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Caret {
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line,
            start: column,
            end: column,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start.min(self.end)..self.start.max(self.end)
    }

    /// Where the caret is drawn.
    pub fn head(&self) -> Position {
        Position::new(self.line, self.end)
    }
}

/// A character range across one or more lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start_line: usize,
    pub start_char: usize,
    pub end_line: usize,
    pub end_char: usize,
}

impl Selection {
    /// Build a selection from two anchors in either order.
    pub fn normalize(a: Position, b: Position) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start_line: start.line,
            start_char: start.column,
            end_line: end.line,
            end_char: end.column,
        }
    }

    pub fn collapsed(position: Position) -> Self {
        Self::normalize(position, position)
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_char)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_char)
    }

    pub fn is_empty(&self) -> bool {
        self.start() >= self.end()
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// Whether the char at `position` is inside the selection.
    pub fn contains(&self, position: Position) -> bool {
        self.start() <= position && position < self.end()
    }

    /// Whether any char of `line` (of length `line_len`) is selected.
    pub fn intersects_line(&self, line: usize, line_len: usize) -> bool {
        self.per_line_range(line, line_len)
            .is_some_and(|range| !range.is_empty())
    }

    /// The segment of `line` covered by this selection, or `None` when the
    /// line is outside it. Interior lines are covered in full.
    ///
    /// Copy, delete, bold and highlighting all go through here.
    pub fn per_line_range(&self, line: usize, line_len: usize) -> Option<Range<usize>> {
        if !self.contains_line(line) {
            return None;
        }

        let start = if line == self.start_line {
            self.start_char.min(line_len)
        } else {
            0
        };
        let end = if line == self.end_line {
            self.end_char.min(line_len)
        } else {
            line_len
        };

        Some(start..end.max(start))
    }
}

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9\p{Hiragana}\p{Katakana}\u{30FC}\p{Han}]+").expect("word pattern is valid")
});

/// Char range of the word under `char_index`, for double-click selection.
///
/// Outside a word the range covers the single char at `char_index`, or is
/// empty at the end of the line.
pub fn find_word_boundaries(line_text: &str, char_index: usize) -> Range<usize> {
    let len = text::char_len(line_text);
    if char_index >= len {
        return len..len;
    }

    let byte_index = text::byte_offset(line_text, char_index);
    for word in WORD_PATTERN.find_iter(line_text) {
        if word.start() > byte_index {
            break;
        }
        if byte_index < word.end() {
            let start = line_text[..word.start()].chars().count();
            let end = start + word.as_str().chars().count();
            return start..end;
        }
    }

    char_index..char_index + 1
}
