use super::attribute::Attribute;
use super::line::Line;
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

/// Ordered, never-empty sequence of lines.
///
/// Every structural edit leaves `self` untouched and returns a new document.
/// Lines are shared between snapshots, so an edit only copies the spine.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Arc<Line>>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            lines: vec![Arc::new(Line::empty())],
        }
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        if lines.is_empty() {
            return Self::new();
        }
        Self {
            lines: lines.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        Ok(Self::deserialize(&normalized))
    }

    pub fn save(&self, path: &Path) -> Result<usize, std::io::Error> {
        let content = self.serialize();
        fs::write(path, &content)?;
        Ok(content.len())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn last_index(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index).map(Arc::as_ref)
    }

    /// The line at `index`, or the last line when `index` is past the end.
    pub fn line_clamped(&self, index: usize) -> &Line {
        &self.lines[index.min(self.last_index())]
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().map(Arc::as_ref)
    }

    /// `(attribute, text)` per line, ignoring ids.
    pub fn entries(&self) -> Vec<(Option<Attribute>, &str)> {
        self.lines()
            .map(|line| (line.attribute, line.text.as_str()))
            .collect()
    }

    pub fn same_content(&self, other: &Document) -> bool {
        self.line_count() == other.line_count()
            && self.lines().zip(other.lines()).all(|(a, b)| a.same_content(b))
    }

    /// True when `other` is this exact snapshot, line for line.
    pub fn is_same_snapshot(&self, other: &Document) -> bool {
        self.lines.len() == other.lines.len()
            && self
                .lines
                .iter()
                .zip(&other.lines)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    pub fn insert(&self, index: usize, line: Line) -> Document {
        let index = index.min(self.lines.len());
        let mut lines = self.lines.clone();
        lines.insert(index, Arc::new(line));
        Document { lines }
    }

    /// Removing the only remaining line is a no-op.
    pub fn remove(&self, index: usize) -> Document {
        if index >= self.lines.len() || self.lines.len() == 1 {
            return self.clone();
        }
        let mut lines = self.lines.clone();
        lines.remove(index);
        Document { lines }
    }

    pub fn replace(&self, index: usize, line: Line) -> Document {
        if index >= self.lines.len() {
            return self.clone();
        }
        let mut lines = self.lines.clone();
        lines[index] = Arc::new(line);
        Document { lines }
    }

    /// Replace the lines in `range` with `replacement`. An empty result gets
    /// a single empty line.
    pub fn splice(&self, range: Range<usize>, replacement: impl IntoIterator<Item = Line>) -> Document {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        let mut lines = self.lines.clone();
        lines.splice(start..end, replacement.into_iter().map(Arc::new));
        if lines.is_empty() {
            lines.push(Arc::new(Line::empty()));
        }
        Document { lines }
    }

    pub fn serialize(&self) -> String {
        self.lines()
            .map(Line::serialize)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn deserialize(text: &str) -> Document {
        Self::from_lines(text.split('\n').map(Line::deserialize).collect())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
