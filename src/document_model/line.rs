use super::attribute::{self, Attribute, AttributeChange};
use super::text;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a line. Assigned at creation and never reused; it says
/// nothing about the line's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(Uuid);

impl LineId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone)]
pub struct Line {
    pub id: LineId,
    pub attribute: Option<Attribute>,
    /// Raw content including leading indentation, never the attribute token.
    pub text: String,
}

impl Line {
    pub fn new(attribute: Option<Attribute>, text: impl Into<String>) -> Self {
        Self {
            id: LineId::fresh(),
            attribute,
            text: text.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(None, String::new())
    }

    pub fn indent(&self) -> &str {
        text::leading_whitespace(&self.text)
    }

    /// Text with indentation stripped; every caret column is measured here.
    pub fn content(&self) -> &str {
        text::text_without_leading_whitespace(&self.text)
    }

    pub fn content_len(&self) -> usize {
        text::char_len(self.content())
    }

    pub fn with_text(&self, text: impl Into<String>) -> Line {
        Line {
            id: self.id,
            attribute: self.attribute,
            text: text.into(),
        }
    }

    pub fn with_attribute(&self, attribute: Option<Attribute>) -> Line {
        Line {
            id: self.id,
            attribute,
            text: self.text.clone(),
        }
    }

    /// Same attribute and text, whatever the ids.
    pub fn same_content(&self, other: &Line) -> bool {
        self.attribute == other.attribute && self.text == other.text
    }

    /// Re-run attribute detection on the content. A detected token moves
    /// from the text into `attribute`; otherwise the line is returned as is.
    pub fn reparse(&self) -> Line {
        let decoded = attribute::decode_fast(self.content());
        match decoded.attribute {
            AttributeChange::Unchanged => self.clone(),
            change => {
                log::trace!("line {} picked up attribute {:?}", self.id, change);
                Line {
                    id: self.id,
                    attribute: change.apply(self.attribute),
                    text: format!("{}{}", self.indent(), decoded.text),
                }
            }
        }
    }

    pub fn serialize(&self) -> String {
        match self.attribute {
            Some(attribute) => format!("{}{} {}", self.indent(), attribute, self.content()),
            None => self.text.clone(),
        }
    }

    pub fn deserialize(raw: &str) -> Line {
        let indent = text::leading_whitespace(raw);
        let decoded = attribute::decode(&raw[indent.len()..]);
        match decoded.attribute {
            AttributeChange::Set(attribute) => {
                Line::new(Some(attribute), format!("{indent}{}", decoded.text))
            }
            _ => Line::new(None, raw),
        }
    }
}
