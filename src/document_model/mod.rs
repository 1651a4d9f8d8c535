/// Document model subsystem - lines, attributes and selections
///
/// This module holds the data every edit operates on: the ordered line store,
/// the attribute codec that keeps block markers out of line text, and the
/// selection/caret types with their range helpers.

pub mod attribute;
pub mod click;
pub mod document;
pub mod line;
pub mod selection;
pub mod text;

// Re-export main types for convenience
pub use attribute::{Attribute, AttributeChange, AttributeParseError, Decoded, IndentDirection};
pub use click::{ClickOutcome, ClickTracker};
pub use document::Document;
pub use line::{Line, LineId};
pub use selection::{Caret, Position, Selection, find_word_boundaries};
pub use text::{leading_whitespace, text_without_leading_whitespace};
