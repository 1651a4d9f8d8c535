/// View subsystem - Plain-text rendering of the line model
///
/// Renders a document or editor snapshot as an outline: one row per line
/// with its attribute, indent level and content, marking the selection and
/// caret the same way range operations see them.

pub mod outline;

// Re-export public interface
pub use outline::{OutlineView, display_width, truncate_to_width};
