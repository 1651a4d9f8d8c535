/// Configuration subsystem - Editor settings and preferences
///
/// This module handles loading configuration from .slidelinesrc files,
/// providing the indentation, pointer and history settings the editor uses.

pub mod rc;

// Re-export public interface
pub use rc::{EditorConfig, RcLoader};
