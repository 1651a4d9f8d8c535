/// Controller subsystem - Routes keys and clicks to the edit engine
///
/// This module maps raw input to commands, applies them to the current
/// editor snapshot, and talks to the clipboard and undo history on the
/// editing core's behalf.

pub mod command;
pub mod editor;
pub mod key_handler;

// Re-export public interface
pub use command::Command;
pub use editor::{Editor, Outcome};
pub use key_handler::KeyHandler;
