use super::command::Command;
use super::key_handler::KeyHandler;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::EditorConfig;
use crate::document_model::{ClickOutcome, ClickTracker, Document, IndentDirection, Position};
use crate::editing::{EditorState, History};
use crossterm::event::KeyEvent;
use log::{debug, warn};
use std::time::Instant;

/// What one command did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The document changed.
    pub changed: bool,
    pub message: Option<String>,
}

impl Outcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn message(message: impl Into<String>) -> Self {
        Self {
            changed: false,
            message: Some(message.into()),
        }
    }
}

/// Owns the current snapshot and everything the edit engine leaves to the
/// host: click state, undo history, the clipboard and configuration.
pub struct Editor {
    state: EditorState,
    config: EditorConfig,
    clicks: ClickTracker,
    history: History,
    clipboard: Box<dyn Clipboard>,
    pub status_message: String,
}

impl Editor {
    pub fn new(document: Document, config: EditorConfig, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            state: EditorState::new(document),
            clicks: ClickTracker::new(config.multi_click_threshold()),
            history: History::new(config.max_undo_levels),
            config,
            clipboard,
            status_message: String::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.state.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn handle_key(&mut self, key_event: &KeyEvent) -> Outcome {
        match KeyHandler::parse_key(key_event) {
            Some(command) => self.execute(command),
            None => Outcome::unchanged(),
        }
    }

    pub fn click(&mut self, position: Position, at: Instant) -> Outcome {
        self.execute(Command::Click { position, at })
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        if !matches!(command, Command::Click { .. }) {
            self.clicks.reset();
        }

        let outcome = match command {
            Command::InsertChar(c) => self.apply(self.state.insert_char(c)),
            Command::InsertText(text) => self.apply(self.state.insert_text(&text)),
            Command::Enter => self.apply(self.state.enter()),
            Command::DeleteBackward => self.apply(self.state.delete_backward(&self.config)),
            Command::DeleteForward => self.apply(self.state.delete_forward()),
            Command::Indent => {
                self.apply(self.state.indent(IndentDirection::Increase, &self.config))
            }
            Command::Outdent => {
                self.apply(self.state.indent(IndentDirection::Decrease, &self.config))
            }
            Command::ToggleBold => self.apply(self.state.toggle_bold()),
            Command::SelectAll => self.apply(self.state.select_all()),
            Command::Move(motion) => self.apply(self.state.move_caret(motion)),
            Command::Extend(motion) => self.apply(self.state.extend_selection(motion)),
            Command::Click { position, at } => self.apply_click(position, at),
            Command::Copy => Self::report(self.copy().map(|_| false)),
            Command::Cut => Self::report(self.cut()),
            Command::Paste => Self::report(self.paste()),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        };

        if let Some(message) = &outcome.message {
            self.status_message = message.clone();
        }
        outcome
    }

    /// Put the selected text on the clipboard. Returns the text copied.
    pub fn copy(&mut self) -> Result<String, ClipboardError> {
        let text = self.state.selected_text();
        if text.is_empty() {
            return Ok(text);
        }
        self.clipboard.write(&text).inspect_err(|e| {
            warn!("copy to {} clipboard failed: {e}", self.clipboard.name());
        })?;
        Ok(text)
    }

    /// Copy, then delete the selection. Nothing is deleted when the
    /// clipboard write fails.
    pub fn cut(&mut self) -> Result<bool, ClipboardError> {
        let (next, text) = self.state.cut();
        if text.is_empty() {
            return Ok(false);
        }
        self.clipboard.write(&text).inspect_err(|e| {
            warn!("cut to {} clipboard failed: {e}", self.clipboard.name());
        })?;
        Ok(self.apply(next).changed)
    }

    /// Paste the clipboard at the caret. A failed read leaves the document
    /// as it was.
    pub fn paste(&mut self) -> Result<bool, ClipboardError> {
        let text = self.clipboard.read().inspect_err(|e| {
            warn!("paste from {} clipboard failed: {e}", self.clipboard.name());
        })?;
        let next = self.state.paste_text(&text);
        Ok(self.apply(next).changed)
    }

    fn report(result: Result<bool, ClipboardError>) -> Outcome {
        match result {
            Ok(changed) => Outcome {
                changed,
                message: None,
            },
            Err(e) => Outcome::message(format!("Error: {e}")),
        }
    }

    fn apply_click(&mut self, position: Position, at: Instant) -> Outcome {
        let outcome = self.clicks.register(
            position,
            &self.state.document,
            self.state.selection.as_ref(),
            at,
        );
        let next = match outcome {
            ClickOutcome::Caret(position) => self.state.set_caret(position),
            ClickOutcome::Word(selection) | ClickOutcome::Line(selection) => {
                self.state.select(selection.start(), selection.end())
            }
        };
        self.apply(next)
    }

    /// Make `next` current. Only document changes go into the history.
    fn apply(&mut self, next: EditorState) -> Outcome {
        let changed = !next.document.is_same_snapshot(&self.state.document);
        let previous = std::mem::replace(&mut self.state, next);
        if changed {
            self.history.record(previous);
        }
        Outcome {
            changed,
            message: None,
        }
    }

    fn undo(&mut self) -> Outcome {
        match self.history.undo(self.state.clone()) {
            Some(previous) => {
                debug!("undo");
                self.state = previous;
                Outcome {
                    changed: true,
                    message: None,
                }
            }
            None => Outcome::message("Already at oldest change"),
        }
    }

    fn redo(&mut self) -> Outcome {
        match self.history.redo(self.state.clone()) {
            Some(next) => {
                debug!("redo");
                self.state = next;
                Outcome {
                    changed: true,
                    message: None,
                }
            }
            None => Outcome::message("Already at newest change"),
        }
    }
}
