use super::EditorState;

/// Snapshot undo/redo. Snapshots share unchanged lines, so keeping many of
/// them costs little more than the lines that actually changed.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<EditorState>,
    redo_stack: Vec<EditorState>,
    max_undo_levels: usize,
}

impl History {
    pub fn new(max_undo_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo_levels,
        }
    }

    /// Remember `previous` as the state before a new edit.
    pub fn record(&mut self, previous: EditorState) {
        self.undo_stack.push(previous);

        // Limit the undo stack size
        if self.undo_stack.len() > self.max_undo_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack when new actions are performed
        self.redo_stack.clear();
    }

    /// Step back from `current`, which becomes redoable.
    pub fn undo(&mut self, current: EditorState) -> Option<EditorState> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: EditorState) -> Option<EditorState> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(1000)
    }
}
