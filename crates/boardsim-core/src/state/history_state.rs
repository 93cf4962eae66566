//! History state management - contains undo/redo functionality.

use boardsim_types::Board;

/// State for managing undo/redo history
#[derive(Debug, Clone)]
pub struct HistoryState {
    /// Undo stack
    undo_stack: Vec<Board>,

    /// Redo stack
    redo_stack: Vec<Board>,

    /// Maximum undo stack size
    max_undo_size: usize,
}

impl HistoryState {
    pub fn new(max_undo_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo_size,
        }
    }

    /// Save a board snapshot to the undo stack
    pub fn save_state(&mut self, board: &Board) {
        self.undo_stack.push(board.clone());
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_undo_size {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last operation
    pub fn undo(&mut self, current: &Board) -> Option<Board> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    /// Redo the last undone operation
    pub fn redo(&mut self, current: &Board) -> Option<Board> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_size(&self) -> usize {
        self.undo_stack.len()
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new(50)
    }
}
