//! Undo history.
//!
//! `UndoManager` is a strict LIFO of executed commands:
//! - `submit()`: execute then record (never one without the other)
//! - `undo()`: revert and discard the most recent command
//! - `reset()`: forget history without reverting anything
//!
//! There is no redo. An undone command is gone.

use tracing::debug;

use super::command::Command;
use crate::core::state::TableState;

/// LIFO history of executed commands.
///
/// ## Usage
///
/// ```
/// use tripeaks_core::core::TableState;
/// use tripeaks_core::undo::{Command, UndoManager};
///
/// let mut table = TableState::standard();
/// table.push_draw_stack(tripeaks_core::core::CardId(0));
/// let mut undo = UndoManager::new();
///
/// let drawn = table.pop_next_draw().unwrap();
/// let cmd = Command::draw_card(&table, drawn).unwrap();
/// undo.submit(&mut table, cmd);
/// assert_eq!(table.top_discard(), Some(drawn));
///
/// undo.undo(&mut table);
/// assert_eq!(table.top_discard(), None);
/// assert_eq!(table.draw_stack_size(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UndoManager {
    history: Vec<Command>,
}

impl UndoManager {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `command` against `table` and record it.
    pub fn submit(&mut self, table: &mut TableState, command: Command) {
        command.execute(table);
        self.history.push(command);
        debug!(depth = self.history.len(), "command submitted");
    }

    /// Revert the most recent command.
    ///
    /// Returns the reverted command, or `None` (no-op) if history is empty.
    pub fn undo(&mut self, table: &mut TableState) -> Option<Command> {
        let Some(command) = self.history.pop() else {
            debug!("nothing to undo");
            return None;
        };
        command.undo(table);
        debug!(depth = self.history.len(), "command undone");
        Some(command)
    }

    /// Forget all history without reverting.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Most recent command.
    #[must_use]
    pub fn peek(&self) -> Option<&Command> {
        self.history.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
