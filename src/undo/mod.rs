//! Command/undo engine.
//!
//! Player actions are `Command` values (a sum type over the two action
//! kinds) dispatched by `match`. `UndoManager` executes them and keeps a LIFO
//! history for exact restoration.

pub mod command;
pub mod manager;

pub use command::{Command, CommandKind};
pub use manager::UndoManager;
