//! # KaamDhaam Core
//!
//! Core board state, mutation operations and persistence for the KaamDhaam
//! kanban task board.
//!
//! This crate provides the project/task data model, the mutation API that
//! enforces its invariants, and the key-value persistence contract, without
//! any dependency on a specific UI or storage medium. Tasks move through
//! four fixed columns (Backlog, In Progress, Testing, Done) and a Done task
//! can be archived into a per-project finished-task list.

pub mod domain;
pub mod error;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardSnapshot},
    column::{Column, ColumnSet},
    selection::Selection,
    task::{FinishedTask, Task, TaskId},
};
pub use error::{KaamdhaamError, Result};
pub use service::{BoardService, ConfirmationGate};
pub use storage::Storage;
