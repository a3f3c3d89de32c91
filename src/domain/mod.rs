pub mod board;
pub mod column;
pub mod selection;
pub mod task;

pub use board::{Board, BoardSnapshot};
pub use column::{Column, ColumnSet};
pub use selection::Selection;
pub use task::{FinishedTask, Task, TaskId};
