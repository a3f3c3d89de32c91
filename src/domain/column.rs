use crate::domain::task::Task;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the four fixed workflow stages a task occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Backlog,
    #[serde(rename = "In Progress")]
    InProgress,
    Testing,
    Done,
}

impl Column {
    /// All columns in board order
    pub const ALL: [Column; 4] = [
        Column::Backlog,
        Column::InProgress,
        Column::Testing,
        Column::Done,
    ];

    /// Returns the key the column is stored under
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Testing => "Testing",
            Self::Done => "Done",
        }
    }

    /// Returns the label shown in the UI.
    ///
    /// The Backlog column is displayed as "Task Created"; all other columns
    /// are labelled by their storage name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backlog => "Task Created",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Column {
    type Err = crate::error::KaamdhaamError;

    /// Parses a column from its storage name or its UI label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // "Task Created" is the display alias for Backlog
            "Backlog" | "Task Created" => Ok(Self::Backlog),
            "In Progress" => Ok(Self::InProgress),
            "Testing" => Ok(Self::Testing),
            "Done" => Ok(Self::Done),
            _ => Err(crate::error::KaamdhaamError::UnknownColumn(s.to_string())),
        }
    }
}

/// The four ordered task sequences owned by a single project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSet {
    #[serde(rename = "Backlog", default)]
    pub backlog: Vec<Task>,
    #[serde(rename = "In Progress", default)]
    pub in_progress: Vec<Task>,
    #[serde(rename = "Testing", default)]
    pub testing: Vec<Task>,
    #[serde(rename = "Done", default)]
    pub done: Vec<Task>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the task sequence for a column
    pub fn column(&self, column: Column) -> &Vec<Task> {
        match column {
            Column::Backlog => &self.backlog,
            Column::InProgress => &self.in_progress,
            Column::Testing => &self.testing,
            Column::Done => &self.done,
        }
    }

    /// Returns the task sequence for a column, mutably
    pub fn column_mut(&mut self, column: Column) -> &mut Vec<Task> {
        match column {
            Column::Backlog => &mut self.backlog,
            Column::InProgress => &mut self.in_progress,
            Column::Testing => &mut self.testing,
            Column::Done => &mut self.done,
        }
    }

    /// Total number of tasks across all four columns
    pub fn task_count(&self) -> usize {
        Column::ALL.iter().map(|c| self.column(*c).len()).sum()
    }
}
