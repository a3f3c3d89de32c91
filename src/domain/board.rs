use crate::domain::column::ColumnSet;
use crate::domain::task::FinishedTask;
use crate::error::Result;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::warn;

/// The three serialized blobs a board persists as.
///
/// All three are rewritten together on every mutation so their key sets
/// never drift apart.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub projects: String,
    pub tasks: String,
    pub finished_tasks: String,
}

/// Root aggregate: all projects, their task columns, and their archives.
///
/// A project created through the board always has an entry in both maps;
/// the two are inserted and removed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub projects: Vec<String>,
    pub tasks: HashMap<String, ColumnSet>,
    pub finished: HashMap<String, Vec<FinishedTask>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from its persisted blobs.
    ///
    /// An absent blob loads as the empty structure. A blob that fails to
    /// parse also loads as empty, with a warning; nothing here is fatal.
    /// Structural mismatches between the blobs are accepted as-is and
    /// handled defensively at mutation time.
    pub fn from_blobs(
        projects: Option<&str>,
        tasks: Option<&str>,
        finished_tasks: Option<&str>,
    ) -> Self {
        Self {
            projects: parse_blob("projects", projects),
            tasks: parse_blob("tasks", tasks),
            finished: parse_blob("finishedTasks", finished_tasks),
        }
    }

    /// Serializes the board into its three persisted blobs
    pub fn snapshot(&self) -> Result<BoardSnapshot> {
        Ok(BoardSnapshot {
            projects: serde_json::to_string(&self.projects)?,
            tasks: serde_json::to_string(&self.tasks)?,
            finished_tasks: serde_json::to_string(&self.finished)?,
        })
    }

    pub fn contains_project(&self, name: &str) -> bool {
        self.projects.iter().any(|p| p == name)
    }

    /// Inserts a project with empty columns and an empty archive
    pub fn add_project(&mut self, name: String) {
        self.tasks.insert(name.clone(), ColumnSet::new());
        self.finished.insert(name.clone(), Vec::new());
        self.projects.push(name);
    }

    /// Removes a project from the list and from both maps in one step
    pub fn remove_project(&mut self, name: &str) {
        self.projects.retain(|p| p != name);
        self.tasks.remove(name);
        self.finished.remove(name);
    }

    pub fn columns(&self, project: &str) -> Option<&ColumnSet> {
        self.tasks.get(project)
    }

    pub fn columns_mut(&mut self, project: &str) -> Option<&mut ColumnSet> {
        self.tasks.get_mut(project)
    }

    pub fn archive(&self, project: &str) -> Option<&Vec<FinishedTask>> {
        self.finished.get(project)
    }
}

fn parse_blob<T: DeserializeOwned + Default>(key: &str, raw: Option<&str>) -> T {
    match raw {
        None => T::default(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
            warn!(key, %err, "discarding malformed blob, loading empty");
            T::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::Column;
    use crate::domain::task::Task;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.projects.is_empty());
        assert!(board.tasks.is_empty());
        assert!(board.finished.is_empty());
    }

    #[test]
    fn test_add_project_creates_both_structures() {
        let mut board = Board::new();
        board.add_project("Alpha".to_string());

        assert_eq!(board.projects, vec!["Alpha".to_string()]);
        assert!(board.columns("Alpha").is_some());
        assert!(board.archive("Alpha").is_some());
        assert_eq!(board.columns("Alpha").unwrap().task_count(), 0);
    }

    #[test]
    fn test_remove_project_removes_both_structures() {
        let mut board = Board::new();
        board.add_project("Alpha".to_string());
        board.add_project("Beta".to_string());

        board.remove_project("Alpha");

        assert_eq!(board.projects, vec!["Beta".to_string()]);
        assert!(board.columns("Alpha").is_none());
        assert!(board.archive("Alpha").is_none());
        assert!(board.columns("Beta").is_some());
    }

    #[test]
    fn test_absent_blobs_load_empty() {
        let board = Board::from_blobs(None, None, None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_malformed_blobs_load_empty() {
        let board = Board::from_blobs(Some("not json"), Some("[1,2"), Some("{}"));
        assert!(board.projects.is_empty());
        assert!(board.tasks.is_empty());
        assert!(board.finished.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut board = Board::new();
        board.add_project("Alpha".to_string());
        board
            .columns_mut("Alpha")
            .unwrap()
            .column_mut(Column::Backlog)
            .push(Task::new("Write spec".to_string()));
        board
            .finished
            .get_mut("Alpha")
            .unwrap()
            .push(Task::new("Old work".to_string()).finish());

        let snapshot = board.snapshot().unwrap();
        let loaded = Board::from_blobs(
            Some(&snapshot.projects),
            Some(&snapshot.tasks),
            Some(&snapshot.finished_tasks),
        );

        assert_eq!(loaded, board);
    }

    #[test]
    fn test_blob_layout_matches_wire_format() {
        let mut board = Board::new();
        board.add_project("Alpha".to_string());

        let snapshot = board.snapshot().unwrap();

        assert_eq!(snapshot.projects, r#"["Alpha"]"#);
        let tasks: serde_json::Value = serde_json::from_str(&snapshot.tasks).unwrap();
        assert!(tasks["Alpha"]["Backlog"].is_array());
        assert!(tasks["Alpha"]["In Progress"].is_array());
        assert!(tasks["Alpha"]["Testing"].is_array());
        assert!(tasks["Alpha"]["Done"].is_array());
    }
}
