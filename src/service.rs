use crate::{
    domain::{Board, Column, Selection, Task, TaskId},
    error::{KaamdhaamError, Result},
    storage::{Storage, FINISHED_TASKS_KEY, PROJECTS_KEY, TASKS_KEY},
};
use std::sync::Arc;
use tracing::debug;

/// Yes/no gate in front of destructive operations.
///
/// The caller decides how the prompt is presented; declining aborts the
/// operation with no state change.
pub trait ConfirmationGate {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Owns the board and the current-project selection, applies every
/// mutation, and writes all three blobs through to storage after each
/// applied mutation.
///
/// Lifecycle: `load` once at startup, then mutate. `&mut self` serializes
/// the whole read-modify-write-persist sequence; embedders that want
/// multiple threads wrap the service in their own lock.
pub struct BoardService {
    board: Board,
    selection: Selection,
    storage: Arc<dyn Storage>,
}

impl BoardService {
    /// Seeds the board from the three persisted blobs
    pub async fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let projects = storage.get(PROJECTS_KEY).await?;
        let tasks = storage.get(TASKS_KEY).await?;
        let finished = storage.get(FINISHED_TASKS_KEY).await?;

        let board = Board::from_blobs(
            projects.as_deref(),
            tasks.as_deref(),
            finished.as_deref(),
        );

        Ok(Self {
            board,
            selection: Selection::new(),
            storage,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_project(&self) -> Option<&str> {
        self.selection.current()
    }

    /// Sets or clears the current project. Session state only; not
    /// persisted.
    pub fn select_project(&mut self, name: Option<&str>) {
        self.selection.set_current(name.map(str::to_string));
    }

    /// Creates a project with empty columns and an empty archive and makes
    /// it current.
    ///
    /// An empty name is a silent no-op (`Ok(false)`); a duplicate name is
    /// rejected.
    pub async fn create_project(&mut self, name: &str) -> Result<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        if self.board.contains_project(name) {
            return Err(KaamdhaamError::ProjectAlreadyExists(name.to_string()));
        }

        self.board.add_project(name.to_string());
        self.selection.set_current(Some(name.to_string()));
        debug!(project = name, "created project");

        self.persist().await?;
        Ok(true)
    }

    /// Deletes a project, its columns and its archive in one step, behind
    /// the confirmation gate. Clears the selection if it pointed at the
    /// deleted project.
    pub async fn delete_project(
        &mut self,
        name: &str,
        gate: &dyn ConfirmationGate,
    ) -> Result<bool> {
        if !self.board.contains_project(name) {
            return Err(KaamdhaamError::ProjectNotFound(name.to_string()));
        }

        let prompt = format!("Are you sure you want to delete the project \"{name}\"?");
        if !gate.confirm(&prompt) {
            return Ok(false);
        }

        self.board.remove_project(name);
        self.selection.clear_if_current(name);
        debug!(project = name, "deleted project");

        self.persist().await?;
        Ok(true)
    }

    /// Appends a new task to the Backlog of the current project.
    ///
    /// An empty name or no current project is a silent no-op (`Ok(None)`).
    pub async fn create_task(&mut self, name: &str) -> Result<Option<TaskId>> {
        let Some(project) = self.selection.current() else {
            return Ok(None);
        };
        if name.is_empty() {
            return Ok(None);
        }
        let project = project.to_string();

        let columns = self
            .board
            .columns_mut(&project)
            .ok_or_else(|| KaamdhaamError::ProjectNotFound(project.clone()))?;

        let task = Task::new(name.to_string());
        let id = task.id;
        columns.column_mut(Column::Backlog).push(task);
        debug!(project = %project, task = name, "created task");

        self.persist().await?;
        Ok(Some(id))
    }

    /// Removes a task from a column of the current project, behind the
    /// confirmation gate
    pub async fn delete_task(
        &mut self,
        id: TaskId,
        column: Column,
        gate: &dyn ConfirmationGate,
    ) -> Result<bool> {
        let Some(project) = self.selection.current() else {
            return Ok(false);
        };
        let project = project.to_string();

        let columns = self
            .board
            .columns_mut(&project)
            .ok_or_else(|| KaamdhaamError::ProjectNotFound(project.clone()))?;

        let tasks = columns.column_mut(column);
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| KaamdhaamError::TaskNotFound(id.to_string()))?;

        let prompt = format!(
            "Are you sure you want to delete the task \"{}\"?",
            tasks[index].name
        );
        if !gate.confirm(&prompt) {
            return Ok(false);
        }

        let task = tasks.remove(index);
        debug!(project = %project, task = %task.name, column = %column, "deleted task");

        self.persist().await?;
        Ok(true)
    }

    /// Moves a task between columns of the current project, preserving its
    /// id, name and creation timestamp.
    ///
    /// Moving a task to its own column leaves it present exactly once, at
    /// the end of the sequence.
    pub async fn move_task(&mut self, id: TaskId, from: Column, to: Column) -> Result<()> {
        let Some(project) = self.selection.current() else {
            return Ok(());
        };
        let project = project.to_string();

        let columns = self
            .board
            .columns_mut(&project)
            .ok_or_else(|| KaamdhaamError::ProjectNotFound(project.clone()))?;

        let source = columns.column_mut(from);
        let index = source
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| KaamdhaamError::TaskNotFound(id.to_string()))?;
        let task = source.remove(index);

        debug!(project = %project, task = %task.name, %from, %to, "moved task");
        columns.column_mut(to).push(task);

        self.persist().await?;
        Ok(())
    }

    /// Archives a task from the Done column of the current project.
    ///
    /// One-way: the task leaves the active board for good. The operation
    /// only succeeds when the task is actually in Done; otherwise neither
    /// Done nor the archive is touched.
    pub async fn finish_task(&mut self, id: TaskId) -> Result<()> {
        let Some(project) = self.selection.current() else {
            return Ok(());
        };
        let project = project.to_string();

        let columns = self
            .board
            .columns_mut(&project)
            .ok_or_else(|| KaamdhaamError::ProjectNotFound(project.clone()))?;

        let done = columns.column_mut(Column::Done);
        let index = done
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| KaamdhaamError::TaskNotInDone(id.to_string()))?;
        let task = done.remove(index);

        debug!(project = %project, task = %task.name, "finished task");
        self.board
            .finished
            .entry(project)
            .or_default()
            .push(task.finish());

        self.persist().await?;
        Ok(())
    }

    /// Rewrites all three blobs together so their key sets never drift
    async fn persist(&self) -> Result<()> {
        let snapshot = self.board.snapshot()?;
        self.storage.set(PROJECTS_KEY, &snapshot.projects).await?;
        self.storage.set(TASKS_KEY, &snapshot.tasks).await?;
        self.storage
            .set(FINISHED_TASKS_KEY, &snapshot.finished_tasks)
            .await?;
        Ok(())
    }
}
