//! In-memory task list.
//!
//! Tasks live only for the lifetime of the process and are identified by
//! their position. The page renders straight from `TaskList::tasks`.

use startpage_core::TaskError;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Active,
    Completed,
}

impl Task {
    pub fn state(&self) -> TaskState {
        if self.completed {
            TaskState::Completed
        } else {
            TaskState::Active
        }
    }
}

/// Ordered list of tasks, new tasks appended at the end.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Append a new active task with the trimmed input text.
    ///
    /// # Errors
    /// Returns `TaskError::EmptyInput` if the text is empty or whitespace-only;
    /// the list is left untouched.
    pub fn add(&mut self, input: &str) -> Result<&Task, TaskError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyInput);
        }

        self.tasks.push(Task {
            text: text.to_string(),
            completed: false,
        });
        tracing::debug!("Added task #{}", self.tasks.len());

        let index = self.tasks.len() - 1;
        Ok(&self.tasks[index])
    }

    /// Remove exactly the task at `index`, whatever its state.
    ///
    /// # Errors
    /// Returns `TaskError::NotFound` if there is no such row.
    pub fn delete(&mut self, index: usize) -> Result<Task, TaskError> {
        if index >= self.tasks.len() {
            return Err(TaskError::NotFound(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Set the completion state to the checkbox's new value.
    ///
    /// # Errors
    /// Returns `TaskError::NotFound` if there is no such row.
    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<&Task, TaskError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::NotFound(index))?;
        task.completed = completed;
        Ok(&*task)
    }

    /// Flip the completion state.
    ///
    /// # Errors
    /// Returns `TaskError::NotFound` if there is no such row.
    pub fn toggle(&mut self, index: usize) -> Result<&Task, TaskError> {
        let completed = self
            .tasks
            .get(index)
            .map(|t| !t.completed)
            .ok_or(TaskError::NotFound(index))?;
        self.set_completed(index, completed)
    }

    /// Remove every completed task in one pass, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }
}
