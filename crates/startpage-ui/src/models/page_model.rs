//! The page: every region the renderer draws, mutated only through events.

use std::ops::ControlFlow;

use startpage_core::{AppError, EventHandler, PageEvent, Region, TaskCommand, TaskError};
use startpage_services::TaskList;

/// Text field tasks are typed into
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    value: String,
}

impl TaskInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Add the field's text to `tasks` and clear the field. On empty text the
    /// field is left as typed.
    ///
    /// # Errors
    /// Returns `TaskError::EmptyInput` for empty or whitespace-only text.
    pub fn submit(&mut self, tasks: &mut TaskList) -> Result<(), TaskError> {
        tasks.add(&self.value)?;
        self.value.clear();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub time: String,
    pub date: String,
    pub location: String,
    pub temperature: String,
    pub background: Option<String>,
    pub tasks: TaskList,
    pub input: TaskInput,
    /// Blocking alert shown until the next task action
    pub alert: Option<String>,
}

impl Page {
    /// Empty page showing `default_town` until a location resolves
    pub fn new(default_town: impl Into<String>) -> Self {
        Self {
            time: String::new(),
            date: String::new(),
            location: default_town.into(),
            temperature: String::new(),
            background: None,
            tasks: TaskList::new(),
            input: TaskInput::default(),
            alert: None,
        }
    }

    pub fn text(&self, region: Region) -> &str {
        match region {
            Region::Time => &self.time,
            Region::Date => &self.date,
            Region::Location => &self.location,
            Region::Temperature => &self.temperature,
        }
    }

    fn text_mut(&mut self, region: Region) -> &mut String {
        match region {
            Region::Time => &mut self.time,
            Region::Date => &mut self.date,
            Region::Location => &mut self.location,
            Region::Temperature => &mut self.temperature,
        }
    }

    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::SetText { region, text } => *self.text_mut(region) = text,
            PageEvent::SetBackground(path) => {
                if let Some(old) = self.background.replace(path) {
                    tracing::debug!("Removed background {}", old);
                }
            }
            PageEvent::Task(command) => self.apply_task(command),
            PageEvent::Quit => {}
        }
    }

    fn apply_task(&mut self, command: TaskCommand) {
        self.alert = None;

        let result = match command {
            TaskCommand::Add(text) => {
                self.input.set_value(text);
                self.input.submit(&mut self.tasks)
            }
            TaskCommand::Delete(index) => self.tasks.delete(index).map(|_| ()),
            TaskCommand::SetCompleted { index, completed } => {
                self.tasks.set_completed(index, completed).map(|_| ())
            }
            TaskCommand::Toggle(index) => self.tasks.toggle(index).map(|_| ()),
            TaskCommand::DeleteCompleted => {
                let removed = self.tasks.delete_completed();
                tracing::debug!("Deleted {} completed tasks", removed);
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(TaskError::EmptyInput) => {
                self.alert = AppError::from(TaskError::EmptyInput).alert().map(str::to_string);
            }
            Err(e) => tracing::warn!("Task command ignored: {}", e),
        }
    }
}

impl EventHandler for Page {
    fn handle(&mut self, event: PageEvent) -> ControlFlow<()> {
        self.apply(event);
        ControlFlow::Continue(())
    }
}
