//! Messages sent from components to the page loop.
//!
//! Components never touch the page directly; every mutation is a
//! `PageEvent` applied in order by `App::run`.

use tokio::sync::mpsc;

/// Text regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Time,
    Date,
    Location,
    Temperature,
}

/// User actions on the task list. Indices are zero-based row positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Enter pressed in the input field with the given raw text
    Add(String),
    /// Delete button of a row
    Delete(usize),
    /// Checkbox of a row changed to `completed`
    SetCompleted { index: usize, completed: bool },
    /// Checkbox of a row clicked
    Toggle(usize),
    /// "Delete completed" button
    DeleteCompleted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    SetText { region: Region, text: String },
    /// Replace the background image element with one showing `path`
    SetBackground(String),
    Task(TaskCommand),
    Quit,
}

/// Cloneable handle components use to reach the page loop
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<PageEvent>,
}

impl EventSender {
    pub fn new(tx: mpsc::UnboundedSender<PageEvent>) -> Self {
        Self { tx }
    }

    /// Send an event. Returns false once the page loop has stopped.
    pub fn send(&self, event: PageEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn set_text(&self, region: Region, text: impl Into<String>) -> bool {
        self.send(PageEvent::SetText {
            region,
            text: text.into(),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Create a connected sender/receiver pair
pub fn channel() -> (EventSender, mpsc::UnboundedReceiver<PageEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender::new(tx), rx)
}
