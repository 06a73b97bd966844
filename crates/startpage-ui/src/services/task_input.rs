//! Task list input from a line-oriented reader (stdin in the binary).
//!
//! A plain line is text submitted with Enter. Row commands use 1-based
//! positions as shown on screen:
//!
//! | line | action |
//! |---|---|
//! | `:done N` / `:undo N` | set row N's checkbox |
//! | `:toggle N` | click row N's checkbox |
//! | `:rm N` | row N's delete button |
//! | `:clear` | delete completed tasks |
//! | `:q` | quit |
//! | `::text` | add `:text` literally |

use std::io::BufRead;

use anyhow::Result;
use startpage_core::{Component, ComponentContext, PageEvent, TaskCommand};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Translate one input line into a page event. `None` for malformed commands.
pub fn parse_line(line: &str) -> Option<PageEvent> {
    let trimmed = line.trim();
    if let Some(literal) = trimmed.strip_prefix("::") {
        return Some(add(&format!(":{}", literal)));
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return Some(add(line));
    };

    let mut parts = command.split_whitespace();
    let verb = parts.next()?;
    let row = parts.next().and_then(parse_row);
    if parts.next().is_some() {
        return None;
    }

    let task = match (verb, row) {
        ("q", None) => return Some(PageEvent::Quit),
        ("clear", None) => TaskCommand::DeleteCompleted,
        ("done", Some(index)) => TaskCommand::SetCompleted {
            index,
            completed: true,
        },
        ("undo", Some(index)) => TaskCommand::SetCompleted {
            index,
            completed: false,
        },
        ("toggle", Some(index)) => TaskCommand::Toggle(index),
        ("rm", Some(index)) => TaskCommand::Delete(index),
        _ => return None,
    };
    Some(PageEvent::Task(task))
}

fn add(text: &str) -> PageEvent {
    PageEvent::Task(TaskCommand::Add(text.to_string()))
}

/// 1-based on screen, 0-based in commands
fn parse_row(s: &str) -> Option<usize> {
    s.parse::<usize>().ok()?.checked_sub(1)
}

/// Read `reader` on a dedicated OS thread, forwarding each line.
///
/// Blocking reads cannot be cancelled, so the thread is detached: it never
/// holds up runtime shutdown and exits on EOF or once the receiver is gone.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::UnboundedReceiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let spawned = std::thread::Builder::new()
        .name("task-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to read task input: {}", e);
                        break;
                    }
                }
            }
            tracing::debug!("Task input closed");
        });

    if let Err(e) = spawned {
        tracing::error!("Failed to start task input thread: {}", e);
    }
    rx
}

pub struct TaskInputComponent {
    lines: Option<mpsc::UnboundedReceiver<String>>,
    handle: Option<JoinHandle<()>>,
}

impl TaskInputComponent {
    /// Take input lines from a channel
    pub fn new(lines: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            lines: Some(lines),
            handle: None,
        }
    }

    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self::new(spawn_line_reader(reader))
    }

    pub fn stdin() -> Self {
        Self::from_reader(std::io::BufReader::new(std::io::stdin()))
    }
}

impl Component for TaskInputComponent {
    fn id(&self) -> &str {
        "task-input"
    }

    fn name(&self) -> &str {
        "Task Input"
    }

    fn start(&mut self, ctx: &ComponentContext) -> Result<()> {
        let Some(mut lines) = self.lines.take() else {
            anyhow::bail!("task input already started");
        };
        let events = ctx.events.clone();

        self.handle = Some(tokio::spawn(async move {
            while let Some(line) = lines.recv().await {
                match parse_line(&line) {
                    Some(event) => {
                        if !events.send(event) {
                            break;
                        }
                    }
                    None => tracing::warn!("Unknown command: {}", line.trim()),
                }
            }
        }));

        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        Ok(())
    }
}
