pub mod todo;

pub use todo::{Task, TaskList, TaskState};
