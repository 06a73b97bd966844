pub mod background_model;
pub mod page_model;
pub mod time_model;

pub use background_model::{BackgroundSelector, Bucket};
pub use page_model::{Page, TaskInput};
pub use time_model::{format_date, format_time, genitive_month};
