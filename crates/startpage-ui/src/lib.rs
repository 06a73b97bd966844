pub mod models;
pub mod render;
pub mod services;

pub use models::Page;
pub use render::{frame, header_update, Screen};
