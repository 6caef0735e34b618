pub mod api;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pipeline;

pub use error::{MenuError, Result};
pub use models::{MealTime, MenuItem};
