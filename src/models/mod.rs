pub mod item;
pub mod menu;

pub use item::{Ingredients, MealTime, MenuItem};
pub use menu::{FloorMenu, GroupedMenu};
