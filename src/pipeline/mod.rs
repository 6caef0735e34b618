pub mod filter;
pub mod group;
pub mod schedule;

pub use filter::{filter_items, ExclusionTag, FilterCriteria};
pub use group::{group_and_sort, sort_by_floor};
pub use schedule::{format_for_display, resolve_date, resolve_meal_time, DINNER_CUTOFF_HOUR};
