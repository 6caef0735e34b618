use chrono::Local;

use crate::error::{MenuError, Result};
use crate::models::MealTime;

/// Hour of day (24h clock) from which the dinner menu is shown.
pub const DINNER_CUTOFF_HOUR: u32 = 15;

/// Effective query date: the explicit value when given, otherwise today's
/// local date as YYYYMMDD.
pub fn resolve_date(explicit: Option<&str>) -> String {
    match explicit {
        Some(date) => date.to_string(),
        None => Local::now().format("%Y%m%d").to_string(),
    }
}

/// Reformat a YYYYMMDD date as YYYY/MM/DD for the menu title.
///
/// Anything that is not exactly eight ASCII digits is rejected rather
/// than truncated.
pub fn format_for_display(date: &str) -> Result<String> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MenuError::MalformedDate(date.to_string()));
    }

    Ok(format!("{}/{}/{}", &date[0..4], &date[4..6], &date[6..8]))
}

/// Serving period in effect: the explicit choice when given, otherwise
/// lunch before the dinner cutoff and dinner after.
pub fn resolve_meal_time(explicit: Option<MealTime>, now_hour: u32) -> MealTime {
    match explicit {
        Some(meal_time) => meal_time,
        None if now_hour < DINNER_CUTOFF_HOUR => MealTime::Lunch,
        None => MealTime::Dinner,
    }
}
