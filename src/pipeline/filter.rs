use log::debug;

use crate::models::{MealTime, MenuItem};

/// Dietary/category exclusion recognized by the filter pipeline.
///
/// The recognized set is a fixed allow-list: the seven ingredient flags
/// reported by the feed, plus "halal" which matches on the menu category
/// name because halal status is not itself an ingredient flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionTag {
    Alcohol,
    Beef,
    Chicken,
    Fish,
    Healthy,
    Mutton,
    Pork,
    Halal,
}

impl ExclusionTag {
    /// Parse a user-supplied tag name, case-insensitively.
    ///
    /// Unrecognized names yield `None`; the pipeline treats those as a
    /// no-op rather than an error.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "alcohol" => Some(Self::Alcohol),
            "beef" => Some(Self::Beef),
            "chicken" => Some(Self::Chicken),
            "fish" => Some(Self::Fish),
            "healthy" => Some(Self::Healthy),
            "mutton" => Some(Self::Mutton),
            "pork" => Some(Self::Pork),
            "halal" => Some(Self::Halal),
            _ => None,
        }
    }

    /// Whether this tag excludes the given item.
    fn excludes(self, item: &MenuItem) -> bool {
        let ingredients = &item.ingredients;
        match self {
            Self::Alcohol => ingredients.alcohol,
            Self::Beef => ingredients.beef,
            Self::Chicken => ingredients.chicken,
            Self::Fish => ingredients.fish,
            Self::Healthy => ingredients.healthy,
            Self::Mutton => ingredients.mutton,
            Self::Pork => ingredients.pork,
            Self::Halal => item.menu_category == "Halal",
        }
    }
}

/// Filters resolved once per invocation from the command-line options.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    /// Restrict to a single floor (matched as "{floor}F") when set.
    pub floor: Option<u32>,

    /// Serving period to display; always applied.
    pub meal_time: MealTime,

    /// Raw user-supplied exclusion tag names.
    pub exclude: Vec<String>,

    /// Keep only items flagged healthy.
    pub healthy_only: bool,
}

/// Apply the filter pipeline: floor, then meal time, then exclusions,
/// then healthy-only.
pub fn filter_items(items: Vec<MenuItem>, criteria: &FilterCriteria) -> Vec<MenuItem> {
    if items.is_empty() {
        return items;
    }

    let mut items = items;

    if let Some(floor) = criteria.floor {
        let cafeteria_id = format!("{}F", floor);
        items.retain(|item| item.cafeteria_id == cafeteria_id);
        debug!("{} items after floor filter", items.len());
    }

    items.retain(|item| item.meal_time == criteria.meal_time);
    debug!("{} items after meal time filter", items.len());

    for name in &criteria.exclude {
        let Some(tag) = ExclusionTag::parse(name) else {
            debug!("ignoring unrecognized exclusion tag '{}'", name);
            continue;
        };
        items.retain(|item| !tag.excludes(item));
    }

    if criteria.healthy_only {
        items.retain(|item| item.ingredients.healthy);
    }

    debug!("{} items after filtering", items.len());
    items
}
