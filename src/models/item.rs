use serde::{Deserialize, Serialize};

/// Serving period for a menu item.
///
/// The API encodes this as an integer: 1 = lunch, 2 = dinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MealTime {
    Lunch,
    Dinner,
}

impl TryFrom<u8> for MealTime {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MealTime::Lunch),
            2 => Ok(MealTime::Dinner),
            other => Err(format!("unknown meal time code: {}", other)),
        }
    }
}

impl From<MealTime> for u8 {
    fn from(value: MealTime) -> Self {
        match value {
            MealTime::Lunch => 1,
            MealTime::Dinner => 2,
        }
    }
}

impl std::fmt::Display for MealTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealTime::Lunch => write!(f, "Lunch"),
            MealTime::Dinner => write!(f, "Dinner"),
        }
    }
}

/// Dietary flags reported by the feed for a single dish.
///
/// Missing flags deserialize as false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredients {
    pub alcohol: bool,
    pub beef: bool,
    pub chicken: bool,
    pub fish: bool,
    pub healthy: bool,
    pub mutton: bool,
    pub pork: bool,
}

/// One dish from the cafeteria feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Floor identifier, e.g. "9F" or "22F".
    #[serde(rename = "cafeteriaId")]
    pub cafeteria_id: String,

    #[serde(rename = "mealTime")]
    pub meal_time: MealTime,

    /// Dish classification label, e.g. "Main A" or "Halal". Unique per
    /// floor in the displayed output.
    #[serde(rename = "menuCategory", alias = "menuType")]
    pub menu_category: String,

    pub title: String,

    /// Price in yen; 0 means not priced / included.
    #[serde(default)]
    pub price: u32,

    #[serde(rename = "menuId")]
    pub menu_id: u64,

    #[serde(rename = "imageUrl", alias = "imageURL", default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub ingredients: Ingredients,
}

impl MenuItem {
    /// Numeric floor parsed from the cafeteria id ("9F" -> 9).
    pub fn floor_number(&self) -> Option<u32> {
        self.cafeteria_id.strip_suffix('F').and_then(|n| n.parse().ok())
    }
}
