use crate::models::MenuItem;

/// One cafeteria floor and its display-ready items.
#[derive(Debug, Clone)]
pub struct FloorMenu {
    /// Floor identifier, e.g. "9F".
    pub id: String,

    /// Items for this floor, sorted by menu category, one per category.
    pub items: Vec<MenuItem>,
}

/// Filtered menu items partitioned by floor.
///
/// Floors appear in the order they were first seen in the filtered item
/// list; floors with no matching items are absent entirely.
#[derive(Debug, Clone, Default)]
pub struct GroupedMenu {
    floors: Vec<FloorMenu>,
}

impl GroupedMenu {
    pub fn from_floors(floors: Vec<FloorMenu>) -> Self {
        Self { floors }
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn floors(&self) -> &[FloorMenu] {
        &self.floors
    }

    /// All items across all floors, in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.floors.iter().flat_map(|floor| floor.items.iter())
    }
}
