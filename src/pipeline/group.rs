use crate::models::{FloorMenu, GroupedMenu, MenuItem};

/// Stable sort by numeric floor so 9F displays before 22F.
///
/// Items whose cafeteria id has no parseable floor number sort last.
pub fn sort_by_floor(items: &mut [MenuItem]) {
    items.sort_by_key(|item| item.floor_number().unwrap_or(u32::MAX));
}

/// Partition filtered items by floor and sort each floor's items by
/// menu category.
///
/// Floors appear in the order they are first seen. Within a floor, a
/// second item with an already-seen menu category is dropped (the
/// upstream feed occasionally repeats category entries); the first
/// occurrence wins. Pure function, idempotent over its own output.
pub fn group_and_sort(items: Vec<MenuItem>) -> GroupedMenu {
    let mut floors: Vec<FloorMenu> = Vec::new();

    for item in items {
        let index = match floors.iter().position(|f| f.id == item.cafeteria_id) {
            Some(index) => index,
            None => {
                floors.push(FloorMenu {
                    id: item.cafeteria_id.clone(),
                    items: Vec::new(),
                });
                floors.len() - 1
            }
        };

        let floor = &mut floors[index];
        if floor
            .items
            .iter()
            .any(|existing| existing.menu_category == item.menu_category)
        {
            continue;
        }
        floor.items.push(item);
    }

    for floor in &mut floors {
        floor.items.sort_by(|a, b| a.menu_category.cmp(&b.menu_category));
    }

    GroupedMenu::from_floors(floors)
}
