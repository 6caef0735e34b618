use pretty_assertions::assert_eq;

use crimson_house_menu_rs::models::{Ingredients, MealTime, MenuItem};
use crimson_house_menu_rs::pipeline::{
    filter_items, format_for_display, group_and_sort, resolve_date, resolve_meal_time,
    sort_by_floor, FilterCriteria,
};

fn make_item(floor: &str, meal: MealTime, category: &str, title: &str, price: u32) -> MenuItem {
    MenuItem {
        cafeteria_id: floor.to_string(),
        meal_time: meal,
        menu_category: category.to_string(),
        title: title.to_string(),
        price,
        menu_id: 0,
        image_url: None,
        ingredients: Ingredients::default(),
    }
}

fn lunch_criteria() -> FilterCriteria {
    FilterCriteria {
        floor: None,
        meal_time: MealTime::Lunch,
        exclude: Vec::new(),
        healthy_only: false,
    }
}

fn mixed_items() -> Vec<MenuItem> {
    let mut pork_dish = make_item("9F", MealTime::Lunch, "Main B", "Tonkatsu", 300);
    pork_dish.ingredients.pork = true;

    let mut salad = make_item("22F", MealTime::Lunch, "Salad", "Green Salad", 150);
    salad.ingredients.healthy = true;

    vec![
        make_item("9F", MealTime::Lunch, "Main A", "Grilled Fish Set", 0),
        pork_dish,
        make_item("9F", MealTime::Dinner, "Main A", "Evening Curry", 250),
        make_item("22F", MealTime::Lunch, "Halal", "Halal Plate", 400),
        salad,
    ]
}

#[test]
fn filter_output_is_subset_satisfying_criteria() {
    let items = mixed_items();
    let titles: Vec<String> = items.iter().map(|i| i.title.clone()).collect();

    let criteria = FilterCriteria {
        exclude: vec!["pork".to_string()],
        ..lunch_criteria()
    };
    let filtered = filter_items(items, &criteria);

    for item in &filtered {
        assert!(titles.contains(&item.title), "no items invented");
        assert_eq!(item.meal_time, MealTime::Lunch);
        assert!(!item.ingredients.pork);
    }
}

#[test]
fn floor_filter_restricts_to_one_floor() {
    let criteria = FilterCriteria {
        floor: Some(9),
        ..lunch_criteria()
    };
    let filtered = filter_items(mixed_items(), &criteria);

    assert!(!filtered.is_empty());
    for item in &filtered {
        assert_eq!(item.cafeteria_id, "9F");
    }
}

#[test]
fn omitted_floor_keeps_all_floors() {
    let filtered = filter_items(mixed_items(), &lunch_criteria());

    let floors: Vec<&str> = filtered.iter().map(|i| i.cafeteria_id.as_str()).collect();
    assert!(floors.contains(&"9F"));
    assert!(floors.contains(&"22F"));
}

#[test]
fn scenario_lunch_items_retained_regardless_of_price() {
    let items = vec![
        make_item("9F", MealTime::Lunch, "Main A", "Free Dish", 0),
        make_item("9F", MealTime::Lunch, "Main B", "Priced Dish", 250),
    ];

    let filtered = filter_items(items, &lunch_criteria());
    assert_eq!(filtered.len(), 2);
}

#[test]
fn scenario_healthy_only_keeps_only_flagged_items() {
    let criteria = FilterCriteria {
        healthy_only: true,
        ..lunch_criteria()
    };
    let filtered = filter_items(mixed_items(), &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Green Salad");
}

#[test]
fn scenario_halal_excluded_by_category() {
    let criteria = FilterCriteria {
        exclude: vec!["halal".to_string()],
        ..lunch_criteria()
    };
    let filtered = filter_items(mixed_items(), &criteria);

    assert!(filtered.iter().all(|i| i.menu_category != "Halal"));
}

#[test]
fn scenario_bogus_exclusion_tag_is_noop() {
    let baseline = filter_items(mixed_items(), &lunch_criteria());

    let criteria = FilterCriteria {
        exclude: vec!["bogus".to_string()],
        ..lunch_criteria()
    };
    let with_bogus = filter_items(mixed_items(), &criteria);

    let titles = |items: &[MenuItem]| -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    };
    assert_eq!(titles(&baseline), titles(&with_bogus));
}

#[test]
fn exclusion_tags_match_case_insensitively() {
    let criteria = FilterCriteria {
        exclude: vec!["PORK".to_string()],
        ..lunch_criteria()
    };
    let filtered = filter_items(mixed_items(), &criteria);

    assert!(filtered.iter().all(|i| !i.ingredients.pork));
}

#[test]
fn grouping_never_repeats_a_category_per_floor() {
    let items = vec![
        make_item("9F", MealTime::Lunch, "Main A", "First", 0),
        make_item("9F", MealTime::Lunch, "Main A", "Second", 100),
        make_item("22F", MealTime::Lunch, "Main A", "Other Floor", 0),
    ];

    let grouped = group_and_sort(items);
    for floor in grouped.floors() {
        let mut seen = Vec::new();
        for item in &floor.items {
            assert!(!seen.contains(&item.menu_category));
            seen.push(item.menu_category.clone());
        }
    }

    // 22F keeps its own Main A; dedup is floor-local
    assert_eq!(grouped.floors().len(), 2);
}

#[test]
fn scenario_duplicate_category_keeps_first_title() {
    let items = vec![
        make_item("9F", MealTime::Lunch, "Main A", "First", 0),
        make_item("9F", MealTime::Lunch, "Main A", "Second", 100),
    ];

    let grouped = group_and_sort(items);
    assert_eq!(grouped.floors()[0].items.len(), 1);
    assert_eq!(grouped.floors()[0].items[0].title, "First");
}

#[test]
fn grouped_floors_are_sorted_by_category() {
    let filtered = filter_items(mixed_items(), &lunch_criteria());
    let grouped = group_and_sort(filtered);

    for floor in grouped.floors() {
        for pair in floor.items.windows(2) {
            assert!(pair[0].menu_category <= pair[1].menu_category);
        }
    }
}

#[test]
fn scenario_empty_input_groups_to_empty() {
    assert!(group_and_sort(Vec::new()).is_empty());
}

#[test]
fn floor_sort_orders_numerically_before_grouping() {
    let mut items = vec![
        make_item("22F", MealTime::Lunch, "Main A", "Up", 0),
        make_item("9F", MealTime::Lunch, "Main A", "Down", 0),
    ];

    sort_by_floor(&mut items);
    let grouped = group_and_sort(items);

    let ids: Vec<&str> = grouped.floors().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["9F", "22F"]);
}

#[test]
fn date_round_trip() {
    let date = resolve_date(Some("19960101"));
    assert_eq!(format_for_display(&date).unwrap(), "1996/01/01");
}

#[test]
fn malformed_explicit_date_is_rejected() {
    let date = resolve_date(Some("1996-01-01"));
    assert!(format_for_display(&date).is_err());
}

#[test]
fn meal_time_resolution() {
    assert_eq!(resolve_meal_time(None, 11), MealTime::Lunch);
    assert_eq!(resolve_meal_time(None, 19), MealTime::Dinner);
    assert_eq!(resolve_meal_time(Some(MealTime::Dinner), 11), MealTime::Dinner);
}
