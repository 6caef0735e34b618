use std::collections::HashMap;

use console::Style;

use crate::interface::images::ImageBlob;
use crate::models::{GroupedMenu, MealTime};

/// Fixed margin between the category column and the title column.
const PAD_MARGIN: usize = 4;

/// Styling roles for terminal output.
#[derive(Debug, Clone, Copy)]
pub enum Emphasis {
    /// The menu title line.
    Title,
    /// A floor header line.
    Floor,
    /// Bold inline text (category column, price suffix).
    Strong,
}

/// Apply a styling role to a piece of text.
///
/// All ANSI styling goes through here; the rest of the renderer deals in
/// plain strings.
pub fn emphasize(text: &str, emphasis: Emphasis) -> String {
    let style = match emphasis {
        Emphasis::Title => Style::new().red().bold().underlined(),
        Emphasis::Floor => Style::new().bold().underlined(),
        Emphasis::Strong => Style::new().bold(),
    };

    style.apply_to(text).to_string()
}

/// The title line printed above the menu body.
pub fn title_line(meal_time: MealTime, display_date: &str) -> String {
    emphasize(
        &format!("Crimson House {} Menu for {}", meal_time, display_date),
        Emphasis::Title,
    )
}

/// Render the grouped menu as output lines.
///
/// With images off, category labels are padded to the longest category in
/// the grouped set plus a fixed margin. With images on, no padding is
/// applied (inline image blobs break column alignment anyway) and each
/// item line is followed by its blob when one was fetched.
pub fn render_lines(
    grouped: &GroupedMenu,
    show_images: bool,
    images: &HashMap<u64, ImageBlob>,
) -> Vec<String> {
    if grouped.is_empty() {
        return vec!["No menu found!".to_string()];
    }

    let pad_width = if show_images {
        0
    } else {
        grouped
            .items()
            .map(|item| item.menu_category.len())
            .max()
            .unwrap_or(0)
            + PAD_MARGIN
    };

    let mut lines = Vec::new();
    for floor in grouped.floors() {
        lines.push(String::new());
        lines.push(emphasize(&floor.id, Emphasis::Floor));

        for item in &floor.items {
            let category = format!("{:<width$}", item.menu_category, width = pad_width);
            let mut line = format!("{} {}", emphasize(&category, Emphasis::Strong), item.title);

            if item.price > 0 {
                line.push_str(&emphasize(&format!(" (¥{})", item.price), Emphasis::Strong));
            }

            if item.ingredients.healthy {
                line.push_str(" (healthy)");
            }

            lines.push(line);

            if show_images {
                if let Some(blob) = images.get(&item.menu_id) {
                    lines.push(blob.as_str().to_string());
                }
            }
        }
    }

    lines
}
