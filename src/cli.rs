use clap::{Parser, ValueEnum};

use crate::models::MealTime;

/// crimson-menu — display the Crimson House cafeteria menu.
#[derive(Parser, Debug)]
#[command(name = "crimson-menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Menu date in YYYYMMDD format. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Only show menus from this cafeteria floor (e.g. 9 or 22).
    #[arg(short, long)]
    pub floor: Option<u32>,

    /// Serving period to display. Defaults to lunch before 15:00, dinner after.
    #[arg(short, long, value_enum)]
    pub time: Option<TimeArg>,

    /// Dietary tags to exclude, comma-separated
    /// (alcohol, beef, chicken, fish, healthy, mutton, pork, halal).
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Only show items flagged as healthy.
    #[arg(long)]
    pub healthy_only: bool,

    /// Fetch and display menu images inline (iTerm2 only).
    #[arg(long)]
    pub show_images: bool,
}

/// Serving period as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TimeArg {
    Lunch,
    Dinner,
}

impl From<TimeArg> for MealTime {
    fn from(value: TimeArg) -> Self {
        match value {
            TimeArg::Lunch => MealTime::Lunch,
            TimeArg::Dinner => MealTime::Dinner,
        }
    }
}
