use std::sync::Arc;

use chrono::{Local, Timelike};
use clap::Parser;

use crimson_house_menu_rs::api::{HttpMenuSource, MenuSource};
use crimson_house_menu_rs::cli::Cli;
use crimson_house_menu_rs::error::Result;
use crimson_house_menu_rs::interface::{
    prepare_images, render_lines, title_line, ItermRenderer, RenderOptions,
};
use crimson_house_menu_rs::pipeline::{
    filter_items, format_for_display, group_and_sort, resolve_date, resolve_meal_time,
    sort_by_floor, FilterCriteria,
};

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // A malformed explicit date fails here, before any network call.
    let date = resolve_date(cli.date.as_deref());
    let display_date = format_for_display(&date)?;
    let meal_time = resolve_meal_time(cli.time.map(Into::into), Local::now().hour());

    let source = HttpMenuSource::new();
    let items = source.fetch_menu(&date).await?;

    let criteria = FilterCriteria {
        floor: cli.floor,
        meal_time,
        exclude: cli.exclude,
        healthy_only: cli.healthy_only,
    };

    let mut filtered = filter_items(items, &criteria);
    sort_by_floor(&mut filtered);
    let grouped = group_and_sort(filtered);

    println!("{}", title_line(meal_time, &display_date));

    let renderer = Arc::new(ItermRenderer::new()?);
    let options = RenderOptions {
        show_images: cli.show_images,
    };
    let (options, images) = prepare_images(options, &grouped, renderer).await;

    for line in render_lines(&grouped, options.show_images, &images) {
        println!("{}", line);
    }

    Ok(())
}
