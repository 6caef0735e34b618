use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use tokio::task::JoinSet;

use crate::error::Result;
use crate::models::GroupedMenu;

/// Width hint passed to the terminal image protocol.
const IMAGE_WIDTH: &str = "300px";

/// Per-image fetch timeout. The upstream feed sometimes serves dead image
/// links; a hung fetch must not stall rendering.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// An already-encoded inline image escape sequence, ready to print.
#[derive(Debug, Clone)]
pub struct ImageBlob(String);

impl ImageBlob {
    pub fn new(payload: String) -> Self {
        Self(payload)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Render options, possibly downgraded by capability detection.
///
/// `prepare_images` returns an updated copy instead of mutating shared
/// state; callers re-read the returned value.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_images: bool,
}

/// Maps an image URL to a terminal-renderable blob.
#[async_trait]
pub trait ImageRenderer: Send + Sync + 'static {
    /// Whether the current terminal can display inline images at all.
    fn supports_inline(&self) -> bool;

    async fn render_inline(&self, url: &str, width_hint: &str) -> Result<ImageBlob>;
}

/// iTerm2 inline image renderer (OSC 1337 File protocol).
pub struct ItermRenderer {
    client: reqwest::Client,
}

impl ItermRenderer {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageRenderer for ItermRenderer {
    fn supports_inline(&self) -> bool {
        std::env::var("TERM_PROGRAM").is_ok_and(|term| term == "iTerm.app")
    }

    async fn render_inline(&self, url: &str, width_hint: &str) -> Result<ImageBlob> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let encoded = STANDARD.encode(&bytes);
        let payload = format!("\x1b]1337;File=inline=1;width={}:{}\x07", width_hint, encoded);
        Ok(ImageBlob::new(payload))
    }
}

/// Fetch inline image blobs for every grouped item carrying an image URL.
///
/// One fetch task per eligible item, joined as a group: a failed fetch is
/// logged and skipped, never fatal, so the returned map may cover only a
/// subset of the items. When images were not requested, or the terminal
/// cannot display them, the returned options carry `show_images: false`
/// and the map is empty; the capability downgrade is warned about once.
pub async fn prepare_images<R: ImageRenderer>(
    options: RenderOptions,
    grouped: &GroupedMenu,
    renderer: Arc<R>,
) -> (RenderOptions, HashMap<u64, ImageBlob>) {
    if !options.show_images {
        return (options, HashMap::new());
    }

    if !renderer.supports_inline() {
        println!("Sorry, your terminal doesn't support inline images.");
        return (RenderOptions { show_images: false }, HashMap::new());
    }

    let targets: Vec<(u64, String)> = grouped
        .items()
        .filter_map(|item| item.image_url.clone().map(|url| (item.menu_id, url)))
        .collect();

    if targets.is_empty() {
        return (options, HashMap::new());
    }

    let bar = ProgressBar::new(targets.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("Fetching images [{bar:20}] {percent}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut tasks = JoinSet::new();
    for (menu_id, url) in targets {
        let renderer = Arc::clone(&renderer);
        tasks.spawn(async move { (menu_id, renderer.render_inline(&url, IMAGE_WIDTH).await) });
    }

    let mut images = HashMap::new();
    while let Some(settled) = tasks.join_next().await {
        bar.inc(1);
        match settled {
            Ok((menu_id, Ok(blob))) => {
                images.insert(menu_id, blob);
            }
            Ok((menu_id, Err(e))) => {
                warn!("image fetch for menu {} failed: {}", menu_id, e);
            }
            Err(e) => {
                warn!("image fetch task panicked: {}", e);
            }
        }
    }

    bar.finish_and_clear();
    println!("{} complete", console::style("✔").green());

    (options, images)
}
