use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use crate::error::{MenuError, Result};
use crate::models::MenuItem;

const API_URL: &str =
    "http://rakuten-towerman.azurewebsites.net/towerman-restapi/rest/cafeteria/menulist";

/// Response envelope returned by the menu list endpoint.
///
/// The API reports domain failures in-band: `result` is "SUCCESS" on a
/// good response, anything else comes with an `errorMessage`.
#[derive(Debug, Deserialize)]
struct MenuResponse {
    result: String,

    #[serde(default)]
    data: Vec<MenuItem>,

    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
}

/// Source of raw menu items for a given date.
#[async_trait]
pub trait MenuSource {
    /// Fetch all menu items for a YYYYMMDD date.
    async fn fetch_menu(&self, date: &str) -> Result<Vec<MenuItem>>;
}

/// HTTP-backed menu source talking to the cafeteria REST API.
pub struct HttpMenuSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMenuSource {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpMenuSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn fetch_menu(&self, date: &str) -> Result<Vec<MenuItem>> {
        let url = format!("{}?menuDate={}", self.base_url, date);
        debug!("fetching menu from {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: MenuResponse = response.json().await?;

        if body.result != "SUCCESS" {
            return Err(MenuError::Api(
                body.error_message
                    .unwrap_or_else(|| "unknown API error".to_string()),
            ));
        }

        debug!("fetched {} menu items", body.data.len());
        Ok(body.data)
    }
}
