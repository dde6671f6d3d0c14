use anyhow::{Context, Error, Result};
use reqwest::Client;
use tracing::debug;

use super::nbp_dto::NbpTableDto;

pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl";

/// Fetches the current table of mid-rates and returns its first entry.
/// The endpoint serves a JSON array of tables; one is published per
/// trading day.
pub async fn get_rate_table(client: &Client, base_url: &str) -> Result<NbpTableDto> {
    let url = format!("{}/api/exchangerates/tables/a/?format=json", base_url);
    debug!(%url, "requesting exchange rate table");

    let res = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let tables = serde_json::from_str::<Vec<NbpTableDto>>(&text)
        .context("Failed to decode exchange rate table payload")?;

    tables
        .into_iter()
        .next()
        .ok_or_else(|| Error::msg("Exchange rate response contained no tables"))
}
