use serde_json::Value;
use tracing::warn;

const DEXSCREENER_BASE_URL: &str = "https://api.dexscreener.com";

/// Fetches the current USD price for a mint from DexScreener, reading the
/// first available trading pair.
#[derive(Debug, Clone)]
pub struct DexScreenerPriceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl DexScreenerPriceProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, DEXSCREENER_BASE_URL.to_string())
    }

    pub fn with_base_url(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn price_usd(&self, mint: &str) -> Option<f64> {
        let url = format!("{}/latest/dex/tokens/{}", self.base_url, mint);

        match self.client.get(&url).send().await {
            Ok(response) => match response.json::<Value>().await {
                Ok(json) => first_pair_price(&json),
                Err(e) => {
                    warn!("Failed to parse DexScreener response for {}: {}", mint, e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to fetch price for {}: {}", mint, e);
                None
            }
        }
    }
}

/// DexScreener serves `priceUsd` as a string on most pairs, but a bare
/// number shows up too.
fn first_pair_price(json: &Value) -> Option<f64> {
    let pair = json.get("pairs")?.as_array()?.first()?;
    match pair.get("priceUsd") {
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
}
