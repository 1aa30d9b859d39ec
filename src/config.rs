use std::env;

use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub token_mint: String,
    pub token_decimals: u32,
    pub listen_port: u16,
    pub webhook_path: String,
    pub swap_threshold: f64,
    pub price_poll_secs: u64,
    pub price_alert_pct: f64,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let token_mint = env::var("TOKEN_MINT")
            .map_err(|_| anyhow!("TOKEN_MINT must be set in .env"))?
            .trim()
            .to_string();
        if token_mint.is_empty() {
            return Err(anyhow!("TOKEN_MINT cannot be empty"));
        }

        let token_decimals = env::var("TOKEN_DECIMALS")
            .unwrap_or_else(|_| "9".to_string())
            .parse()
            .unwrap_or(9);

        let listen_port = env::var("LISTEN_PORT")
            .unwrap_or_else(|_| "8787".to_string())
            .parse()
            .unwrap_or(8787);

        let webhook_path = normalize_path(
            &env::var("WEBHOOK_PATH").unwrap_or_else(|_| "/helius".to_string()),
        );

        let swap_threshold = env::var("THRESHOLD")
            .unwrap_or_else(|_| "30000".to_string())
            .parse()
            .unwrap_or(30000.0);

        let price_poll_secs = env::var("PRICE_POLL")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60);

        let price_alert_pct = env::var("PRICE_ALERT_PCT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5.0);

        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN").ok();
        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID").ok();

        Ok(Self {
            token_mint,
            token_decimals,
            listen_port,
            webhook_path,
            swap_threshold,
            price_poll_secs,
            price_alert_pct,
            telegram_bot_token,
            telegram_chat_id,
        })
    }
}

/// Axum route paths must begin with a slash.
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "/helius".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
