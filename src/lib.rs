pub mod alert;
pub mod amount;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod monitor;
pub mod notifier;
pub mod price;
pub mod token_registry;
pub mod utils;
pub mod webhook;

use std::net::SocketAddr;
use std::sync::Arc;

use alert::AlertEngine;
use classifier::SwapClassifier;
use config::AppConfig;
use domain::Alert;
use monitor::PriceDriftMonitor;
use notifier::{ConsoleNotifier, NotifierHub, TelegramNotifier};
use price::DexScreenerPriceProvider;
use token_registry::DecimalsRegistry;
use webhook::AppState;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{info, warn};

pub async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let http_client = reqwest::Client::new();

    let registry = DecimalsRegistry::new(&config.token_mint, config.token_decimals);
    let classifier = SwapClassifier::new(config.token_mint.clone(), registry);
    let alert_engine = AlertEngine::new(config.swap_threshold);
    let price_provider = DexScreenerPriceProvider::new(http_client.clone());

    let console = ConsoleNotifier::new();
    let telegram = TelegramNotifier::maybe_from_config(&config, http_client);
    if telegram.is_some() {
        info!("📱 Telegram notifications enabled");
    } else {
        info!("📱 Telegram notifications disabled (no credentials)");
    }
    let notifier = Arc::new(NotifierHub::new(console, telegram));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let drift_monitor = PriceDriftMonitor::new(config.price_alert_pct);
    let monitor_task = tokio::spawn(monitor::run_price_loop(
        price_provider,
        Arc::clone(&notifier),
        drift_monitor,
        config.token_mint.clone(),
        config.price_poll_secs,
        shutdown_rx,
    ));

    notifier
        .send(&Alert::new(
            "Service Started",
            format!("✅ mintwatch is watching {}", config.token_mint),
        ))
        .await;

    let state = Arc::new(AppState {
        classifier,
        alert_engine,
        notifier: Arc::clone(&notifier),
    });
    let app = webhook::router(&config.webhook_path, state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    info!("👂 Listening for webhooks on {}{}", addr, config.webhook_path);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Webhook edge is down; stop the price monitor before exiting.
    let _ = shutdown_tx.send(true);
    if let Err(e) = monitor_task.await {
        warn!("Price monitor task did not stop cleanly: {}", e);
    }

    info!("👋 mintwatch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
