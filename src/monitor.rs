use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::Alert;
use crate::notifier::NotifierHub;
use crate::price::DexScreenerPriceProvider;

/// Tracks the last price an alert fired at and decides, per sample, whether
/// drift from that point clears the configured percentage.
///
/// Re-baselining on every alert gives the detector hysteresis: oscillation
/// inside the band around the new level stays quiet, no matter how far the
/// price has wandered from where the process started.
#[derive(Debug, Clone)]
pub struct PriceDriftMonitor {
    alert_pct: f64,
    last_alerted_price: Option<f64>,
}

impl PriceDriftMonitor {
    pub fn new(alert_pct: f64) -> Self {
        Self {
            alert_pct,
            last_alerted_price: None,
        }
    }

    /// Feeds one price sample through the detector. Non-positive samples
    /// are treated as unavailable and change nothing. The first usable
    /// sample only establishes the baseline.
    pub fn observe(&mut self, price: f64) -> Option<Alert> {
        if price <= 0.0 {
            return None;
        }

        let baseline = match self.last_alerted_price {
            None => {
                self.last_alerted_price = Some(price);
                return None;
            }
            Some(baseline) => baseline,
        };

        let change_pct = (price - baseline) / baseline * 100.0;
        if change_pct.abs() >= self.alert_pct {
            self.last_alerted_price = Some(price);
            Some(Alert::new(
                "Price Alert",
                format!("📈 Price {:.4}$ ({:+.2}%)", price, change_pct),
            ))
        } else {
            None
        }
    }
}

/// Polls the price source forever, at a fixed interval, until the shutdown
/// signal flips. Every failure mode inside a tick is logged and skipped;
/// nothing here can end the loop early.
pub async fn run_price_loop(
    provider: DexScreenerPriceProvider,
    notifier: Arc<NotifierHub>,
    mut monitor: PriceDriftMonitor,
    mint: String,
    poll_secs: u64,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(Duration::from_secs(poll_secs.max(1)));
    info!("📊 Price monitor polling every {}s", poll_secs.max(1));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match provider.price_usd(&mint).await {
                    Some(price) => {
                        debug!("price sample {}: {:.6}", mint, price);
                        if let Some(alert) = monitor.observe(price) {
                            notifier.send(&alert).await;
                        }
                    }
                    None => warn!("Price unavailable for {}; skipping tick", mint),
                }
            }
            _ = shutdown.changed() => {
                info!("📊 Price monitor stopping");
                break;
            }
        }
    }
}
