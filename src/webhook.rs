use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::alert::AlertEngine;
use crate::amount::RawAmount;
use crate::classifier::SwapClassifier;
use crate::domain::Alert;
use crate::notifier::NotifierHub;

// ============================================================================
// Wire format
// ============================================================================

/// One item of a webhook delivery batch. Every field defaults so that
/// partially-populated items still deserialize; missing pieces simply
/// classify as a non-event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookItem {
    pub transaction: Transaction,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub signature: String,
    pub events: SwapEvents,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SwapEvents {
    pub swap: Vec<SwapLeg>,
}

/// One atomic exchange step within a possibly multi-hop transaction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwapLeg {
    pub token_inputs: Vec<TokenFlow>,
    pub token_outputs: Vec<TokenFlow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenFlow {
    pub mint: String,
    pub raw_token_amount: Option<RawAmount>,
}

// ============================================================================
// Ingest handler
// ============================================================================

pub struct AppState {
    pub classifier: SwapClassifier,
    pub alert_engine: AlertEngine,
    pub notifier: Arc<NotifierHub>,
}

pub fn router(path: &str, state: Arc<AppState>) -> Router {
    Router::new()
        .route(path, post(handle_webhook))
        .with_state(state)
}

/// Classifies each delivered item and collects the alerts that clear the
/// threshold. Malformed items are logged and skipped; they never abort the
/// rest of the batch.
pub fn process_batch(state: &AppState, items: &[Value]) -> Vec<Alert> {
    items
        .iter()
        .filter_map(|raw| {
            let item: WebhookItem = match serde_json::from_value(raw.clone()) {
                Ok(item) => item,
                Err(e) => {
                    warn!("Skipping malformed webhook item: {}", e);
                    return None;
                }
            };

            let swap = state.classifier.classify(&item.transaction);
            debug!(
                "sig={} side={} amount={:.2}",
                item.transaction.signature,
                swap.as_ref().map(|s| s.side.to_string()).unwrap_or_default(),
                swap.as_ref().map(|s| s.amount).unwrap_or(0.0),
            );

            state.alert_engine.should_alert(&swap?)
        })
        .collect()
}

/// The delivery source is always acknowledged with success: alerting
/// problems are ours, not the sender's, and must not cause redelivery.
async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    Json(items): Json<Vec<Value>>,
) -> impl IntoResponse {
    let alerts = process_batch(&state, &items);
    for alert in &alerts {
        state.notifier.send(alert).await;
    }
    (StatusCode::OK, "ok")
}

#[cfg(test)]
mod tests {
    use super::{process_batch, AppState, WebhookItem};
    use crate::alert::AlertEngine;
    use crate::classifier::SwapClassifier;
    use crate::notifier::{ConsoleNotifier, NotifierHub};
    use crate::token_registry::DecimalsRegistry;
    use serde_json::{json, Value};
    use std::sync::Arc;

    const MINT: &str = "MintAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    fn state(threshold: f64) -> AppState {
        AppState {
            classifier: SwapClassifier::new(MINT.to_string(), DecimalsRegistry::new(MINT, 9)),
            alert_engine: AlertEngine::new(threshold),
            notifier: Arc::new(NotifierHub::new(ConsoleNotifier::new(), None)),
        }
    }

    fn buy_item(signature: &str, raw_amount: u64) -> Value {
        json!({
            "transaction": {
                "signature": signature,
                "events": {
                    "swap": [{
                        "tokenInputs": [],
                        "tokenOutputs": [{
                            "mint": MINT,
                            "rawTokenAmount": {
                                "tokenAmount": raw_amount.to_string(),
                                "decimals": 9
                            }
                        }]
                    }]
                }
            }
        })
    }

    #[test]
    fn helius_shaped_payload_deserializes() {
        let item: WebhookItem =
            serde_json::from_value(buy_item("5sig", 1_000_000_000)).expect("should deserialize");
        assert_eq!(item.transaction.signature, "5sig");
        assert_eq!(item.transaction.events.swap.len(), 1);
        assert_eq!(item.transaction.events.swap[0].token_outputs[0].mint, MINT);
    }

    #[test]
    fn item_without_events_deserializes_as_no_swap() {
        let item: WebhookItem =
            serde_json::from_value(json!({"transaction": {"signature": "5sig"}}))
                .expect("should deserialize");
        assert!(item.transaction.events.swap.is_empty());
    }

    #[test]
    fn large_buy_produces_exactly_one_alert() {
        // 50000 tokens at 9 decimals against a 30000 threshold.
        let state = state(30_000.0);
        let alerts = process_batch(&state, &[buy_item("5sig", 50_000_000_000_000)]);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Large BUY Detected");
        assert!(alerts[0].message.contains("BUY 50,000.00 TOKEN"));
        assert!(alerts[0].message.contains("https://solscan.io/tx/5sig"));
    }

    #[test]
    fn below_threshold_swaps_are_suppressed() {
        let state = state(30_000.0);
        let alerts = process_batch(&state, &[buy_item("5sig", 29_999_000_000_000)]);
        assert!(alerts.is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let state = state(30_000.0);
        let alerts = process_batch(&state, &[buy_item("5sig", 30_000_000_000_000)]);
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn malformed_items_do_not_abort_the_batch() {
        let state = state(30_000.0);
        let batch = [
            json!("not an object at all"),
            buy_item("5sig", 50_000_000_000_000),
            json!({"transaction": {"signature": 42}}),
        ];
        let alerts = process_batch(&state, &batch);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message.contains("5sig"));
    }

    #[test]
    fn empty_batch_produces_no_alerts() {
        let state = state(30_000.0);
        assert!(process_batch(&state, &[]).is_empty());
    }

    #[test]
    fn batch_order_is_preserved() {
        let state = state(10.0);
        let alerts = process_batch(
            &state,
            &[
                buy_item("first", 20_000_000_000),
                buy_item("second", 30_000_000_000),
            ],
        );
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].message.contains("first"));
        assert!(alerts[1].message.contains("second"));
    }
}
