use serde::Deserialize;
use serde_json::Value;

/// A token amount as delivered by the event source. Either a structured
/// object carrying its own precision, or a bare numeric string/number that
/// relies on the registry for decimals.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Structured {
        #[serde(rename = "tokenAmount")]
        token_amount: Option<Value>,
        decimals: Option<u32>,
    },
    Bare(Value),
}

/// Converts a raw integer-scale amount into its human-readable value.
/// Malformed or missing input normalizes to 0.0, never an error.
pub fn normalize(raw: Option<&RawAmount>, fallback_decimals: u32) -> f64 {
    let (value, decimals) = match raw {
        Some(RawAmount::Structured {
            token_amount,
            decimals,
        }) => (
            token_amount.as_ref().map_or(0.0, numeric_value),
            decimals.unwrap_or(fallback_decimals),
        ),
        Some(RawAmount::Bare(value)) => (numeric_value(value), fallback_decimals),
        None => (0.0, fallback_decimals),
    };

    let ui_amount = value / 10f64.powi(decimals as i32);
    if ui_amount.is_finite() {
        ui_amount.max(0.0)
    } else {
        0.0
    }
}

fn numeric_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
