use crate::domain::{Alert, Swap};
use crate::utils::format_amount;

#[derive(Debug, Clone)]
pub struct AlertEngine {
    threshold: f64,
}

impl AlertEngine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The threshold gate is inclusive: a swap exactly at the threshold
    /// still alerts.
    pub fn should_alert(&self, swap: &Swap) -> Option<Alert> {
        if swap.amount >= self.threshold {
            Some(Alert::new(
                format!("Large {} Detected", swap.side),
                format!(
                    "💸 {} {} TOKEN\nhttps://solscan.io/tx/{}",
                    swap.side,
                    format_amount(swap.amount),
                    swap.signature
                ),
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AlertEngine;
    use crate::domain::{Side, Swap};

    fn swap(side: Side, amount: f64) -> Swap {
        Swap {
            signature: "3xAmpleSig".to_string(),
            side,
            amount,
        }
    }

    #[test]
    fn triggers_above_threshold() {
        let engine = AlertEngine::new(30_000.0);
        assert!(engine.should_alert(&swap(Side::Buy, 50_000.0)).is_some());
    }

    #[test]
    fn triggers_exactly_at_threshold() {
        let engine = AlertEngine::new(30_000.0);
        assert!(engine.should_alert(&swap(Side::Sell, 30_000.0)).is_some());
    }

    #[test]
    fn ignores_below_threshold() {
        let engine = AlertEngine::new(30_000.0);
        assert!(engine.should_alert(&swap(Side::Buy, 29_999.0)).is_none());
    }

    #[test]
    fn message_carries_side_amount_and_link() {
        let engine = AlertEngine::new(30_000.0);
        let alert = engine
            .should_alert(&swap(Side::Buy, 50_000.0))
            .expect("should alert");

        assert_eq!(alert.title, "Large BUY Detected");
        assert!(alert.message.contains("BUY"));
        assert!(alert.message.contains("50,000.00"));
        assert!(alert.message.contains("https://solscan.io/tx/3xAmpleSig"));
    }

    #[test]
    fn sell_side_is_reported_as_sell() {
        let engine = AlertEngine::new(10.0);
        let alert = engine
            .should_alert(&swap(Side::Sell, 12.5))
            .expect("should alert");
        assert!(alert.message.contains("SELL 12.50 TOKEN"));
    }
}
