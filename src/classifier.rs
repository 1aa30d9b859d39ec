use crate::amount::normalize;
use crate::domain::{Side, Swap};
use crate::token_registry::DecimalsRegistry;
use crate::webhook::Transaction;

/// Classifies a transaction's swap legs into a net buy or sell of the
/// watched mint.
///
/// Swap events are recorded from the pool's perspective: the watched token
/// appearing in a leg's inputs is leaving the traders' side (a sell), while
/// the watched token appearing in outputs is entering it (a buy). Summing
/// across all legs nets out multi-hop routes that touch the mint on both
/// sides.
#[derive(Debug, Clone)]
pub struct SwapClassifier {
    watched_mint: String,
    registry: DecimalsRegistry,
}

impl SwapClassifier {
    pub fn new(watched_mint: String, registry: DecimalsRegistry) -> Self {
        Self {
            watched_mint,
            registry,
        }
    }

    /// Returns `None` for transactions with no swap event and for ties
    /// (token in equals token out, including both zero).
    pub fn classify(&self, tx: &Transaction) -> Option<Swap> {
        let mut token_in = 0.0;
        let mut token_out = 0.0;

        for leg in &tx.events.swap {
            for input in &leg.token_inputs {
                if input.mint == self.watched_mint {
                    token_out += normalize(
                        input.raw_token_amount.as_ref(),
                        self.registry.decimals_for(&input.mint),
                    );
                }
            }
            for output in &leg.token_outputs {
                if output.mint == self.watched_mint {
                    token_in += normalize(
                        output.raw_token_amount.as_ref(),
                        self.registry.decimals_for(&output.mint),
                    );
                }
            }
        }

        if token_in > token_out {
            Some(Swap {
                signature: tx.signature.clone(),
                side: Side::Buy,
                amount: token_in,
            })
        } else if token_out > token_in {
            Some(Swap {
                signature: tx.signature.clone(),
                side: Side::Sell,
                amount: token_out,
            })
        } else {
            None
        }
    }
}
