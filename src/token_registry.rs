use std::collections::HashMap;

/// Precision assumed for mints the registry has never heard of.
pub const DEFAULT_DECIMALS: u32 = 9;

/// Maps mint addresses to their decimal precision. Used as the fallback when
/// an event amount does not embed its own decimals field.
#[derive(Debug, Clone)]
pub struct DecimalsRegistry {
    decimals: HashMap<String, u32>,
}

impl DecimalsRegistry {
    pub fn new(watched_mint: &str, watched_decimals: u32) -> Self {
        let mut decimals = HashMap::new();
        // Wrapped SOL, USDT, USDC
        decimals.insert(
            "So11111111111111111111111111111111111111112".to_string(),
            9,
        );
        decimals.insert(
            "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB".to_string(),
            6,
        );
        decimals.insert(
            "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            6,
        );
        // Configured precision wins, even for a pre-seeded mint.
        decimals.insert(watched_mint.to_string(), watched_decimals);
        Self { decimals }
    }

    pub fn decimals_for(&self, mint: &str) -> u32 {
        self.decimals.get(mint).copied().unwrap_or(DEFAULT_DECIMALS)
    }
}

#[cfg(test)]
mod tests {
    use super::{DecimalsRegistry, DEFAULT_DECIMALS};

    #[test]
    fn knows_the_watched_mint() {
        let registry = DecimalsRegistry::new("MyMint111", 5);
        assert_eq!(registry.decimals_for("MyMint111"), 5);
    }

    #[test]
    fn knows_common_stablecoins() {
        let registry = DecimalsRegistry::new("MyMint111", 9);
        assert_eq!(
            registry.decimals_for("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB"),
            6
        );
        assert_eq!(
            registry.decimals_for("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
            6
        );
        assert_eq!(
            registry.decimals_for("So11111111111111111111111111111111111111112"),
            9
        );
    }

    #[test]
    fn configured_decimals_override_seeded_entry() {
        let registry =
            DecimalsRegistry::new("So11111111111111111111111111111111111111112", 4);
        assert_eq!(
            registry.decimals_for("So11111111111111111111111111111111111111112"),
            4
        );
    }

    #[test]
    fn defaults_for_unknown_mints() {
        let registry = DecimalsRegistry::new("MyMint111", 9);
        assert_eq!(registry.decimals_for("UnknownMint"), DEFAULT_DECIMALS);
    }
}
