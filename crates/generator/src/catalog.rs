//! Fixed symbol catalog
//!
//! Twelve real assets with plausible base prices, supplies, and daily
//! volumes. The catalog caps `symbol_count`; config validation enforces
//! the bound so indexing into it is always in range.

/// Static facts about one listed asset.
#[derive(Debug, Clone, Copy)]
pub struct SymbolSpec {
    pub symbol: &'static str,
    pub name: &'static str,
    pub base_price: f64,
    pub circulating_supply: f64,
    pub max_supply: Option<f64>,
    pub base_volume: f64,
}

pub const CATALOG: [SymbolSpec; 12] = [
    SymbolSpec {
        symbol: "BTC",
        name: "Bitcoin",
        base_price: 43_500.0,
        circulating_supply: 19_700_000.0,
        max_supply: Some(21_000_000.0),
        base_volume: 28_000_000_000.0,
    },
    SymbolSpec {
        symbol: "ETH",
        name: "Ethereum",
        base_price: 2_280.0,
        circulating_supply: 120_200_000.0,
        max_supply: None,
        base_volume: 12_000_000_000.0,
    },
    SymbolSpec {
        symbol: "BNB",
        name: "BNB",
        base_price: 312.0,
        circulating_supply: 153_000_000.0,
        max_supply: Some(200_000_000.0),
        base_volume: 900_000_000.0,
    },
    SymbolSpec {
        symbol: "SOL",
        name: "Solana",
        base_price: 98.0,
        circulating_supply: 432_000_000.0,
        max_supply: None,
        base_volume: 2_400_000_000.0,
    },
    SymbolSpec {
        symbol: "XRP",
        name: "XRP",
        base_price: 0.52,
        circulating_supply: 54_300_000_000.0,
        max_supply: Some(100_000_000_000.0),
        base_volume: 1_100_000_000.0,
    },
    SymbolSpec {
        symbol: "ADA",
        name: "Cardano",
        base_price: 0.38,
        circulating_supply: 35_400_000_000.0,
        max_supply: Some(45_000_000_000.0),
        base_volume: 320_000_000.0,
    },
    SymbolSpec {
        symbol: "AVAX",
        name: "Avalanche",
        base_price: 36.0,
        circulating_supply: 378_000_000.0,
        max_supply: Some(720_000_000.0),
        base_volume: 450_000_000.0,
    },
    SymbolSpec {
        symbol: "DOGE",
        name: "Dogecoin",
        base_price: 0.082,
        circulating_supply: 142_600_000_000.0,
        max_supply: None,
        base_volume: 520_000_000.0,
    },
    SymbolSpec {
        symbol: "DOT",
        name: "Polkadot",
        base_price: 7.2,
        circulating_supply: 1_310_000_000.0,
        max_supply: None,
        base_volume: 210_000_000.0,
    },
    SymbolSpec {
        symbol: "MATIC",
        name: "Polygon",
        base_price: 0.85,
        circulating_supply: 9_900_000_000.0,
        max_supply: Some(10_000_000_000.0),
        base_volume: 380_000_000.0,
    },
    SymbolSpec {
        symbol: "LINK",
        name: "Chainlink",
        base_price: 14.6,
        circulating_supply: 587_000_000.0,
        max_supply: Some(1_000_000_000.0),
        base_volume: 420_000_000.0,
    },
    SymbolSpec {
        symbol: "LTC",
        name: "Litecoin",
        base_price: 72.0,
        circulating_supply: 74_500_000.0,
        max_supply: Some(84_000_000.0),
        base_volume: 360_000_000.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_symbols_are_unique_and_sane() {
        let symbols: HashSet<&str> = CATALOG.iter().map(|s| s.symbol).collect();
        assert_eq!(symbols.len(), CATALOG.len());
        for spec in &CATALOG {
            assert!(spec.base_price > 0.0, "{}", spec.symbol);
            assert!(spec.circulating_supply > 0.0, "{}", spec.symbol);
            assert!(spec.base_volume > 0.0, "{}", spec.symbol);
            if let Some(max) = spec.max_supply {
                assert!(max >= spec.circulating_supply, "{}", spec.symbol);
            }
        }
    }
}
