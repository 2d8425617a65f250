//! Market snapshot derivation
//!
//! Snapshot rows for symbols with history are read off the series, not
//! re-drawn: the price IS the last close, so the dashboard's market and
//! chart views can never disagree. Symbols without history get a single
//! bounded move off their base price.

use datastore::types::{CryptoAsset, HistoricalBar};
use rand::Rng;

use crate::catalog::SymbolSpec;

/// Derive the snapshot row from an OHLC series. The price is exactly
/// the final close; `change_24h` comes from the last two closes.
pub fn asset_from_series(spec: &SymbolSpec, series: &[HistoricalBar]) -> CryptoAsset {
    let (price, change_24h, volume_24h) = match series {
        [] => (spec.base_price, 0.0, spec.base_volume),
        [only] => (only.close, (only.close / only.open - 1.0) * 100.0, only.volume),
        [.., prev, last] => (
            last.close,
            (last.close / prev.close - 1.0) * 100.0,
            last.volume,
        ),
    };

    CryptoAsset {
        symbol: spec.symbol.to_string(),
        name: spec.name.to_string(),
        price,
        change_24h,
        volume_24h,
        market_cap: price * spec.circulating_supply,
        circulating_supply: spec.circulating_supply,
        max_supply: spec.max_supply,
    }
}

/// Snapshot row for a symbol with no series: base price nudged by one
/// bounded daily move.
pub fn asset_without_history<R: Rng>(
    spec: &SymbolSpec,
    max_daily_move: f64,
    rng: &mut R,
) -> CryptoAsset {
    let delta: f64 = rng.gen_range(-max_daily_move..=max_daily_move);
    let price = spec.base_price * (1.0 + delta);

    CryptoAsset {
        symbol: spec.symbol.to_string(),
        name: spec.name.to_string(),
        price,
        change_24h: delta * 100.0,
        volume_24h: spec.base_volume * rng.gen_range(0.6..1.4),
        market_cap: price * spec.circulating_supply,
        circulating_supply: spec.circulating_supply,
        max_supply: spec.max_supply,
    }
}
