//! Bounded multiplicative price walk
//!
//! Each day closes at the previous close times (1 + Δ) with Δ drawn
//! uniformly inside the configured bound. Wicks extend the open/close
//! envelope by up to 2%, and volume couples to the size of the move so
//! big candles come with big turnover.

use chrono::{Duration, NaiveDate};
use datastore::types::HistoricalBar;
use rand::Rng;

/// Prices never walk below this fraction of the base price.
pub const PRICE_FLOOR_FRACTION: f64 = 0.01;

/// Maximum wick extension beyond the open/close envelope.
pub const MAX_WICK: f64 = 0.02;

/// Volume multiplier added per unit of |Δ|.
pub const VOLUME_MOVE_COUPLING: f64 = 8.0;

/// Generate `days` contiguous daily bars ending at `end_date`. Every
/// bar opens at the previous close, so the series has no gaps in either
/// time or price.
pub fn build_series<R: Rng>(
    symbol: &str,
    base_price: f64,
    base_volume: f64,
    days: u32,
    max_daily_move: f64,
    end_date: NaiveDate,
    rng: &mut R,
) -> Vec<HistoricalBar> {
    let floor = base_price * PRICE_FLOOR_FRACTION;
    let mut close = base_price;
    let mut bars = Vec::with_capacity(days as usize);

    for i in 0..days {
        let date = end_date - Duration::days((days - 1 - i) as i64);
        let open = close;
        let delta: f64 = rng.gen_range(-max_daily_move..=max_daily_move);
        close = (open * (1.0 + delta)).max(floor);

        let up_wick: f64 = rng.gen_range(0.0..=MAX_WICK);
        let down_wick: f64 = rng.gen_range(0.0..=MAX_WICK);
        let high = open.max(close) * (1.0 + up_wick);
        let low = open.min(close) * (1.0 - down_wick);

        let volume = base_volume * (rng.gen_range(0.6..1.4) + VOLUME_MOVE_COUPLING * delta.abs());

        bars.push(HistoricalBar {
            symbol: symbol.to_string(),
            date,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use datastore::types::validate_history;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn series(seed: u64, days: u32, max_move: f64) -> Vec<HistoricalBar> {
        let mut rng = StdRng::seed_from_u64(seed);
        build_series("BTC", 43_500.0, 28e9, days, max_move, end_date(), &mut rng)
    }

    #[test]
    fn every_bar_honors_ohlc_bounds() {
        for bar in series(7, 200, 0.08) {
            assert!(bar.low <= bar.open.min(bar.close), "{bar:?}");
            assert!(bar.high >= bar.open.max(bar.close), "{bar:?}");
            assert!(bar.low > 0.0 && bar.volume > 0.0, "{bar:?}");
        }
    }

    #[test]
    fn bars_chain_open_to_previous_close_on_contiguous_days() {
        let bars = series(7, 90, 0.08);
        assert_eq!(bars.len(), 90);
        assert_eq!(bars.last().unwrap().date, end_date());
        for pair in bars.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
        validate_history(&bars).unwrap();
    }

    #[test]
    fn daily_moves_stay_inside_the_bound() {
        let max_move = 0.05;
        for bar in series(11, 300, max_move) {
            let delta = (bar.close - bar.open) / bar.open;
            // The floor can truncate a down move, never enlarge one.
            assert!(delta.abs() <= max_move + 1e-12, "delta {delta}");
        }
    }

    #[test]
    fn price_never_breaks_the_floor() {
        // Maximum volatility over a long horizon still respects the floor.
        for bar in series(3, 2_000, 0.5) {
            assert!(bar.close >= 43_500.0 * PRICE_FLOOR_FRACTION - 1e-9);
        }
    }

    #[test]
    fn same_seed_reproduces_the_series() {
        assert_eq!(series(42, 60, 0.08), series(42, 60, 0.08));
        assert_ne!(series(42, 60, 0.08), series(43, 60, 0.08));
    }
}
