//! Leaderboard synthesizer
//!
//! Draws heavy-tailed PnL and capital figures, derives the correlated
//! fields (ROI, win rate, risk, consistency), then sorts by PnL and
//! assigns ranks. Ids and usernames are unique by construction.

use datastore::types::{Trader, TradingStyle};
use rand::Rng;
use rand_distr::{Distribution, LogNormal};

/// Share of the leaderboard that ends up net negative.
const LOSS_FRACTION: f64 = 0.35;

const HANDLES: [&str; 16] = [
    "moon_hunter",
    "chain_surfer",
    "delta_raider",
    "block_wolf",
    "ledger_fox",
    "hash_nomad",
    "orderbook_owl",
    "candle_smith",
    "vol_harvester",
    "satoshi_echo",
    "gas_whisperer",
    "limit_breaker",
    "cold_wallet_cat",
    "fib_rider",
    "perp_pilot",
    "alpha_drift",
];

const COUNTRIES: [&str; 12] = [
    "US", "KR", "JP", "DE", "GB", "SG", "BR", "IN", "CA", "AU", "NL", "FR",
];

fn style_trade_base(style: TradingStyle) -> f64 {
    match style {
        TradingStyle::Scalper => 900.0,
        TradingStyle::Momentum => 400.0,
        TradingStyle::Swing => 250.0,
        TradingStyle::Contrarian => 180.0,
        TradingStyle::Hodler => 40.0,
    }
}

/// Generate `count` traders sorted by `total_pnl` descending with ranks
/// 1..=count.
pub fn build_leaderboard<R: Rng>(count: u32, rng: &mut R) -> Vec<Trader> {
    // Parameters are compile-time constants, construction cannot fail.
    let pnl_dist: LogNormal<f64> = LogNormal::new(9.0, 1.2).expect("constant log-normal params");
    let capital_dist: LogNormal<f64> =
        LogNormal::new(11.0, 0.8).expect("constant log-normal params");

    let mut traders: Vec<Trader> = (0..count)
        .map(|_| {
            let magnitude = pnl_dist.sample(rng);
            let total_pnl = if rng.gen_bool(LOSS_FRACTION) {
                -magnitude
            } else {
                magnitude
            };
            let capital = capital_dist.sample(rng);
            let roi_percentage = total_pnl / capital * 100.0;

            // Winners skew toward higher win rates, but nobody is a sure
            // thing either way.
            let roi_shift = (roi_percentage / 50.0).clamp(-1.0, 1.0) * 0.12;
            let win_rate =
                (0.48 + roi_shift + rng.gen_range(-0.06..0.06)).clamp(0.25, 0.85);

            let style = TradingStyle::ALL[rng.gen_range(0..TradingStyle::ALL.len())];
            let total_trades =
                (style_trade_base(style) * rng.gen_range(0.5..1.5)).round().max(1.0) as u32;

            let risk_score =
                ((1.0 - win_rate) * 10.0 + rng.gen_range(0.0..2.0)).round().clamp(1.0, 10.0) as u8;

            let drawdown = rng.gen_range(0.0..1.0);
            let consistency_score = (win_rate * 0.7 + (1.0 - drawdown) * 0.3).clamp(0.0, 1.0);

            Trader {
                trader_id: String::new(),
                rank: 0,
                username: String::new(),
                total_pnl,
                roi_percentage,
                win_rate,
                total_trades,
                risk_score,
                consistency_score,
                country: COUNTRIES[rng.gen_range(0..COUNTRIES.len())].to_string(),
                followers: 0,
                trading_style: style,
            }
        })
        .collect();

    traders.sort_by(|a, b| {
        b.total_pnl
            .partial_cmp(&a.total_pnl)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, trader) in traders.iter_mut().enumerate() {
        let rank = i as u32 + 1;
        trader.rank = rank;
        trader.trader_id = format!("trader-{rank:04}");
        trader.username = format!("{}_{rank:02}", HANDLES[i % HANDLES.len()]);
        trader.followers =
            (50_000.0 / (rank as f64).sqrt() * rng.gen_range(0.5..1.5)).round() as u32;
    }

    traders
}
