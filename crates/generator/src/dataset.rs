//! Dataset assembly and cross-file consistency
//!
//! One seeded RNG drives every component in a fixed order, so a seed
//! pins the entire dataset. The consistency check runs before the
//! dataset is handed to any caller.

use chrono::{DateTime, Utc};
use datastore::types::{Dataset, Direction, MarketData};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::catalog::CATALOG;
use crate::config::GeneratorConfig;
use crate::{market, sentiment, traders, walk, GenResult, GeneratorError};

/// Relative tolerance for the snapshot-vs-history price check.
const PRICE_TOLERANCE: f64 = 1e-9;

/// Generate a dataset stamped with the current time.
pub fn generate_dataset(config: &GeneratorConfig) -> GenResult<Dataset> {
    generate_dataset_at(config, Utc::now())
}

/// Generate a dataset stamped with an explicit time. With a fixed seed
/// and timestamp the output is fully deterministic.
pub fn generate_dataset_at(config: &GeneratorConfig, now: DateTime<Utc>) -> GenResult<Dataset> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = now.date_naive();

    let specs = &CATALOG[..config.symbol_count as usize];
    let mut history = Vec::new();
    let mut assets = Vec::with_capacity(specs.len());

    for (i, spec) in specs.iter().enumerate() {
        if (i as u32) < config.history_symbol_count {
            let series = walk::build_series(
                spec.symbol,
                spec.base_price,
                spec.base_volume,
                config.history_days,
                config.max_daily_move,
                today,
                &mut rng,
            );
            assets.push(market::asset_from_series(spec, &series));
            history.extend(series);
        } else {
            assets.push(market::asset_without_history(
                spec,
                config.max_daily_move,
                &mut rng,
            ));
        }
    }

    let traders = traders::build_leaderboard(config.trader_count, &mut rng);
    let sentiment = sentiment::build_sentiment(specs, config.signal_count, now, &mut rng);

    let dataset = Dataset {
        traders,
        market: MarketData {
            cryptocurrencies: assets,
            last_updated: now,
        },
        history,
        sentiment,
    };

    check_consistency(&dataset)?;

    info!(
        traders = dataset.traders.len(),
        assets = dataset.market.cryptocurrencies.len(),
        bars = dataset.history.len(),
        signals = dataset.sentiment.signals.len(),
        seed = ?config.seed,
        "dataset generated"
    );
    Ok(dataset)
}

/// Cross-file invariants: every snapshot price matches the final
/// historical close for its symbol, and every stored direction agrees
/// with its score. Also run by `verify` against files loaded from disk.
pub fn check_consistency(dataset: &Dataset) -> GenResult<()> {
    for asset in &dataset.market.cryptocurrencies {
        let last = dataset
            .history
            .iter()
            .filter(|bar| bar.symbol == asset.symbol)
            .last();
        if let Some(bar) = last {
            let denom = bar.close.abs().max(f64::MIN_POSITIVE);
            let drift = ((asset.price - bar.close) / denom).abs();
            if drift > PRICE_TOLERANCE {
                return Err(GeneratorError::Consistency(format!(
                    "{}: snapshot price {} diverges from last close {} on {}",
                    asset.symbol, asset.price, bar.close, bar.date
                )));
            }
        }
    }

    for signal in &dataset.sentiment.signals {
        let expected = Direction::from_score(signal.sentiment_score);
        if signal.direction != expected {
            return Err(GeneratorError::Consistency(format!(
                "{}: direction {} disagrees with score {}",
                signal.symbol,
                signal.direction.label(),
                signal.sentiment_score
            )));
        }
    }
    let overall = &dataset.sentiment.overall_sentiment;
    if overall.label != Direction::from_score(overall.score) {
        return Err(GeneratorError::Consistency(format!(
            "overall label {} disagrees with score {}",
            overall.label.label(),
            overall.score
        )));
    }

    Ok(())
}
