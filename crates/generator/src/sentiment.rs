//! Sentiment feed synthesizer
//!
//! Signals round-robin over the symbol set, cycling through the four
//! signal kinds, with directions always derived from the score through
//! the shared threshold function. The overall reading is the mean of
//! the individual signals.

use chrono::{DateTime, Duration, Utc};
use datastore::types::{Direction, OverallSentiment, SentimentData, SentimentSignal, SignalKind};
use rand::Rng;

use crate::catalog::SymbolSpec;

fn describe(kind: SignalKind, direction: Direction, symbol: &str) -> String {
    let phrase = match (kind, direction) {
        (SignalKind::Technical, Direction::Bullish) => "breaking above key resistance",
        (SignalKind::Technical, Direction::Bearish) => "losing a major support level",
        (SignalKind::Technical, Direction::Neutral) => "consolidating in a tight range",
        (SignalKind::Fundamental, Direction::Bullish) => "drawing fresh institutional inflows",
        (SignalKind::Fundamental, Direction::Bearish) => "facing regulatory headwinds",
        (SignalKind::Fundamental, Direction::Neutral) => "trading in line with the sector",
        (SignalKind::Onchain, Direction::Bullish) => "seeing accumulation by large holders",
        (SignalKind::Onchain, Direction::Bearish) => "showing rising exchange inflows",
        (SignalKind::Onchain, Direction::Neutral) => "holding steady on-chain activity",
        (SignalKind::Social, Direction::Bullish) => "trending positive across social feeds",
        (SignalKind::Social, Direction::Bearish) => "drawing negative social chatter",
        (SignalKind::Social, Direction::Neutral) => "generating mixed social discussion",
    };
    format!("{symbol} is {phrase}")
}

/// Generate `count` signals plus the aggregate reading. `specs` must be
/// non-empty when `count > 0`; config validation guarantees it.
pub fn build_sentiment<R: Rng>(
    specs: &[SymbolSpec],
    count: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> SentimentData {
    let signals: Vec<SentimentSignal> = (0..count)
        .map(|i| {
            let spec = &specs[i as usize % specs.len()];
            let score: f64 = rng.gen_range(-1.0..=1.0);
            let direction = Direction::from_score(score);
            let kind = SignalKind::ALL[i as usize % SignalKind::ALL.len()];
            let confidence =
                (0.5 + score.abs() * 0.4 + rng.gen_range(-0.05..0.05)).clamp(0.05, 0.99);
            let news_sentiment = (score * 0.8 + rng.gen_range(-0.2..0.2)).clamp(-1.0, 1.0);

            SentimentSignal {
                symbol: spec.symbol.to_string(),
                timestamp: now - Duration::hours(i as i64),
                sentiment_score: score,
                news_sentiment,
                social_volume: rng.gen_range(5_000..500_000),
                signal_type: kind,
                direction,
                confidence,
                description: describe(kind, direction, spec.symbol),
            }
        })
        .collect();

    let overall_sentiment = overall_from_signals(&signals, now);

    SentimentData {
        timestamp: now,
        overall_sentiment,
        signals,
    }
}

fn overall_from_signals(signals: &[SentimentSignal], now: DateTime<Utc>) -> OverallSentiment {
    if signals.is_empty() {
        return OverallSentiment {
            score: 0.0,
            label: Direction::Neutral,
            confidence: 0.5,
            timestamp: now,
        };
    }
    let n = signals.len() as f64;
    let score = signals.iter().map(|s| s.sentiment_score).sum::<f64>() / n;
    let confidence = signals.iter().map(|s| s.confidence).sum::<f64>() / n;
    OverallSentiment {
        score,
        label: Direction::from_score(score),
        confidence,
        timestamp: now,
    }
}
