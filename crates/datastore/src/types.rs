//! Persisted record types for the four dataset files
//!
//! Shapes are strict on load: unknown fields and non-numeric sentinel
//! values are rejected at the boundary instead of leaking into the
//! dashboard as "N/A" strings in numeric columns.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Scores strictly above this are labeled bullish.
pub const THRESHOLD_BULLISH: f64 = 0.1;
/// Scores strictly below this are labeled bearish.
pub const THRESHOLD_BEARISH: f64 = -0.1;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Signal direction, always derived from the numeric sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

impl Direction {
    /// Fixed thresholds: > +0.1 bullish, < -0.1 bearish, else neutral.
    /// Boundary values are neutral. The stored `direction` field must
    /// agree with this function; dashboard filtering relies on it.
    pub fn from_score(score: f64) -> Self {
        if score > THRESHOLD_BULLISH {
            Self::Bullish
        } else if score < THRESHOLD_BEARISH {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }
}

/// Category of a sentiment signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Technical,
    Fundamental,
    Onchain,
    Social,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Technical,
        SignalKind::Fundamental,
        SignalKind::Onchain,
        SignalKind::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Fundamental => "fundamental",
            Self::Onchain => "onchain",
            Self::Social => "social",
        }
    }
}

/// Trading style tag on a leaderboard entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingStyle {
    Scalper,
    Swing,
    Momentum,
    Contrarian,
    Hodler,
}

impl TradingStyle {
    pub const ALL: [TradingStyle; 5] = [
        TradingStyle::Scalper,
        TradingStyle::Swing,
        TradingStyle::Momentum,
        TradingStyle::Contrarian,
        TradingStyle::Hodler,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scalper => "Scalper",
            Self::Swing => "Swing",
            Self::Momentum => "Momentum",
            Self::Contrarian => "Contrarian",
            Self::Hodler => "Hodler",
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One leaderboard entry in `top_traders_extended.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trader {
    pub trader_id: String,
    pub rank: u32,
    pub username: String,
    pub total_pnl: f64,
    pub roi_percentage: f64,
    pub win_rate: f64,
    pub total_trades: u32,
    pub risk_score: u8,
    pub consistency_score: f64,
    pub country: String,
    pub followers: u32,
    pub trading_style: TradingStyle,
}

impl Trader {
    pub fn validate(&self) -> Result<(), String> {
        if self.trader_id.is_empty() || self.username.is_empty() {
            return Err(format!("trader rank {}: empty identifier", self.rank));
        }
        for (name, v) in [
            ("total_pnl", self.total_pnl),
            ("roi_percentage", self.roi_percentage),
            ("win_rate", self.win_rate),
            ("consistency_score", self.consistency_score),
        ] {
            if !v.is_finite() {
                return Err(format!("trader {}: non-finite {name}", self.trader_id));
            }
        }
        if !(0.0..=1.0).contains(&self.win_rate) {
            return Err(format!(
                "trader {}: win_rate {} out of [0, 1]",
                self.trader_id, self.win_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.consistency_score) {
            return Err(format!(
                "trader {}: consistency_score {} out of [0, 1]",
                self.trader_id, self.consistency_score
            ));
        }
        if !(1..=10).contains(&self.risk_score) {
            return Err(format!(
                "trader {}: risk_score {} out of 1..=10",
                self.trader_id, self.risk_score
            ));
        }
        Ok(())
    }
}

/// One asset in the `market_data_extended.json` snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CryptoAsset {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub circulating_supply: f64,
    pub max_supply: Option<f64>,
}

impl CryptoAsset {
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.is_empty() {
            return Err("asset with empty symbol".to_string());
        }
        for (name, v) in [
            ("price", self.price),
            ("change_24h", self.change_24h),
            ("volume_24h", self.volume_24h),
            ("market_cap", self.market_cap),
            ("circulating_supply", self.circulating_supply),
        ] {
            if !v.is_finite() {
                return Err(format!("asset {}: non-finite {name}", self.symbol));
            }
        }
        if self.price <= 0.0 {
            return Err(format!("asset {}: non-positive price", self.symbol));
        }
        Ok(())
    }
}

/// One daily OHLCV bar in `historical_data.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoricalBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl HistoricalBar {
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.is_empty() {
            return Err("bar with empty symbol".to_string());
        }
        for (name, v) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(format!(
                    "bar {} {}: invalid {name} {v}",
                    self.symbol, self.date
                ));
            }
        }
        if self.high < self.open.max(self.close) {
            return Err(format!(
                "bar {} {}: high {} below body",
                self.symbol, self.date, self.high
            ));
        }
        if self.low > self.open.min(self.close) {
            return Err(format!(
                "bar {} {}: low {} above body",
                self.symbol, self.date, self.low
            ));
        }
        Ok(())
    }
}

/// One per-symbol signal in `sentiment_data.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentSignal {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment_score: f64,
    pub news_sentiment: f64,
    pub social_volume: u64,
    pub signal_type: SignalKind,
    pub direction: Direction,
    pub confidence: f64,
    pub description: String,
}

impl SentimentSignal {
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.is_empty() {
            return Err("signal with empty symbol".to_string());
        }
        if !(-1.0..=1.0).contains(&self.sentiment_score) {
            return Err(format!(
                "signal {}: sentiment_score {} out of [-1, 1]",
                self.symbol, self.sentiment_score
            ));
        }
        if !(-1.0..=1.0).contains(&self.news_sentiment) {
            return Err(format!(
                "signal {}: news_sentiment {} out of [-1, 1]",
                self.symbol, self.news_sentiment
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "signal {}: confidence {} out of [0, 1]",
                self.symbol, self.confidence
            ));
        }
        if self.direction != Direction::from_score(self.sentiment_score) {
            return Err(format!(
                "signal {}: direction {} disagrees with score {}",
                self.symbol,
                self.direction.label(),
                self.sentiment_score
            ));
        }
        Ok(())
    }
}

/// Aggregate sentiment snapshot, static after generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverallSentiment {
    pub score: f64,
    pub label: Direction,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl OverallSentiment {
    pub fn validate(&self) -> Result<(), String> {
        if !(-1.0..=1.0).contains(&self.score) {
            return Err(format!("overall sentiment score {} out of [-1, 1]", self.score));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "overall sentiment confidence {} out of [0, 1]",
                self.confidence
            ));
        }
        if self.label != Direction::from_score(self.score) {
            return Err(format!(
                "overall sentiment label {} disagrees with score {}",
                self.label.label(),
                self.score
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File-level wrappers
// ---------------------------------------------------------------------------

/// Contents of `market_data_extended.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketData {
    pub cryptocurrencies: Vec<CryptoAsset>,
    pub last_updated: DateTime<Utc>,
}

/// Contents of `sentiment_data.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentData {
    pub timestamp: DateTime<Utc>,
    pub overall_sentiment: OverallSentiment,
    pub signals: Vec<SentimentSignal>,
}

/// All four artifacts of one generator run
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub traders: Vec<Trader>,
    pub market: MarketData,
    pub history: Vec<HistoricalBar>,
    pub sentiment: SentimentData,
}

// ---------------------------------------------------------------------------
// Collection validators (applied by the loaders)
// ---------------------------------------------------------------------------

pub fn validate_traders(traders: &[Trader]) -> Result<(), String> {
    let mut ids: HashSet<&str> = HashSet::new();
    let mut names: HashSet<&str> = HashSet::new();
    for (i, t) in traders.iter().enumerate() {
        t.validate()?;
        if t.rank as usize != i + 1 {
            return Err(format!("trader {}: rank {} at position {}", t.trader_id, t.rank, i + 1));
        }
        if !ids.insert(&t.trader_id) {
            return Err(format!("duplicate trader_id {}", t.trader_id));
        }
        if !names.insert(&t.username) {
            return Err(format!("duplicate username {}", t.username));
        }
    }
    for pair in traders.windows(2) {
        if pair[0].total_pnl < pair[1].total_pnl {
            return Err(format!(
                "leaderboard not sorted: {} ({}) ranked above {} ({})",
                pair[0].trader_id, pair[0].total_pnl, pair[1].trader_id, pair[1].total_pnl
            ));
        }
    }
    Ok(())
}

pub fn validate_market(market: &MarketData) -> Result<(), String> {
    let mut symbols: HashSet<&str> = HashSet::new();
    for asset in &market.cryptocurrencies {
        asset.validate()?;
        if !symbols.insert(&asset.symbol) {
            return Err(format!("duplicate asset symbol {}", asset.symbol));
        }
    }
    Ok(())
}

/// Per-symbol date sequences must be contiguous calendar days in order.
pub fn validate_history(history: &[HistoricalBar]) -> Result<(), String> {
    let mut last_date: HashMap<&str, NaiveDate> = HashMap::new();
    for bar in history {
        bar.validate()?;
        if let Some(prev) = last_date.get(bar.symbol.as_str()) {
            if bar.date != *prev + chrono::Duration::days(1) {
                return Err(format!(
                    "bar {} {}: expected {} after {}",
                    bar.symbol,
                    bar.date,
                    *prev + chrono::Duration::days(1),
                    prev
                ));
            }
        }
        last_date.insert(bar.symbol.as_str(), bar.date);
    }
    Ok(())
}

pub fn validate_sentiment(sentiment: &SentimentData) -> Result<(), String> {
    sentiment.overall_sentiment.validate()?;
    for signal in &sentiment.signals {
        signal.validate()?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn direction_thresholds() {
        assert_eq!(Direction::from_score(0.5), Direction::Bullish);
        assert_eq!(Direction::from_score(0.11), Direction::Bullish);
        assert_eq!(Direction::from_score(-0.5), Direction::Bearish);
        assert_eq!(Direction::from_score(-0.11), Direction::Bearish);
        assert_eq!(Direction::from_score(0.0), Direction::Neutral);
        // Boundary values are neutral, not bullish/bearish
        assert_eq!(Direction::from_score(0.1), Direction::Neutral);
        assert_eq!(Direction::from_score(-0.1), Direction::Neutral);
    }

    #[test]
    fn direction_relabel_is_idempotent() {
        for score in [-1.0, -0.3, -0.1, -0.05, 0.0, 0.1, 0.100001, 0.9] {
            let first = Direction::from_score(score);
            assert_eq!(Direction::from_score(score), first);
        }
    }

    fn bar(open: f64, high: f64, low: f64, close: f64) -> HistoricalBar {
        HistoricalBar {
            symbol: "BTC".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            open,
            high,
            low,
            close,
            volume: 1000.0,
        }
    }

    #[test]
    fn bar_rejects_high_below_body() {
        assert!(bar(100.0, 101.0, 99.0, 100.5).validate().is_ok());
        assert!(bar(100.0, 99.5, 99.0, 100.5).validate().is_err());
        assert!(bar(100.0, 101.0, 100.2, 100.5).validate().is_err());
    }

    #[test]
    fn bar_rejects_non_finite() {
        assert!(bar(f64::NAN, 101.0, 99.0, 100.5).validate().is_err());
        assert!(bar(100.0, f64::INFINITY, 99.0, 100.5).validate().is_err());
    }

    #[test]
    fn history_requires_contiguous_dates() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut bars = vec![bar(100.0, 101.0, 99.0, 100.5), bar(100.5, 102.0, 100.0, 101.0)];
        bars[1].date = d1 + chrono::Duration::days(1);
        assert!(validate_history(&bars).is_ok());

        // Skip a day
        bars[1].date = d1 + chrono::Duration::days(2);
        assert!(validate_history(&bars).is_err());

        // Other symbols keep their own sequence
        bars[1].date = d1;
        bars[1].symbol = "ETH".into();
        assert!(validate_history(&bars).is_ok());
    }

    fn trader(rank: u32, pnl: f64) -> Trader {
        Trader {
            trader_id: format!("trader-{rank:04}"),
            rank,
            username: format!("user_{rank}"),
            total_pnl: pnl,
            roi_percentage: 10.0,
            win_rate: 0.6,
            total_trades: 100,
            risk_score: 5,
            consistency_score: 0.7,
            country: "US".into(),
            followers: 100,
            trading_style: TradingStyle::Swing,
        }
    }

    #[test]
    fn traders_must_be_sorted_by_pnl() {
        assert!(validate_traders(&[trader(1, 500.0), trader(2, 100.0)]).is_ok());
        assert!(validate_traders(&[trader(1, 100.0), trader(2, 500.0)]).is_err());
    }

    #[test]
    fn traders_must_have_unique_names() {
        let mut dup = vec![trader(1, 500.0), trader(2, 100.0)];
        dup[1].username = dup[0].username.clone();
        assert!(validate_traders(&dup).is_err());
    }

    #[test]
    fn signal_direction_must_match_score() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut signal = SentimentSignal {
            symbol: "BTC".into(),
            timestamp: ts,
            sentiment_score: 0.6,
            news_sentiment: 0.2,
            social_volume: 5000,
            signal_type: SignalKind::Technical,
            direction: Direction::Bullish,
            confidence: 0.8,
            description: "test".into(),
        };
        assert!(signal.validate().is_ok());

        signal.direction = Direction::Bearish;
        assert!(signal.validate().is_err());

        signal.sentiment_score = 1.5;
        signal.direction = Direction::Bullish;
        assert!(signal.validate().is_err());
    }
}
