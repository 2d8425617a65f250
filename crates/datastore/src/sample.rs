//! Bundled minimal dataset
//!
//! Served when the files on disk are missing or malformed, so the
//! dashboard always has something coherent to render. Deterministic on
//! purpose: fixed dates, no randomness.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::types::{
    CryptoAsset, Dataset, Direction, HistoricalBar, MarketData, OverallSentiment, SentimentData,
    SentimentSignal, SignalKind, Trader, TradingStyle,
};

fn sample_day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).expect("static date")
}

fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0)
        .single()
        .expect("static timestamp")
}

fn bars(symbol: &str, closes: [f64; 3], volume: f64) -> Vec<HistoricalBar> {
    let mut out = Vec::with_capacity(closes.len());
    let mut open = closes[0];
    for (i, close) in closes.into_iter().enumerate() {
        out.push(HistoricalBar {
            symbol: symbol.to_string(),
            date: sample_day(1 + i as u32),
            open,
            high: open.max(close) * 1.01,
            low: open.min(close) * 0.99,
            close,
            volume,
        });
        open = close;
    }
    out
}

pub fn minimal_dataset() -> Dataset {
    let now = sample_time();

    let traders = vec![
        Trader {
            trader_id: "trader-0001".into(),
            rank: 1,
            username: "sample_whale_01".into(),
            total_pnl: 15250.5,
            roi_percentage: 30.5,
            win_rate: 0.68,
            total_trades: 210,
            risk_score: 4,
            consistency_score: 0.72,
            country: "US".into(),
            followers: 4200,
            trading_style: TradingStyle::Swing,
        },
        Trader {
            trader_id: "trader-0002".into(),
            rank: 2,
            username: "sample_scalper_02".into(),
            total_pnl: -1830.25,
            roi_percentage: -9.25,
            win_rate: 0.44,
            total_trades: 870,
            risk_score: 8,
            consistency_score: 0.31,
            country: "KR".into(),
            followers: 310,
            trading_style: TradingStyle::Scalper,
        },
    ];

    let btc = bars("BTC", [42000.0, 42600.5, 42150.25], 28_000_000_000.0);
    let eth = bars("ETH", [2250.0, 2198.5, 2240.75], 12_000_000_000.0);

    let market = MarketData {
        cryptocurrencies: vec![
            CryptoAsset {
                symbol: "BTC".into(),
                name: "Bitcoin".into(),
                price: 42150.25,
                change_24h: -1.06,
                volume_24h: 28_000_000_000.0,
                market_cap: 42150.25 * 19_700_000.0,
                circulating_supply: 19_700_000.0,
                max_supply: Some(21_000_000.0),
            },
            CryptoAsset {
                symbol: "ETH".into(),
                name: "Ethereum".into(),
                price: 2240.75,
                change_24h: 1.92,
                volume_24h: 12_000_000_000.0,
                market_cap: 2240.75 * 120_200_000.0,
                circulating_supply: 120_200_000.0,
                max_supply: None,
            },
        ],
        last_updated: now,
    };

    let mut history = btc;
    history.extend(eth);

    let signals = vec![
        SentimentSignal {
            symbol: "BTC".into(),
            timestamp: now,
            sentiment_score: 0.45,
            news_sentiment: 0.3,
            social_volume: 125_000,
            signal_type: SignalKind::Technical,
            direction: Direction::Bullish,
            confidence: 0.7,
            description: "Momentum holding above the 50-day average for BTC".into(),
        },
        SentimentSignal {
            symbol: "ETH".into(),
            timestamp: now,
            sentiment_score: -0.3,
            news_sentiment: -0.15,
            social_volume: 64_000,
            signal_type: SignalKind::Social,
            direction: Direction::Bearish,
            confidence: 0.55,
            description: "Social chatter for ETH skews negative this week".into(),
        },
    ];

    let sentiment = SentimentData {
        timestamp: now,
        overall_sentiment: OverallSentiment {
            score: 0.075,
            label: Direction::Neutral,
            confidence: 0.625,
            timestamp: now,
        },
        signals,
    };

    Dataset {
        traders,
        market,
        history,
        sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{validate_history, validate_market, validate_sentiment, validate_traders};

    #[test]
    fn bundled_sample_passes_all_validators() {
        let dataset = minimal_dataset();
        validate_traders(&dataset.traders).unwrap();
        validate_market(&dataset.market).unwrap();
        validate_history(&dataset.history).unwrap();
        validate_sentiment(&dataset.sentiment).unwrap();
    }

    #[test]
    fn sample_snapshot_prices_match_last_close() {
        let dataset = minimal_dataset();
        for asset in &dataset.market.cryptocurrencies {
            let last = dataset
                .history
                .iter()
                .filter(|b| b.symbol == asset.symbol)
                .last()
                .unwrap();
            assert_eq!(asset.price, last.close);
        }
    }
}
