//! crypto-datagen — sample dataset generator for the crypto dashboard
//!
//! Usage:
//!   crypto-datagen generate --seed 42      — Write a fresh dataset
//!   crypto-datagen verify                  — Re-check files on disk
//!   crypto-datagen show                    — Print a dataset summary

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use datastore::{CachedDataset, Datastore, DEFAULT_TTL};
use datastore::types::{Dataset, MarketData, SentimentData, Trader};
use generator::{check_consistency, generate_dataset, GeneratorConfig};
use tracing::info;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment override for the dataset directory.
const DATA_DIR_ENV: &str = "CRYPTO_DATAGEN_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data/processed";

#[derive(Parser)]
#[command(name = "crypto-datagen")]
#[command(about = "Sample dataset generator for the crypto dashboard", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the four dataset files
    Generate {
        /// Output directory (default: data/processed, or CRYPTO_DATAGEN_DATA_DIR)
        #[arg(long)]
        out: Option<PathBuf>,
        /// RNG seed; omit for a fresh dataset every run
        #[arg(long)]
        seed: Option<u64>,
        /// Number of leaderboard traders
        #[arg(long, default_value_t = 50)]
        traders: u32,
        /// Number of market snapshot symbols
        #[arg(long, default_value_t = 10)]
        symbols: u32,
        /// How many symbols get an OHLC series
        #[arg(long, default_value_t = 5)]
        history_symbols: u32,
        /// Days of history per series
        #[arg(long, default_value_t = 90)]
        days: u32,
        /// Number of sentiment signals
        #[arg(long, default_value_t = 8)]
        signals: u32,
        /// Per-day price move bound, e.g. 0.08 for 8%
        #[arg(long, default_value_t = 0.08)]
        volatility: f64,
    },
    /// Load the files back and re-check every invariant
    Verify {
        /// Dataset directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print a summary through the cached reader (sample fallback)
    Show {
        /// Dataset directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug,generator=debug,datastore=debug,crypto_datagen=debug")
    } else {
        EnvFilter::new("info,generator=info,datastore=info,crypto_datagen=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).compact())
        .with(filter)
        .init();
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Generate {
            out,
            seed,
            traders,
            symbols,
            history_symbols,
            days,
            signals,
            volatility,
        } => {
            let config = GeneratorConfig {
                seed,
                trader_count: traders,
                symbol_count: symbols,
                history_symbol_count: history_symbols,
                history_days: days,
                signal_count: signals,
                max_daily_move: volatility,
            };
            cmd_generate(resolve_data_dir(out), config)?;
        }
        Commands::Verify { dir } => {
            cmd_verify(resolve_data_dir(dir))?;
        }
        Commands::Show { dir } => {
            cmd_show(resolve_data_dir(dir));
        }
    }

    Ok(())
}

// ============================================================================
// Generate command
// ============================================================================

fn cmd_generate(dir: PathBuf, config: GeneratorConfig) -> anyhow::Result<()> {
    println!("\n=== crypto-datagen v{} ===", APP_VERSION);
    println!(
        "Traders: {} | Symbols: {} ({} with history) | Days: {} | Signals: {}",
        config.trader_count,
        config.symbol_count,
        config.history_symbol_count,
        config.history_days,
        config.signal_count
    );
    match config.seed {
        Some(seed) => println!("Seed: {} (reproducible)", seed),
        None => println!("Seed: entropy"),
    }

    let dataset = generate_dataset(&config)?;

    let store = Datastore::new(&dir);
    store.write_dataset(&dataset)?;
    println!("\nDataset written to {}", dir.display());

    print_summary(&dataset);
    Ok(())
}

// ============================================================================
// Verify command
// ============================================================================

fn cmd_verify(dir: PathBuf) -> anyhow::Result<()> {
    println!("\n=== crypto-datagen v{} — verify ===", APP_VERSION);
    println!("Directory: {}", dir.display());

    let store = Datastore::new(&dir);
    // The loaders already enforce per-file shape and record invariants.
    let dataset = store.load_dataset()?;
    // Cross-file invariants on top.
    check_consistency(&dataset)?;

    info!("verification passed");
    println!(
        "\nOK: {} traders, {} assets, {} bars, {} signals — all invariants hold",
        dataset.traders.len(),
        dataset.market.cryptocurrencies.len(),
        dataset.history.len(),
        dataset.sentiment.signals.len()
    );
    Ok(())
}

// ============================================================================
// Show command
// ============================================================================

fn cmd_show(dir: PathBuf) {
    println!("\n=== crypto-datagen v{} — show ===", APP_VERSION);
    println!("Directory: {}", dir.display());

    let mut cache = CachedDataset::new(Datastore::new(&dir), DEFAULT_TTL);
    let dataset = cache.get(Instant::now());
    print_summary(dataset);
}

// ============================================================================
// Output helpers
// ============================================================================

fn print_summary(dataset: &Dataset) {
    print_traders(&dataset.traders, 10);
    print_market(&dataset.market);
    print_sentiment(&dataset.sentiment);
}

fn print_traders(traders: &[Trader], top_n: usize) {
    if traders.is_empty() {
        println!("\nLeaderboard: empty");
        return;
    }
    println!("\nTop {} Traders:", traders.len().min(top_n));
    println!(
        "  {:>4}  {:<22} {:>12} {:>8} {:>6} {:<12}",
        "#", "Username", "PnL", "ROI%", "WR%", "Style"
    );
    println!("  {}", "-".repeat(70));
    for t in traders.iter().take(top_n) {
        println!(
            "  {:>4}  {:<22} {:>+12.2} {:>+7.1}% {:>5.1}% {:<12}",
            t.rank,
            t.username,
            t.total_pnl,
            t.roi_percentage,
            t.win_rate * 100.0,
            t.trading_style.label(),
        );
    }
}

fn print_market(market: &MarketData) {
    println!("\nMarket ({} assets):", market.cryptocurrencies.len());
    println!(
        "  {:<6} {:<12} {:>14} {:>8} {:>16}",
        "Sym", "Name", "Price", "24h%", "Volume"
    );
    println!("  {}", "-".repeat(60));
    for a in &market.cryptocurrencies {
        println!(
            "  {:<6} {:<12} {:>14.4} {:>+7.2}% {:>16.0}",
            a.symbol, a.name, a.price, a.change_24h, a.volume_24h
        );
    }
}

fn print_sentiment(sentiment: &SentimentData) {
    let overall = &sentiment.overall_sentiment;
    println!(
        "\nSentiment: {} (score {:+.2}, confidence {:.0}%), {} signals",
        overall.label.label(),
        overall.score,
        overall.confidence * 100.0,
        sentiment.signals.len()
    );
    for s in &sentiment.signals {
        println!(
            "  [{:<11}] {:<6} {:>+5.2} {:<8} — {}",
            s.signal_type.label(),
            s.symbol,
            s.sentiment_score,
            s.direction.label(),
            s.description
        );
    }
}
