//! Generation parameters

use crate::catalog::CATALOG;
use crate::{GenResult, GeneratorError};

/// Knobs for one generation run. Zero trader or signal counts are legal
/// and produce empty collections; everything else is range-checked
/// before any randomness is drawn.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub trader_count: u32,
    pub symbol_count: u32,
    /// How many of the symbols also get an OHLC series.
    pub history_symbol_count: u32,
    pub history_days: u32,
    pub signal_count: u32,
    /// Per-day bound on the relative price move, e.g. 0.08 for 8%.
    pub max_daily_move: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trader_count: 50,
            symbol_count: 10,
            history_symbol_count: 5,
            history_days: 90,
            signal_count: 8,
            max_daily_move: 0.08,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> GenResult<()> {
        if !(self.max_daily_move > 0.0 && self.max_daily_move <= 0.5) {
            return Err(GeneratorError::Config(format!(
                "max_daily_move must be in (0, 0.5], got {}",
                self.max_daily_move
            )));
        }
        if self.symbol_count == 0 {
            return Err(GeneratorError::Config(
                "symbol_count must be at least 1".into(),
            ));
        }
        if self.symbol_count as usize > CATALOG.len() {
            return Err(GeneratorError::Config(format!(
                "symbol_count {} exceeds the catalog of {} symbols",
                self.symbol_count,
                CATALOG.len()
            )));
        }
        if self.history_symbol_count > self.symbol_count {
            return Err(GeneratorError::Config(format!(
                "history_symbol_count {} exceeds symbol_count {}",
                self.history_symbol_count, self.symbol_count
            )));
        }
        if self.history_symbol_count > 0 && self.history_days == 0 {
            return Err(GeneratorError::Config(
                "history_days must be at least 1 when history symbols are requested".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        GeneratorConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_traders_and_signals_are_legal() {
        let config = GeneratorConfig {
            trader_count: 0,
            signal_count: 0,
            ..Default::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn out_of_range_configs_are_rejected() {
        let bad_move = GeneratorConfig {
            max_daily_move: 0.6,
            ..Default::default()
        };
        assert!(bad_move.validate().is_err());

        let zero_move = GeneratorConfig {
            max_daily_move: 0.0,
            ..Default::default()
        };
        assert!(zero_move.validate().is_err());

        let no_symbols = GeneratorConfig {
            symbol_count: 0,
            ..Default::default()
        };
        assert!(no_symbols.validate().is_err());

        let too_many = GeneratorConfig {
            symbol_count: CATALOG.len() as u32 + 1,
            ..Default::default()
        };
        assert!(too_many.validate().is_err());

        let history_overflow = GeneratorConfig {
            symbol_count: 4,
            history_symbol_count: 5,
            ..Default::default()
        };
        assert!(history_overflow.validate().is_err());

        let zero_days = GeneratorConfig {
            history_days: 0,
            ..Default::default()
        };
        assert!(zero_days.validate().is_err());
    }
}
