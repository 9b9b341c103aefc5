//! Runtime engine settings and their validation.

use std::time::Duration;

use crate::constants::{KOMI, MAX_SIZE, MIN_SIZE, N, SUGGEST_TIMEOUT};
use crate::error::ConfigError;
use crate::rules::KoRule;

/// Runtime settings for a game and its automated opponent.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub size: usize,
    pub komi: f32,
    pub ko_rule: KoRule,
    /// Upper bound on one call to the move suggester.
    pub suggest_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: N,
            komi: KOMI,
            ko_rule: KoRule::Simple,
            suggest_timeout: SUGGEST_TIMEOUT,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::BoardSize {
                size: self.size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        if !self.komi.is_finite() {
            return Err(ConfigError::Komi(self.komi));
        }
        if self.suggest_timeout.is_zero() {
            return Err(ConfigError::Timeout);
        }
        Ok(())
    }
}
