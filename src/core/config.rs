//! Match configuration with documented defaults

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SkirmishError};

/// Default round cap applied when none is given
///
/// The fixed scenario ends in well under 20 rounds, so this only ever
/// triggers when neither side can deal damage.
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

/// Configuration for a single match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for the match RNG (heal rolls, random weapon picks)
    ///
    /// Recorded in the match report so a run can be replayed.
    pub seed: u64,

    /// Maximum number of rounds before the match is called a stalemate
    ///
    /// `None` disables the cap. A match where nobody has a weapon
    /// then never finishes.
    pub max_rounds: Option<u32>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
        }
    }
}

impl MatchConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Reject configurations that cannot run a single round
    pub fn validate(&self) -> Result<()> {
        if self.max_rounds == Some(0) {
            return Err(SkirmishError::InvalidConfig(
                "max_rounds must be at least 1 (use None for no cap)".into(),
            ));
        }
        Ok(())
    }
}
