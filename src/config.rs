use super::*;
use std::path::Path;

/// Session and table parameters for a simulation run.
///
/// Missing fields in a config file fall back to the crate defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting stake for every session.
    pub stake: Chips,
    /// Round budget for every session.
    pub duration: usize,
    /// Number of sessions to run.
    pub samples: usize,
    /// Smallest legal single bet.
    pub minimum: Chips,
    /// Largest legal sum of bets in one round.
    pub limit: Chips,
    /// Replay seed for the wheel and any random strategy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stake: STAKE,
            duration: DURATION,
            samples: SAMPLES,
            minimum: MINIMUM,
            limit: LIMIT,
            seed: None,
        }
    }
}

impl Config {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self, RouletteError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| RouletteError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }
    pub fn parse(text: &str) -> Result<Self, RouletteError> {
        serde_json::from_str::<Self>(text)
            .map_err(|e| RouletteError::Config(e.to_string()))?
            .check()
    }
    /// Reject parameters no session could run under.
    pub fn check(self) -> Result<Self, RouletteError> {
        if self.samples == 0 {
            return Err(RouletteError::Config("samples must be positive".into()));
        }
        if self.minimum < 1 {
            return Err(RouletteError::Config("table minimum must be at least 1".into()));
        }
        if self.limit < self.minimum {
            return Err(RouletteError::Config(format!(
                "table limit {} is below minimum {}",
                self.limit, self.minimum
            )));
        }
        Ok(self)
    }
    pub fn table(&self) -> Table {
        Table::new(self.minimum, self.limit)
    }
    pub fn wheel(&self) -> Wheel {
        match self.seed {
            Some(seed) => Wheel::seeded(seed),
            None => Wheel::new(),
        }
    }
    /// Seed for a random strategy, kept apart from the wheel's stream.
    pub fn player_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed ^ 0x9E37_79B9_7F4A_7C15)
    }
}
