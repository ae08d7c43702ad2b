//! Tournament format parameters.

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Upper bound on [Config::max_remaining].
pub const MAX_REMAINING_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of tournament participants.
    pub teams: usize,

    /// Number of top positions that advance to the playoffs.
    pub cutoff: usize,

    /// Matches each pair of teams plays over a full season.
    pub matches_per_pair: u8,

    /// Largest number of remaining matches the caller is prepared to enumerate.
    pub max_remaining: usize,
}
impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.teams == 0 {
            bail!("at least one team must be present");
        }
        if self.cutoff == 0 || self.cutoff > self.teams {
            bail!(
                "cutoff must be in the range 1..={}, got {}",
                self.teams,
                self.cutoff
            );
        }
        if self.matches_per_pair == 0 {
            bail!("each pair of teams must meet at least once");
        }
        if self.max_remaining > MAX_REMAINING_LIMIT {
            bail!("at most {MAX_REMAINING_LIMIT} remaining matches can be enumerated");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            teams: 8,
            cutoff: 4,
            matches_per_pair: 2,
            max_remaining: 24,
        }
    }
}
