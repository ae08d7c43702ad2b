//! Game-by-game points progression of each team over the season so far.

use crate::points::POINTS_PER_WIN;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid result '{result}' in game {game} for {team}")]
pub struct InvalidProgress {
    pub team: String,
    pub game: usize,
    pub result: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub team: String,

    /// Cumulative points after each game played.
    pub points: Vec<u32>,
}
impl Progress {
    /// Parses a sequence of results, one character per game: `1` for a win and `0` for a loss.
    pub fn parse(team: impl Into<String>, results: &str) -> Result<Self, InvalidProgress> {
        let team = team.into();
        let mut points = Vec::with_capacity(results.len());
        let mut total = 0;
        for (index, result) in results.chars().enumerate() {
            match result {
                '1' => total += POINTS_PER_WIN,
                '0' => {}
                _ => {
                    return Err(InvalidProgress {
                        team,
                        game: index + 1,
                        result,
                    })
                }
            }
            points.push(total);
        }
        Ok(Self { team, points })
    }

    pub fn games(&self) -> usize {
        self.points.len()
    }

    /// Points after the most recent game.
    pub fn latest(&self) -> u32 {
        self.points.last().copied().unwrap_or(0)
    }
}
