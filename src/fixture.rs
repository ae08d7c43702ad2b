//! Fixture counts and the remaining-match list derived from them.
//!
//! Raw fixture data records every pairing twice, once from each side. [FixtureCounts::normalise]
//! collapses each unordered pair onto its canonical direction, in which the first team has the
//! lower index. Only canonical counts may be turned into a list of remaining [Match]es; anything
//! else would double-count the schedule.

use crate::config::Config;
use crate::team::Team;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedSchedule {
    #[error("{0} is not a participant")]
    UnknownTeam(Team),

    #[error("{0} cannot be drawn against itself")]
    SelfFixture(Team),

    #[error("{first} v {second} recorded as both {forward} and {reverse} matches played")]
    Asymmetric {
        first: Team,
        second: Team,
        forward: u8,
        reverse: u8,
    },

    #[error("no fixtures recorded for {first} v {second}")]
    MissingPair { first: Team, second: Team },

    #[error("{first} v {second} played {played} of {total} matches")]
    Overplayed {
        first: Team,
        second: Team,
        played: u8,
        total: u8,
    },

    #[error("{first} v {second} is not in canonical order; normalise the fixture counts first")]
    NotNormalised { first: Team, second: Team },
}

/// One unplayed fixture between two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub first: Team,
    pub second: Team,
}
impl Match {
    pub fn new(first: Team, second: Team) -> Self {
        Self { first, second }
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v {}", self.first, self.second)
    }
}

/// Matches played between pairs of teams, keyed by `(first, second)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureCounts {
    played: BTreeMap<(Team, Team), u8>,
}
impl FixtureCounts {
    pub fn insert(&mut self, first: Team, second: Team, played: u8) {
        self.played.insert((first, second), played);
    }

    /// Matches played as recorded in the `first`-to-`second` direction only.
    pub fn get(&self, first: Team, second: Team) -> Option<u8> {
        self.played.get(&(first, second)).copied()
    }

    pub fn len(&self) -> usize {
        self.played.len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Team, Team, u8)> + '_ {
        self.played
            .iter()
            .map(|(&(first, second), &played)| (first, second, played))
    }

    /// Whether every entry is recorded in its canonical (lower index first) direction.
    pub fn is_canonical(&self) -> bool {
        self.played.keys().all(|(first, second)| first < second)
    }

    /// Collapses redundant entries onto the canonical direction of each pair and verifies that
    /// every pair of distinct participants is accounted for, with no more than
    /// [Config::matches_per_pair] matches played. The counts are left untouched on error.
    pub fn normalise(&mut self, config: &Config) -> Result<(), MalformedSchedule> {
        let mut canonical = BTreeMap::new();
        for (&(first, second), &played) in &self.played {
            for team in [first, second] {
                if team.as_index() >= config.teams {
                    return Err(MalformedSchedule::UnknownTeam(team));
                }
            }
            if first == second {
                return Err(MalformedSchedule::SelfFixture(first));
            }

            let key = if first < second {
                (first, second)
            } else {
                (second, first)
            };
            match canonical.entry(key) {
                Entry::Vacant(entry) => {
                    entry.insert(played);
                }
                Entry::Occupied(entry) => {
                    // keys are visited in ascending order, so the canonical direction came first
                    if *entry.get() != played {
                        return Err(MalformedSchedule::Asymmetric {
                            first: key.0,
                            second: key.1,
                            forward: *entry.get(),
                            reverse: played,
                        });
                    }
                }
            }
        }

        for first in Team::all(config.teams) {
            for second in Team::all(config.teams).skip(first.as_index() + 1) {
                let &played = canonical
                    .get(&(first, second))
                    .ok_or(MalformedSchedule::MissingPair { first, second })?;
                if played > config.matches_per_pair {
                    return Err(MalformedSchedule::Overplayed {
                        first,
                        second,
                        played,
                        total: config.matches_per_pair,
                    });
                }
            }
        }

        self.played = canonical;
        Ok(())
    }

    /// Lists one [Match] for every unplayed instance of every pairing, in ascending pair order.
    /// The counts must have been [normalised](Self::normalise).
    pub fn remaining_matches(&self, config: &Config) -> Result<Vec<Match>, MalformedSchedule> {
        let mut matches = vec![];
        for (&(first, second), &played) in &self.played {
            if first >= second {
                return Err(MalformedSchedule::NotNormalised { first, second });
            }
            let remaining = config.matches_per_pair.saturating_sub(played);
            for _ in 0..remaining {
                matches.push(Match::new(first, second));
            }
        }
        Ok(matches)
    }
}
