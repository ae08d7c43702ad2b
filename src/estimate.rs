//! Playoff probabilities derived from the enumerated outcomes.
//!
//! For every team and outcome, the team's [Standing] is classified against the playoff cutoff
//! _K_. Two probabilities are averaged over all outcomes:
//!
//! * the _worst-case_ probability: the fraction of outcomes in which fewer than _K_ teams finish
//!   strictly ahead of the team;
//! * the _tie_ probability: the expected share of the vacant playoff slots the team takes when
//!   its block of equal-points teams straddles the cutoff, with each tied team taking an equal
//!   share.
//!
//! The estimated probability is their sum. The two terms are not a partition of the outcome space:
//! an outcome in which the team is tied across the cutoff also counts towards the worst-case term,
//! so the estimate can exceed 1 when a tie for the last slots is likely.

use crate::outcome::{OutcomeSink, OutcomeStore};
use crate::team::Team;
use serde::Serialize;
use std::cmp::Ordering;

/// Where a team sits relative to the rest of the table in one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// Teams with strictly more points.
    pub above: usize,

    /// Teams with strictly fewer points.
    pub below: usize,

    /// Teams with equal points, including the team itself.
    pub tied: usize,
}
impl Standing {
    pub fn of(points: &[u32], team: Team) -> Self {
        let own = points[team.as_index()];
        let (mut above, mut below, mut tied) = (0, 0, 0);
        for other in points {
            match other.cmp(&own) {
                Ordering::Greater => above += 1,
                Ordering::Less => below += 1,
                Ordering::Equal => tied += 1,
            }
        }
        assert!(tied >= 1, "{team} must be tied with itself");
        Self { above, below, tied }
    }

    /// Whether the team makes the top `cutoff` counting only the teams strictly ahead of it.
    #[inline]
    pub fn secures(&self, cutoff: usize) -> bool {
        self.above < cutoff
    }

    /// Whether the team's equal-points block spans the cutoff, so that some but not all of the
    /// tied teams advance.
    #[inline]
    pub fn contends(&self, cutoff: usize) -> bool {
        self.above < cutoff && self.below < cutoff && self.above + self.tied > cutoff
    }

    /// The team's equal share of the slots left open to its tied block, or zero outside of
    /// contention.
    #[inline]
    pub fn tie_share(&self, cutoff: usize) -> f64 {
        if self.contends(cutoff) {
            let vacant = cutoff - self.above;
            vacant as f64 / self.tied as f64
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityRecord {
    pub team: Team,
    pub worst: f64,
    pub tie: f64,
    pub estimated: f64,
}
impl ProbabilityRecord {
    pub fn new(team: Team, worst: f64, tie: f64) -> Self {
        Self {
            team,
            worst,
            tie,
            estimated: worst + tie,
        }
    }
}

/// Estimates the playoff probabilities of a single `team` by scanning the whole `store`.
pub fn estimate(store: &OutcomeStore, team: Team, cutoff: usize) -> ProbabilityRecord {
    debug_assert!(!store.is_empty(), "at least one outcome is required");
    let mut secured = 0u64;
    let mut shares = 0.0;
    for outcome in store {
        let standing = Standing::of(outcome.points(), team);
        if standing.secures(cutoff) {
            secured += 1;
        }
        shares += standing.tie_share(cutoff);
    }
    let outcomes = store.len() as f64;
    ProbabilityRecord::new(team, secured as f64 / outcomes, shares / outcomes)
}

/// Estimates the playoff probabilities of every team, in team order.
pub fn estimate_all(store: &OutcomeStore, cutoff: usize) -> Vec<ProbabilityRecord> {
    let teams = store.iter().next().map_or(0, |outcome| outcome.teams());
    Team::all(teams)
        .map(|team| estimate(store, team, cutoff))
        .collect()
}

/// Accumulates the statistics of every team at the leaves of the enumeration, in a single pass
/// and without retaining the outcomes. Produces the same records as [estimate_all].
#[derive(Debug, Clone)]
pub struct Tally {
    cutoff: usize,
    outcomes: u64,
    secured: Vec<u64>,
    shares: Vec<f64>,
}
impl Tally {
    pub fn new(teams: usize, cutoff: usize) -> Self {
        Self {
            cutoff,
            outcomes: 0,
            secured: vec![0; teams],
            shares: vec![0.0; teams],
        }
    }

    pub fn outcomes(&self) -> u64 {
        self.outcomes
    }

    pub fn records(&self) -> Vec<ProbabilityRecord> {
        debug_assert!(self.outcomes > 0, "at least one outcome is required");
        let outcomes = self.outcomes as f64;
        self.secured
            .iter()
            .zip(&self.shares)
            .enumerate()
            .map(|(index, (&secured, &shares))| {
                ProbabilityRecord::new(
                    Team::index(index),
                    secured as f64 / outcomes,
                    shares / outcomes,
                )
            })
            .collect()
    }
}

impl OutcomeSink for Tally {
    fn accept(&mut self, points: &[u32]) {
        debug_assert_eq!(self.secured.len(), points.len());
        self.outcomes += 1;
        for team in Team::all(points.len()) {
            let standing = Standing::of(points, team);
            if standing.secures(self.cutoff) {
                self.secured[team.as_index()] += 1;
            }
            self.shares[team.as_index()] += standing.tie_share(self.cutoff);
        }
    }
}

#[cfg(test)]
mod tests;
