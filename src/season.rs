//! A season in progress and the end-to-end forecast over it.

use std::time::Instant;

use anyhow::bail;
use strum_macros::Display;
use tracing::{debug, info};

use crate::config::Config;
use crate::display::DisplaySlice;
use crate::enumerate::{enumerate, enumerate_all, enumerate_parallel};
use crate::estimate::{estimate_all, ProbabilityRecord, Tally};
use crate::fixture::FixtureCounts;
use crate::points::PointsTable;
use crate::team::Roster;

/// How the outcomes are enumerated and folded into probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Materialise every outcome, then estimate each team over the store.
    #[default]
    Stored,

    /// Fold all teams' statistics at the leaves without retaining the outcomes.
    Streaming,

    /// Materialise the outcomes on the rayon pool, partitioned at the given depth.
    Parallel { split_depth: usize },
}

#[derive(Debug, Clone)]
pub struct Season {
    pub roster: Roster,
    pub fixtures: FixtureCounts,
    pub standings: PointsTable,
}

/// Derives the playoff probabilities of every team in the `season`, in team order.
pub fn forecast(season: &Season, config: &Config, mode: Mode) -> anyhow::Result<Vec<ProbabilityRecord>> {
    config.validate()?;
    if season.roster.len() != config.teams {
        bail!(
            "roster names {} teams, expected {}",
            season.roster.len(),
            config.teams
        );
    }
    if season.standings.teams() != config.teams {
        bail!(
            "standings cover {} teams, expected {}",
            season.standings.teams(),
            config.teams
        );
    }

    let mut fixtures = season.fixtures.clone();
    fixtures.normalise(config)?;
    let matches = fixtures.remaining_matches(config)?;
    debug!("remaining matches: {}", DisplaySlice::from(&*matches));
    if matches.len() > config.max_remaining {
        bail!(
            "{} matches remain, at most {} can be enumerated",
            matches.len(),
            config.max_remaining
        );
    }

    let start_time = Instant::now();
    let records = match mode {
        Mode::Stored => {
            let store = enumerate_all(&season.standings, &matches);
            debug!("enumerated {} outcomes", store.len());
            estimate_all(&store, config.cutoff)
        }
        Mode::Streaming => {
            let mut tally = Tally::new(config.teams, config.cutoff);
            let (mut points, mut matches) = (season.standings.clone(), matches.clone());
            enumerate(&mut points, &mut matches, &mut tally);
            debug!("tallied {} outcomes", tally.outcomes());
            tally.records()
        }
        Mode::Parallel { split_depth } => {
            let store = enumerate_parallel(&season.standings, &matches, split_depth);
            debug!("enumerated {} outcomes", store.len());
            estimate_all(&store, config.cutoff)
        }
    };
    let elapsed = start_time.elapsed();
    info!(
        "forecast over {} remaining matches ({} outcomes) took {:.3}s",
        matches.len(),
        1u64 << matches.len(),
        elapsed.as_millis() as f64 / 1_000.
    );
    Ok(records)
}
