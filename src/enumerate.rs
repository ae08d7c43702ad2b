//! Exhaustive enumeration of the remaining matches.
//!
//! Each remaining match is resolved both ways in turn, by crediting one side and then the other
//! with a win. The table is mutated in place and every credit is undone by a scoped guard, so
//! no state is copied until a leaf is reached. A run over _R_ matches visits `2^R` leaves.

use crate::fixture::Match;
use crate::outcome::{OutcomeSink, OutcomeStore};
use crate::points::PointsTable;
use rayon::prelude::*;

/// Visits every resolution of `matches`, starting from `points`, and hands each final table to
/// `sink`. Both `points` and `matches` are restored to their original state before returning.
pub fn enumerate(points: &mut PointsTable, matches: &mut Vec<Match>, sink: &mut impl OutcomeSink) {
    let Some(fixture) = matches.pop() else {
        sink.accept(points.as_slice());
        return;
    };

    enumerate(&mut points.credit(fixture.first), matches, sink);
    enumerate(&mut points.credit(fixture.second), matches, sink);

    matches.push(fixture);
}

/// Enumerates all outcomes of `matches` from the given `standings` into a new store.
pub fn enumerate_all(standings: &PointsTable, matches: &[Match]) -> OutcomeStore {
    let mut points = standings.clone();
    let mut matches = matches.to_vec();
    let mut store = OutcomeStore::for_remaining(matches.len());
    enumerate(&mut points, &mut matches, &mut store);
    store
}

/// Parallel counterpart of [enumerate_all].
///
/// The first `split_depth` decisions are expanded up front into `2^split_depth` seed tables. Each
/// seed's subtree is then enumerated on the rayon pool with its own table and match list. The
/// partial stores are joined in seed order, so the result is identical to [enumerate_all].
pub fn enumerate_parallel(
    standings: &PointsTable,
    matches: &[Match],
    split_depth: usize,
) -> OutcomeStore {
    let split_depth = split_depth.min(matches.len());
    let (subtree, prefix) = matches.split_at(matches.len() - split_depth);

    let seeds = enumerate_all(standings, prefix);
    let seeds: Vec<PointsTable> = seeds
        .iter()
        .map(|seed| PointsTable::new(seed.points().to_vec()))
        .collect();

    let partitions: Vec<OutcomeStore> = seeds
        .into_par_iter()
        .map(|mut seed| {
            let mut matches = subtree.to_vec();
            let mut store = OutcomeStore::for_remaining(matches.len());
            enumerate(&mut seed, &mut matches, &mut store);
            store
        })
        .collect();

    let mut store = OutcomeStore::for_remaining(matches.len());
    for partition in partitions {
        store.extend(partition);
    }
    store
}
