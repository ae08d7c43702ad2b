//! Testing helpers.

use crate::estimate::ProbabilityRecord;
use crate::fixture::Match;
use crate::points::PointsTable;
use crate::team::Team;
use assert_float_eq::*;
use tinyrand::{Rand, Seeded, StdRand};

/// Generates a reproducible table of even points for `teams` teams and a list of `matches`
/// random pairings among them.
pub fn random_schedule(seed: u64, teams: usize, matches: usize) -> (PointsTable, Vec<Match>) {
    assert!(teams >= 2, "at least two teams are needed to schedule a match");
    let mut rand = StdRand::seed(seed);
    let points = (0..teams)
        .map(|_| (rand.next_u64() % 11) as u32 * 2)
        .collect::<Vec<_>>();
    let matches = (0..matches)
        .map(|_| {
            let first = (rand.next_u64() % teams as u64) as usize;
            let offset = 1 + (rand.next_u64() % (teams as u64 - 1)) as usize;
            let second = (first + offset) % teams;
            Match::new(
                Team::index(usize::min(first, second)),
                Team::index(usize::max(first, second)),
            )
        })
        .collect();
    (PointsTable::new(points), matches)
}

pub fn assert_records_near(expected: &[ProbabilityRecord], actual: &[ProbabilityRecord], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (expected, actual) in expected.iter().zip(actual) {
        assert_eq!(expected.team, actual.team);
        assert_float_absolute_eq!(expected.worst, actual.worst, epsilon);
        assert_float_absolute_eq!(expected.tie, actual.tie, epsilon);
        assert_float_absolute_eq!(expected.estimated, actual.estimated, epsilon);
    }
}
