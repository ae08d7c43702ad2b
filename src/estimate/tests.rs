use super::*;
use crate::enumerate::{enumerate, enumerate_all};
use crate::fixture::Match;
use crate::points::PointsTable;
use crate::testing::{assert_records_near, random_schedule};
use assert_float_eq::*;

fn fixture(first: usize, second: usize) -> Match {
    Match::new(Team::number(first), Team::number(second))
}

#[test]
fn standing_counts() {
    let points = [16, 14, 14, 14, 12, 10];
    assert_eq!(
        Standing {
            above: 1,
            below: 2,
            tied: 3
        },
        Standing::of(&points, Team::number(3))
    );
    assert_eq!(
        Standing {
            above: 0,
            below: 5,
            tied: 1
        },
        Standing::of(&points, Team::number(1))
    );
}

#[test]
fn standing_contention() {
    // five teams level on 14 points behind one leader, fighting for three remaining slots
    let standing = Standing::of(&[16, 14, 14, 14, 14, 10, 8, 6], Team::number(2));
    assert!(standing.secures(4));
    assert!(standing.contends(4));
    assert_f64_near!(0.75, standing.tie_share(4));

    // the tied block fits inside the cutoff
    let standing = Standing::of(&[16, 14, 14, 14, 12, 10, 8, 6], Team::number(2));
    assert!(standing.secures(4));
    assert!(!standing.contends(4));
    assert_eq!(0.0, standing.tie_share(4));

    // too far behind
    let standing = Standing::of(&[16, 14, 14, 14, 12, 10, 8, 6], Team::number(6));
    assert!(!standing.secures(4));
    assert!(!standing.contends(4));
}

#[test]
fn two_teams_one_match() {
    let standings = PointsTable::new(vec![10, 8]);
    let store = enumerate_all(&standings, &[fixture(1, 2)]);

    let a = estimate(&store, Team::number(1), 1);
    assert_f64_near!(1.0, a.worst);
    assert_f64_near!(0.25, a.tie);
    // the worst-case and tie terms overlap in the drawn-level outcome
    assert_f64_near!(1.25, a.estimated);

    let b = estimate(&store, Team::number(2), 1);
    assert_f64_near!(0.5, b.worst);
    assert_f64_near!(0.25, b.tie);
    assert_f64_near!(0.75, b.estimated);
}

#[test]
fn level_teams_no_matches() {
    let standings = PointsTable::new(vec![12, 12, 12, 12]);
    let store = enumerate_all(&standings, &[]);
    let records = estimate_all(&store, 4);
    assert_eq!(4, records.len());
    for (index, record) in records.iter().enumerate() {
        assert_eq!(Team::index(index), record.team);
        assert_eq!(1.0, record.worst);
        assert_eq!(0.0, record.tie);
        assert_eq!(1.0, record.estimated);
    }
}

#[test]
fn tied_block_straddling_cutoff() {
    let standings = PointsTable::new(vec![4, 4, 4, 2]);
    let store = enumerate_all(&standings, &[fixture(1, 4)]);
    let records = estimate_all(&store, 2);
    assert_records_near(
        &[
            ProbabilityRecord::new(Team::number(1), 1.0, 0.25),
            ProbabilityRecord::new(Team::number(2), 1.0, 0.5),
            ProbabilityRecord::new(Team::number(3), 1.0, 0.5),
            ProbabilityRecord::new(Team::number(4), 0.5, 0.25),
        ],
        &records,
        1e-12,
    );
}

#[test]
fn eliminated_and_qualified() {
    let standings = PointsTable::new(vec![20, 18, 2, 0]);
    let store = enumerate_all(&standings, &[fixture(3, 4), fixture(1, 2)]);
    let records = estimate_all(&store, 2);
    assert_records_near(
        &[
            ProbabilityRecord::new(Team::number(1), 1.0, 0.0),
            ProbabilityRecord::new(Team::number(2), 1.0, 0.0),
            ProbabilityRecord::new(Team::number(3), 0.0, 0.0),
            ProbabilityRecord::new(Team::number(4), 0.0, 0.0),
        ],
        &records,
        1e-12,
    );
}

#[test]
fn bounds_hold_in_random_schedules() {
    const CUTOFF: usize = 4;
    for seed in 0..8 {
        let (standings, matches) = random_schedule(seed, 8, 8);
        let store = enumerate_all(&standings, &matches);

        for record in estimate_all(&store, CUTOFF) {
            assert!((0.0..=1.0).contains(&record.worst), "{record:?}");
            assert!((0.0..=1.0).contains(&record.tie), "{record:?}");
            assert!(record.worst <= record.estimated, "{record:?}");
        }

        // tied blocks never share out more slots than the cutoff admits
        for outcome in &store {
            let allocated: f64 = Team::all(outcome.teams())
                .map(|team| Standing::of(outcome.points(), team).tie_share(CUTOFF))
                .sum();
            assert!(allocated <= CUTOFF as f64 + 1e-9, "{outcome:?}");
        }
    }
}

#[test]
fn tally_agrees_with_store() {
    for seed in 0..5 {
        let (standings, matches) = random_schedule(seed, 8, 10);
        let store = enumerate_all(&standings, &matches);

        let mut tally = Tally::new(standings.teams(), 4);
        let (mut points, mut remaining) = (standings.clone(), matches.clone());
        enumerate(&mut points, &mut remaining, &mut tally);

        assert_eq!(store.len() as u64, tally.outcomes());
        assert_records_near(&estimate_all(&store, 4), &tally.records(), 1e-12);
    }
}
