use criterion::{criterion_group, criterion_main, Criterion};

use playoffs::enumerate::{enumerate, enumerate_all, enumerate_parallel};
use playoffs::estimate::Tally;
use playoffs::fixture::Match;
use playoffs::outcome::OutcomeStore;
use playoffs::points::PointsTable;
use playoffs::team::Team;

fn criterion_benchmark(c: &mut Criterion) {
    fn fixtures(teams: usize, remaining: usize) -> (PointsTable, Vec<Match>) {
        let standings = PointsTable::new((0..teams as u32).map(|team| team * 2).collect());
        let matches = (0..remaining)
            .map(|index| {
                let first = index % teams;
                let second = (first + 1 + index / teams) % teams;
                Match::new(
                    Team::index(usize::min(first, second)),
                    Team::index(usize::max(first, second)),
                )
            })
            .collect();
        (standings, matches)
    }

    // sanity check
    let (standings, matches) = fixtures(8, 12);
    assert_eq!(1 << 12, enumerate_all(&standings, &matches).len());

    fn bench(c: &mut Criterion, teams: usize, remaining: usize) {
        let (standings, matches) = fixtures(teams, remaining);
        c.bench_function(&format!("cri_enumerate_store_{teams}t{remaining}r"), |b| {
            b.iter(|| {
                let (mut points, mut matches) = (standings.clone(), matches.clone());
                let mut store = OutcomeStore::for_remaining(matches.len());
                enumerate(&mut points, &mut matches, &mut store);
                store
            });
        });
        c.bench_function(&format!("cri_enumerate_tally_{teams}t{remaining}r"), |b| {
            b.iter(|| {
                let (mut points, mut matches) = (standings.clone(), matches.clone());
                let mut tally = Tally::new(teams, 4);
                enumerate(&mut points, &mut matches, &mut tally);
                tally.outcomes()
            });
        });
        c.bench_function(&format!("cri_enumerate_parallel_{teams}t{remaining}r"), |b| {
            b.iter(|| enumerate_parallel(&standings, &matches, 4));
        });
    }
    bench(c, 8, 12);
    bench(c, 8, 16);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
