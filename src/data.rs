//! Loading of season data from a directory of JSON files.
//!
//! The directory holds:
//!
//! * `games.json`: matches played per pair, keyed by team number in both directions, e.g.
//!   `{"1": {"2": 1, "3": 2}, "2": {"1": 1, "3": 0}, ...}`;
//! * `points_table.json`: current points per team number, e.g. `{"1": 14, "2": 10, ...}`;
//! * `teams_map.json`: display name per team number, e.g. `{"1": "CSK", "2": "DC", ...}`;
//! * optionally, `progress.json`: results so far per team name, e.g. `{"CSK": "1101", ...}`.
//!
//! JSON object keys are always strings; they are parsed into [Team]s here.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};

use crate::config::Config;
use crate::fixture::FixtureCounts;
use crate::points::PointsTable;
use crate::progress::Progress;
use crate::season::Season;
use crate::team::{Roster, Team};

pub const GAMES_FILE: &str = "games.json";
pub const POINTS_FILE: &str = "points_table.json";
pub const TEAMS_FILE: &str = "teams_map.json";
pub const PROGRESS_FILE: &str = "progress.json";

pub type RawGames = FxHashMap<String, FxHashMap<String, u8>>;
pub type RawPoints = FxHashMap<String, u32>;
pub type RawTeams = FxHashMap<String, String>;
pub type RawProgress = FxHashMap<String, String>;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<D> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    from_reader(file).with_context(|| format!("cannot decode {}", path.display()))
}

/// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    to_writer_pretty(file, value).with_context(|| format!("cannot encode {}", path.display()))
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D> {
        read_json(path)
    }
}

/// Reads the season held in `dir`, for a tournament of [Config::teams] participants.
pub fn read_season(dir: impl AsRef<Path>, config: &Config) -> anyhow::Result<Season> {
    let dir = dir.as_ref();
    let games = RawGames::read_json_file(dir.join(GAMES_FILE))?;
    let points = RawPoints::read_json_file(dir.join(POINTS_FILE))?;
    let teams = RawTeams::read_json_file(dir.join(TEAMS_FILE))?;
    season_from_raw(games, points, teams, config.teams)
}

/// Reads `progress.json` from `dir`, ordered by team name.
pub fn read_progress(dir: impl AsRef<Path>) -> anyhow::Result<Vec<Progress>> {
    let raw = RawProgress::read_json_file(dir.as_ref().join(PROGRESS_FILE))?;
    progress_from_raw(raw)
}

pub fn season_from_raw(
    games: RawGames,
    points: RawPoints,
    teams: RawTeams,
    num_teams: usize,
) -> anyhow::Result<Season> {
    let roster = Roster::new(by_team(teams, num_teams, "name")?);
    let standings = PointsTable::new(by_team(points, num_teams, "points")?);

    let mut fixtures = FixtureCounts::default();
    for (first, opponents) in games {
        let first = parse_team(&first)?;
        for (second, played) in opponents {
            fixtures.insert(first, parse_team(&second)?, played);
        }
    }

    Ok(Season {
        roster,
        fixtures,
        standings,
    })
}

pub fn progress_from_raw(raw: RawProgress) -> anyhow::Result<Vec<Progress>> {
    let mut progress = raw
        .into_iter()
        .map(|(team, results)| Progress::parse(team, &results))
        .collect::<Result<Vec<_>, _>>()?;
    progress.sort_by(|a, b| a.team.cmp(&b.team));
    Ok(progress)
}

fn parse_team(key: &str) -> anyhow::Result<Team> {
    Team::from_str(key).with_context(|| format!("invalid team key '{key}'"))
}

/// Lays out a map keyed by team number as a vector indexed by team, requiring exactly one value
/// for each of the `num_teams` participants.
fn by_team<V>(map: FxHashMap<String, V>, num_teams: usize, what: &str) -> anyhow::Result<Vec<V>> {
    let mut values: Vec<Option<V>> = (0..num_teams).map(|_| None).collect();
    for (key, value) in map {
        let team = parse_team(&key)?;
        let slot = values
            .get_mut(team.as_index())
            .ok_or(anyhow!("{what} given for {team}, which is not a participant"))?;
        if slot.replace(value).is_some() {
            bail!("{what} given twice for {team}");
        }
    }
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| value.ok_or(anyhow!("missing {what} for {}", Team::index(index))))
        .collect()
}
