//! Teams and the roster that names them.
//!
//! A [Team] is numbered from 1 in user-facing data and indexed from 0 internally, in the same way
//! that every table in this crate is laid out.

use anyhow::{bail, Context};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Team(usize);

impl Team {
    pub fn number(number: usize) -> Self {
        Self::try_number(number).unwrap()
    }

    pub fn try_number(number: usize) -> anyhow::Result<Self> {
        if number == 0 {
            bail!("invalid team number");
        }
        Ok(Self(number - 1))
    }

    pub fn index(index: usize) -> Self {
        Self(index)
    }

    pub fn as_index(&self) -> usize {
        self.0
    }

    pub fn as_number(&self) -> usize {
        self.0 + 1
    }

    /// All teams in a tournament of `teams` participants, in ascending order.
    pub fn all(teams: usize) -> impl Iterator<Item = Team> {
        (0..teams).map(Team::index)
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.as_number())
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.as_number() as u64)
    }
}

impl FromStr for Team {
    type Err = anyhow::Error;

    /// Accepts either the display form (`t7`) or a bare team number (`7`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('t').unwrap_or(s);
        if digits.is_empty() {
            bail!("no digits to parse in '{s}'");
        }
        let number: usize = digits
            .parse()
            .with_context(|| format!("invalid team '{s}'"))?;
        Team::try_number(number)
    }
}

/// Display names of the tournament participants, indexed by [Team].
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    names: Vec<String>,
}
impl Roster {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// A roster that names each team after its display form.
    pub fn anonymous(teams: usize) -> Self {
        Self::new(Team::all(teams).map(|team| team.to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, team: Team) -> &str {
        &self.names[team.as_index()]
    }

    pub fn teams(&self) -> impl Iterator<Item = Team> {
        Team::all(self.names.len())
    }

    pub fn find(&self, name: &str) -> Option<Team> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(Team::index)
    }
}

impl Index<Team> for Roster {
    type Output = str;

    fn index(&self, team: Team) -> &Self::Output {
        self.name(team)
    }
}
