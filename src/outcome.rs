//! Fully resolved futures and the store that collects them.

use crate::team::Team;
use std::ops::Index;
use std::slice::Iter;

/// Receives the final points table at every leaf of the enumeration tree.
pub trait OutcomeSink {
    fn accept(&mut self, points: &[u32]);
}

/// An immutable snapshot of the points table in one fully resolved future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    points: Box<[u32]>,
}
impl Outcome {
    pub fn teams(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[u32] {
        &self.points
    }

    pub fn total(&self) -> u32 {
        self.points.iter().sum()
    }
}

impl From<&[u32]> for Outcome {
    fn from(points: &[u32]) -> Self {
        Self {
            points: points.into(),
        }
    }
}

impl Index<Team> for Outcome {
    type Output = u32;

    fn index(&self, team: Team) -> &Self::Output {
        &self.points[team.as_index()]
    }
}

/// Every outcome of one enumeration run, in the order the leaves were reached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeStore {
    outcomes: Vec<Outcome>,
}
impl OutcomeStore {
    /// Reserves room for the `2^remaining` outcomes of a run over `remaining` matches.
    pub fn for_remaining(remaining: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(1 << remaining),
        }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Outcome> {
        self.outcomes.iter()
    }

    /// Appends the outcomes of another store, preserving their order.
    pub fn extend(&mut self, other: OutcomeStore) {
        self.outcomes.extend(other.outcomes);
    }
}

impl OutcomeSink for OutcomeStore {
    #[inline]
    fn accept(&mut self, points: &[u32]) {
        self.outcomes.push(Outcome::from(points));
    }
}

impl Index<usize> for OutcomeStore {
    type Output = Outcome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.outcomes[index]
    }
}

impl<'a> IntoIterator for &'a OutcomeStore {
    type Item = &'a Outcome;
    type IntoIter = Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
