//! The mutable points table walked by the enumerator.

use crate::team::Team;
use std::ops::{Deref, DerefMut, Index};

/// Points awarded to the winner of a match. There are no draws and no split points.
pub const POINTS_PER_WIN: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsTable {
    points: Vec<u32>,
}
impl PointsTable {
    pub fn new(points: Vec<u32>) -> Self {
        Self { points }
    }

    pub fn zeroed(teams: usize) -> Self {
        Self::new(vec![0; teams])
    }

    pub fn teams(&self) -> usize {
        self.points.len()
    }

    pub fn total(&self) -> u32 {
        self.points.iter().sum()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.points
    }

    /// Awards a win to `team` for as long as the returned guard is alive. Dropping the guard
    /// takes the points back.
    #[inline]
    pub fn credit(&mut self, team: Team) -> Credit<'_> {
        self.points[team.as_index()] += POINTS_PER_WIN;
        Credit { table: self, team }
    }
}

impl Index<Team> for PointsTable {
    type Output = u32;

    fn index(&self, team: Team) -> &Self::Output {
        &self.points[team.as_index()]
    }
}

/// A win credited to a team of a borrowed [PointsTable], undone on drop.
#[derive(Debug)]
pub struct Credit<'a> {
    table: &'a mut PointsTable,
    team: Team,
}

impl Deref for Credit<'_> {
    type Target = PointsTable;

    fn deref(&self) -> &Self::Target {
        self.table
    }
}

impl DerefMut for Credit<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.table
    }
}

impl Drop for Credit<'_> {
    #[inline]
    fn drop(&mut self) {
        self.table.points[self.team.as_index()] -= POINTS_PER_WIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn credit_and_undo() {
        let mut table = PointsTable::new(vec![10, 8]);
        {
            let credit = table.credit(Team::index(1));
            assert_eq!(10, credit[Team::index(1)]);
            assert_eq!(20, credit.total());
        }
        assert_eq!(vec![10, 8], table.as_slice());
    }

    #[test]
    fn nested_credits() {
        let mut table = PointsTable::zeroed(3);
        {
            let mut outer = table.credit(Team::index(0));
            {
                let inner = outer.credit(Team::index(0));
                assert_eq!(&[4, 0, 0], inner.as_slice());
            }
            assert_eq!(&[2, 0, 0], outer.as_slice());
        }
        assert_eq!(0, table.total());
    }

    #[test]
    fn credit_undone_on_unwind() {
        let mut table = PointsTable::new(vec![6, 6]);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _credit = table.credit(Team::index(0));
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(vec![6, 6], table.as_slice());
    }
}
