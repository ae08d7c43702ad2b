//! Exhaustive estimation of top-_K_ playoff probabilities in a round-robin tournament.
//!
//! Every way the remaining matches can be won or lost is enumerated from the current standings.
//! Each team is then ranked in every resulting points table, and its chance of a playoff spot is
//! estimated from the fraction of futures in which it finishes clear of the cutoff, together with
//! an equal share of the contested slots whenever it finishes level across the cutoff.

pub mod config;
pub mod data;
pub mod display;
pub mod enumerate;
pub mod estimate;
pub mod fixture;
pub mod outcome;
pub mod points;
pub mod print;
pub mod progress;
pub mod season;
pub mod team;

#[cfg(test)]
pub(crate) mod testing;
