//! Candy Land win-distribution engine.
//!
//! Estimates the distribution of turns needed to finish a game two ways:
//! direct Monte Carlo simulation of shuffled-deck games, and exact forward
//! propagation of a probability vector through the board's transition matrix.

pub mod engine;
pub mod games;
