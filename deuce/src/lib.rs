//! Normalisation and pairing of tennis match-winner odds sourced from multiple bookmakers.
//! Turns heterogeneous per-provider prices into comparable two-sided quotes with derived
//! margin and spread.

pub mod display;
pub mod filter;
pub mod names;
pub mod odds;
pub mod pair;
pub mod print;
pub mod repair;
pub mod skip;
pub mod timed;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
