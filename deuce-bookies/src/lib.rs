//! Adapters for the bookmakers' undocumented odds endpoints. Each adapter fetches raw listings,
//! screens out irrelevant records and hands comparable [deuce::pair::OddsPair]s to the core.

pub mod betclic;
pub mod betx;
pub mod categorized;
pub mod config;
pub mod forbet;
pub mod fortuna;
pub mod html;
pub mod lvbet;
pub mod providers;
pub mod record;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;
