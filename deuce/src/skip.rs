//! Reasons for passing over a single bookmaker record, and their tallies.
//!
//! Parsing a record yields `Result<OddsPair, Skip>`: a malformed or irrelevant record is skipped
//! and the scrape carries on. Transport and payload-level failures are not skips; they abort the
//! provider run.

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;
use strum_macros::IntoStaticStr;
use thiserror::Error;

use crate::odds::InvalidOdds;
use crate::pair::InvalidPair;

#[derive(Debug, Clone, PartialEq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Skip {
    #[error("no match winner market")]
    MissingMarket,

    #[error("expected 2 outcomes, got {0}")]
    OutcomeCount(usize),

    #[error("doubles contender '{0}'")]
    Doubles(String),

    #[error("odds unavailable: '{0}'")]
    UnavailableOdds(String),

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("live event")]
    Live,

    #[error("excluded competition '{0}'")]
    ExcludedCompetition(String),

    #[error("outcome '{0}' is not a participant")]
    UnknownContender(String),

    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("{0}")]
    InvalidOdds(#[from] InvalidOdds),

    #[error("{0}")]
    InvalidPair(#[from] InvalidPair),
}
impl Skip {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// Parses a decimal price as rendered in markup. Accepts a decimal comma. A dash, blank text or
/// promotional placeholder means the price is not currently offered.
pub fn parse_odds_text(text: &str) -> Result<f64, Skip> {
    let trimmed = text.trim();
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|odds| odds.is_finite())
        .ok_or_else(|| Skip::UnavailableOdds(trimmed.into()))
}

/// Counts of skipped records, keyed by [Skip::kind].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SkipTally {
    counts: FxHashMap<&'static str, usize>,
}
impl SkipTally {
    pub fn record(&mut self, skip: &Skip) {
        *self.counts.entry(skip.kind()).or_default() += 1;
    }

    pub fn count(&self, kind: &str) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Display for SkipTally {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        write!(f, "{{")?;
        for (index, (kind, count)) in entries.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{kind}: {count}")?;
        }
        write!(f, "}}")
    }
}

/// Separates accepted items from skipped records, logging each skip.
pub fn partition<T>(results: impl IntoIterator<Item = Result<T, Skip>>) -> (Vec<T>, SkipTally) {
    let mut accepted = vec![];
    let mut tally = SkipTally::default();
    for result in results {
        match result {
            Ok(item) => accepted.push(item),
            Err(skip) => {
                tracing::debug!("skipped record: {skip}");
                tally.record(&skip);
            }
        }
    }
    (accepted, tally)
}
