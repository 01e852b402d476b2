//! Two-sided quotes for a single match and the analytics derived from them.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;

use crate::odds::{Bookmaker, Odds};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidPair {
    #[error("both sides quote the same contender '{0}'")]
    SameContender(String),

    #[error("sides are quoted by different bookmakers: {home} and {away}")]
    MixedProviders { home: Bookmaker, away: Bookmaker },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsPair {
    home: Odds,
    away: Odds,
    event: String,
}
impl OddsPair {
    pub fn new(home: Odds, away: Odds, event: impl Into<String>) -> Result<Self, InvalidPair> {
        if home.contender() == away.contender() {
            return Err(InvalidPair::SameContender(home.contender().into()));
        }
        if home.provider() != away.provider() {
            return Err(InvalidPair::MixedProviders {
                home: home.provider(),
                away: away.provider(),
            });
        }
        Ok(Self {
            home,
            away,
            event: event.into(),
        })
    }

    pub fn home(&self) -> &Odds {
        &self.home
    }

    pub fn away(&self) -> &Odds {
        &self.away
    }

    /// The event or tournament label; empty if the bookmaker does not supply one.
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn provider(&self) -> Bookmaker {
        self.home.provider()
    }

    /// The bookmaker's overround: the sum of implied probabilities less one.
    pub fn margin(&self) -> f64 {
        self.home.implied_prob() + self.away.implied_prob() - 1.0
    }

    pub fn margin_as_percent_string(&self) -> String {
        format!("{:.2}%", self.margin() * 100.0)
    }

    /// The absolute difference between the two prices.
    pub fn spread(&self) -> f64 {
        (self.home.odds() - self.away.odds()).abs()
    }

    pub fn contenders(&self) -> (&str, &str) {
        (self.home.contender(), self.away.contender())
    }

    /// Whitespace-delimited tokens of the home name followed by those of the away name. The
    /// iterator is lazy and may be cloned to restart the traversal.
    pub fn name_parts(&self) -> NameParts<'_> {
        NameParts {
            home: self.home.contender().split_whitespace(),
            away: self.away.contender().split_whitespace(),
        }
    }

    /// Whether any name token contains `query`, ignoring case.
    pub fn matches_token(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name_parts().any(|part| part.to_lowercase().contains(&query))
    }
}

impl Display for OddsPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)?;
        if !self.event.is_empty() {
            write!(f, " [{}]", self.event)?;
        }
        write!(f, " margin={} spread={:.2}", self.margin_as_percent_string(), self.spread())
    }
}

#[derive(Debug, Clone)]
pub struct NameParts<'a> {
    home: std::str::SplitWhitespace<'a>,
    away: std::str::SplitWhitespace<'a>,
}

impl<'a> Iterator for NameParts<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.home.next().or_else(|| self.away.next())
    }
}
