//! A single contender's decimal price for winning a match, as quoted by one bookmaker.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Bookmaker {
    #[strum(serialize = "betclic")]
    Betclic,
    #[strum(serialize = "betfan")]
    Betfan,
    #[strum(serialize = "betx")]
    BetX,
    #[strum(serialize = "etoto")]
    Etoto,
    #[strum(serialize = "ewinner")]
    EWinner,
    #[strum(serialize = "forbet")]
    ForBet,
    #[strum(serialize = "fortuna")]
    Fortuna,
    #[strum(serialize = "fuksiarz")]
    Fuksiarz,
    #[strum(serialize = "lvbet")]
    LvBet,
}
impl Bookmaker {
    /// The bookmaker's name as it brands itself.
    pub fn label(&self) -> &'static str {
        match self {
            Bookmaker::Betclic => "Betclic",
            Bookmaker::Betfan => "BETFAN",
            Bookmaker::BetX => "BetX",
            Bookmaker::Etoto => "ETOTO",
            Bookmaker::EWinner => "eWinner",
            Bookmaker::ForBet => "ForBET",
            Bookmaker::Fortuna => "Fortuna",
            Bookmaker::Fuksiarz => "Fuksiarz",
            Bookmaker::LvBet => "LV BET",
        }
    }

    /// The lower-case identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        self.into()
    }

    /// Creates odds quoted by this bookmaker.
    pub fn odds(self, contender: impl Into<String>, odds: f64) -> Result<Odds, InvalidOdds> {
        Odds::new(self, contender, odds)
    }
}

impl Display for Bookmaker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidOdds {
    #[error("odds for '{contender}' must be finite and positive, got {odds}")]
    OutOfRange { contender: String, odds: f64 },

    #[error("contender name must not be blank")]
    BlankContender,
}

#[derive(Debug, Clone, Serialize)]
pub struct Odds {
    provider: Bookmaker,
    contender: String,
    odds: f64,
}
impl Odds {
    pub fn new(provider: Bookmaker, contender: impl Into<String>, odds: f64) -> Result<Self, InvalidOdds> {
        let contender = contender.into();
        if contender.trim().is_empty() {
            return Err(InvalidOdds::BlankContender);
        }
        if !odds.is_finite() || odds <= 0.0 {
            return Err(InvalidOdds::OutOfRange { contender, odds });
        }
        Ok(Self {
            provider,
            contender,
            odds,
        })
    }

    pub fn provider(&self) -> Bookmaker {
        self.provider
    }

    pub fn contender(&self) -> &str {
        &self.contender
    }

    pub fn odds(&self) -> f64 {
        self.odds
    }

    /// The probability implied by the price, overround included.
    pub fn implied_prob(&self) -> f64 {
        1.0 / self.odds
    }
}

/// Odds are compared by contender and price only; the quoting bookmaker is disregarded.
impl PartialEq for Odds {
    fn eq(&self, other: &Self) -> bool {
        self.contender == other.contender && self.odds == other.odds
    }
}

impl Display for Odds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:.2})", self.contender, self.odds)
    }
}
