//! The two-phase fetch shared by bookmakers running the categorized REST platform: a flat
//! listing of sport/tournament categories, then a separate event listing per category.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use deuce::display::{Counted, DisplaySlice};
use deuce::odds::Bookmaker;
use deuce::pair::OddsPair;
use deuce::skip::{self, Skip};

use crate::config::{TourFilter, ValidationError, CATEGORIZED_THROTTLE, TOURS};
use crate::record::{self, decode};
use crate::transport::Transport;

const EXCLUDED: [&str; 11] = [
    "Challenger",
    "ITF",
    "UTR",
    "Junior",
    "Juniorzy",
    "Kwalifikacje",
    "Klasyfikacja",
    "Debel",
    "Deble",
    "Pro Series",
    "Exhibition",
];

const ID_PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone)]
pub struct Config {
    pub bookmaker: Bookmaker,
    pub category_url: String,
    /// Per-category event listing; `{}` stands for the category ID.
    pub event_url_template: String,
    pub throttle: Duration,
    pub sport_label: String,
    pub filter: TourFilter,
    pub winner_market: String,
}
impl Config {
    pub fn new(bookmaker: Bookmaker, category_url: impl Into<String>, event_url_template: impl Into<String>) -> Self {
        Self {
            bookmaker,
            category_url: category_url.into(),
            event_url_template: event_url_template.into(),
            throttle: CATEGORIZED_THROTTLE,
            sport_label: "Tenis".into(),
            filter: TourFilter::new(&TOURS, &EXCLUDED),
            winner_market: "Zwycięzca meczu".into(),
        }
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.category_url.is_empty() {
            return Err(ValidationError("category URL must not be empty".into()));
        }
        if self.event_url_template.matches(ID_PLACEHOLDER).count() != 1 {
            return Err(ValidationError(format!(
                "event URL template '{}' must contain exactly one '{ID_PLACEHOLDER}'",
                self.event_url_template
            )));
        }
        if self.winner_market.is_empty() {
            return Err(ValidationError("winner market label must not be empty".into()));
        }
        self.filter.validate()
    }

    pub fn event_url(&self, category_id: u64) -> String {
        self.event_url_template
            .replacen(ID_PLACEHOLDER, &category_id.to_string(), 1)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: u64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub sport_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    #[serde(default)]
    event_name: String,
    #[serde(default)]
    category3_name: String,
    #[serde(default)]
    event_games: Vec<Game>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Game {
    #[serde(default)]
    game_name: String,
    #[serde(default)]
    outcomes: Vec<Outcome>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Outcome {
    #[serde(default)]
    outcome_name: String,
    #[serde(default)]
    outcome_odds: Value,
}

#[derive(Debug)]
pub struct CategorizedEventsParser {
    config: Config,
}
impl CategorizedEventsParser {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// IDs of the tour categories on offer, grouped by tour in configured order (WTA before ATP),
    /// each group in the order the listing returned them.
    pub async fn fetch_category_ids(&self, transport: &dyn Transport) -> anyhow::Result<Vec<u64>> {
        let payload = transport.get_json(&self.config.category_url).await?;
        let mut categories = vec![];
        for record in record::records(&payload, "data")? {
            match decode::<Category>(record) {
                Ok(category) => categories.push(category),
                Err(skip) => warn!("{}: unreadable category: {skip}", self.config.bookmaker),
            }
        }
        let ids = self.select_category_ids(&categories);
        info!(
            "{}: selected {} of {} categories: {}",
            self.config.bookmaker,
            ids.len(),
            categories.len(),
            DisplaySlice::from(&*ids)
        );
        Ok(ids)
    }

    pub fn select_category_ids(&self, categories: &[Category]) -> Vec<u64> {
        let mut by_tour = vec![vec![]; self.config.filter.tours.len()];
        for category in categories {
            if category.sport_name != self.config.sport_label {
                continue;
            }
            if let Some(tour) = self.config.filter.tour_of(&category.category_name) {
                by_tour[tour].push(category.category_id);
            }
        }
        by_tour.concat()
    }

    /// Raw event records across the given categories, requested one category at a time with the
    /// configured delay in between.
    pub async fn fetch_events(&self, transport: &dyn Transport, category_ids: &[u64]) -> anyhow::Result<Vec<Value>> {
        let mut events = vec![];
        for (index, &category_id) in category_ids.iter().enumerate() {
            if index > 0 && !self.config.throttle.is_zero() {
                debug!("throttling for {} ms..", self.config.throttle.as_millis());
                tokio::time::sleep(self.config.throttle).await;
            }
            let payload = transport.get_json(&self.config.event_url(category_id)).await?;
            let records = record::records(&payload, "data")?;
            debug!("category {category_id} holds {}", Counted::new(records.len(), "event"));
            events.extend_from_slice(records);
        }
        info!("{}: fetched {}", self.config.bookmaker, Counted::new(events.len(), "event"));
        Ok(events)
    }

    pub fn parse_event(&self, record: &Value) -> Result<OddsPair, Skip> {
        let event = decode::<EventRecord>(record)?;
        let game = event
            .event_games
            .iter()
            .find(|game| game.game_name == self.config.winner_market)
            .ok_or(Skip::MissingMarket)?;
        let [home, away] = game.outcomes.as_slice() else {
            return Err(Skip::OutcomeCount(game.outcomes.len()));
        };
        record::reject_doubles([home.outcome_name.as_str(), away.outcome_name.as_str()])?;
        let bookmaker = self.config.bookmaker;
        let home = record::side(bookmaker, &home.outcome_name, record::price(&home.outcome_odds)?)?;
        let away = record::side(bookmaker, &away.outcome_name, record::price(&away.outcome_odds)?)?;
        let label = if event.category3_name.is_empty() {
            event.event_name
        } else {
            event.category3_name
        };
        Ok(OddsPair::new(home, away, label)?)
    }

    pub async fn get_pairs(&self, transport: &dyn Transport) -> anyhow::Result<Vec<OddsPair>> {
        let category_ids = self.fetch_category_ids(transport).await?;
        let events = self.fetch_events(transport, &category_ids).await?;
        let (pairs, skipped) = skip::partition(events.iter().map(|event| self.parse_event(event)));
        info!(
            "{}: got {} ({} skipped: {skipped})",
            self.config.bookmaker,
            Counted::new(pairs.len(), "odds pair"),
            skipped.total()
        );
        Ok(pairs)
    }
}

impl TryFrom<Config> for CategorizedEventsParser {
    type Error = ValidationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}
