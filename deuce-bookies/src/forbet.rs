//! iforbet.pl, scraped from rendered pages. The tennis menu on the main page yields the tour
//! category IDs; each category page then lists single-contender odds that are re-paired by event.

use std::time::Duration;

use anyhow::bail;
use scraper::{ElementRef, Html};
use tracing::{debug, info, warn};

use deuce::display::{Counted, DisplaySlice};
use deuce::names;
use deuce::odds::Bookmaker;
use deuce::pair::OddsPair;
use deuce::repair::{repair, LabelledOdds};
use deuce::skip::{self, parse_odds_text, Skip};
use deuce::timed::Timed;

use crate::config::{TourFilter, ValidationError, FORBET_THROTTLE, TOURS};
use crate::html::{selector, text_of};
use crate::record;
use crate::transport::Transport;

pub const MAIN_URL: &str = "https://www.iforbet.pl/zaklady-bukmacherskie";
pub const CATEGORY_URL_TEMPLATE: &str = "https://www.iforbet.pl/oferta/8/{}";

const BOOKMAKER: Bookmaker = Bookmaker::ForBet;
const EXCLUDED: [&str; 3] = ["ITF", "Challenger", "Klasyfikacja"];
const WINNER_GAME: &str = "Zwycięzca";
const ID_PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone)]
pub struct Config {
    pub main_url: String,
    /// Per-category page; `{}` stands for the category ID.
    pub category_url_template: String,
    pub throttle: Duration,
    pub filter: TourFilter,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            main_url: MAIN_URL.into(),
            category_url_template: CATEGORY_URL_TEMPLATE.into(),
            throttle: FORBET_THROTTLE,
            filter: TourFilter::new(&TOURS, &EXCLUDED),
        }
    }
}
impl Config {
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.main_url.is_empty() {
            return Err(ValidationError("main page URL must not be empty".into()));
        }
        if self.category_url_template.matches(ID_PLACEHOLDER).count() != 1 {
            return Err(ValidationError(format!(
                "category URL template '{}' must contain exactly one '{ID_PLACEHOLDER}'",
                self.category_url_template
            )));
        }
        self.filter.validate()
    }

    pub fn category_url(&self, category_id: u64) -> String {
        self.category_url_template
            .replacen(ID_PLACEHOLDER, &category_id.to_string(), 1)
    }
}

/// The outcome of reading one category page.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryPage {
    /// The breadcrumb is absent or names an excluded competition.
    Rejected(Skip),
    Listed(Vec<Result<LabelledOdds, Skip>>),
}

#[derive(Debug)]
pub struct ForbetParser {
    config: Config,
}
impl ForbetParser {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// IDs of the tour categories in the main page's tennis menu, in page order.
    pub fn parse_category_ids(&self, html: &str) -> anyhow::Result<Vec<u64>> {
        let doc = Html::parse_document(html);
        let Some(tennis) = doc.select(&selector("div#cat-5")?).next() else {
            bail!("{BOOKMAKER}: main page carries no tennis menu");
        };
        let title = selector("div.title span")?;
        let category = selector("div.cat3.hide")?;
        let mut ids = vec![];
        for tour in tennis.select(&selector("div.cat2.hide")?) {
            let is_tour = tour.select(&title).next().is_some_and(|span| {
                let text = text_of(&span);
                self.config.filter.tours.iter().any(|tag| text.contains(tag.as_str()))
            });
            if !is_tour {
                continue;
            }
            for element in tour.select(&category) {
                match category_id(&element) {
                    Some(id) => ids.push(id),
                    None => warn!("{BOOKMAKER}: unreadable category ID {:?}", element.value().attr("id")),
                }
            }
        }
        Ok(ids)
    }

    pub fn parse_category_page(&self, html: &str) -> anyhow::Result<CategoryPage> {
        let doc = Html::parse_document(html);
        let menus = selector("div.left.outcomes-menu.uppercase.tl")?;
        let links = selector("a")?;
        let Some(crumb) = doc
            .select(&menus)
            .nth(1)
            .and_then(|menu| menu.select(&links).nth(2))
        else {
            return Ok(CategoryPage::Rejected(Skip::MissingField("breadcrumb")));
        };
        let competition = text_of(&crumb);
        if self.config.filter.excludes(&competition) {
            return Ok(CategoryPage::Rejected(Skip::ExcludedCompetition(competition)));
        }
        let entries = selector(&format!("div.event-rate[data-gamename=\"{WINNER_GAME}\"]"))?;
        Ok(CategoryPage::Listed(doc.select(&entries).map(|entry| parse_entry(&entry)).collect()))
    }

    pub async fn get_pairs(&self, transport: &dyn Transport) -> anyhow::Result<Vec<OddsPair>> {
        let main_page = transport.get_text(&self.config.main_url).await?;
        let category_ids = self.parse_category_ids(&main_page)?;
        info!(
            "{BOOKMAKER}: parsed {}: {}",
            Counted::new(category_ids.len(), "category ID"),
            DisplaySlice::from(&*category_ids)
        );

        let mut results = vec![];
        for (index, &category_id) in category_ids.iter().enumerate() {
            if index > 0 && !self.config.throttle.is_zero() {
                debug!("throttling for {} ms..", self.config.throttle.as_millis());
                tokio::time::sleep(self.config.throttle).await;
            }
            let page = transport.get_text(&self.config.category_url(category_id)).await?;
            let timed = Timed::result(|| self.parse_category_page(&page))?;
            debug!(
                "category {category_id} parsed in {:.3} seconds",
                timed.elapsed.as_secs_f64()
            );
            match timed.value {
                CategoryPage::Rejected(skip) => debug!("category {category_id} passed over: {skip}"),
                CategoryPage::Listed(entries) => results.extend(entries),
            }
        }

        let (entries, skipped) = skip::partition(results);
        info!(
            "{BOOKMAKER}: got {} ({} skipped: {skipped})",
            Counted::new(entries.len(), "outcome"),
            skipped.total()
        );
        let pairs = repair(entries);
        info!("{BOOKMAKER}: got {}", Counted::new(pairs.len(), "odds pair"));
        Ok(pairs)
    }
}

impl TryFrom<Config> for ForbetParser {
    type Error = ValidationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// Element IDs take the form `…-<id>`.
fn category_id(element: &ElementRef) -> Option<u64> {
    element
        .value()
        .attr("id")?
        .rsplit('-')
        .next()?
        .parse()
        .ok()
}

/// Outcome names are listed surname first.
fn parse_entry(entry: &ElementRef) -> Result<LabelledOdds, Skip> {
    let attr = |name: &'static str| entry.value().attr(name).ok_or(Skip::MissingField(name));
    let contender = attr("data-outcomename")?;
    record::reject_doubles([contender])?;
    let price = parse_odds_text(attr("data-outcomeodds")?)?;
    let event = attr("data-eventname")?;
    Ok(LabelledOdds {
        odds: BOOKMAKER.odds(names::surname_first_to_canonical(contender), price)?,
        event: event.trim().into(),
    })
}

#[cfg(test)]
mod tests;
