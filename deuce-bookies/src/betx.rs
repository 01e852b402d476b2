//! ebetx.pl, queried with a JSON POST spanning the coming year of matches.

use chrono::{Datelike, Duration, Local, NaiveDateTime};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use deuce::display::Counted;
use deuce::odds::Bookmaker;
use deuce::pair::OddsPair;
use deuce::skip::{self, Skip};

use crate::config::{TourFilter, TOURS};
use crate::record::{self, decode};
use crate::transport::Transport;

pub const URL: &str = "https://sportapis.ebetx.pl/SportOfferApi/api/sport/offer/v2/sports/offer";

const BOOKMAKER: Bookmaker = Bookmaker::BetX;
const TENNIS_SPORT_ID: u64 = 389;
const PAGE_LIMIT: u64 = 50;
const EXCLUDED: [&str; 4] = ["Challenger", "ITF", "UTR", "Debel"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The offer query: tennis matches starting from `now` up to a year later.
pub fn post_body(now: NaiveDateTime) -> Value {
    let year_after = now
        .with_year(now.year() + 1)
        .unwrap_or_else(|| now + Duration::days(365));
    json!({
        "Offset": 0,
        "Limit": PAGE_LIMIT,
        "SportIds": [TENNIS_SPORT_ID],
        "CategoryIds": [],
        "LeagueIds": [],
        "DateFrom": now.format(TIMESTAMP_FORMAT).to_string(),
        "DateTo": year_after.format(TIMESTAMP_FORMAT).to_string(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Category {
    #[serde(default)]
    leagues: Vec<League>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct League {
    #[serde(default)]
    name: String,
    #[serde(default)]
    matches: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Match {
    #[serde(default)]
    team_home: String,
    #[serde(default)]
    team_away: String,
    basic_offer: Option<BasicOffer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BasicOffer {
    #[serde(default)]
    odds: Vec<Price>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Price {
    #[serde(default)]
    odd: Value,
}

/// A match record together with the name of the league listing it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueMatch {
    pub league: String,
    pub record: Value,
}

/// Flattens the response's categories and leagues into their matches.
pub fn extract_matches(payload: &Value) -> anyhow::Result<Vec<LeagueMatch>> {
    let response = record::records(payload, "Response")?;
    let Some(sport) = response.first() else {
        return Ok(vec![]);
    };
    let mut matches = vec![];
    for category in record::records(sport, "Categories")? {
        let category = match decode::<Category>(category) {
            Ok(category) => category,
            Err(skip) => {
                warn!("{BOOKMAKER}: unreadable category: {skip}");
                continue;
            }
        };
        for league in category.leagues {
            matches.extend(league.matches.into_iter().map(|record| LeagueMatch {
                league: league.name.clone(),
                record,
            }));
        }
    }
    Ok(matches)
}

pub fn parse_match(filter: &TourFilter, league_match: &LeagueMatch) -> Result<OddsPair, Skip> {
    if !filter.accepts(&league_match.league) {
        return Err(Skip::ExcludedCompetition(league_match.league.clone()));
    }
    let parsed = decode::<Match>(&league_match.record)?;
    let offer = parsed.basic_offer.ok_or(Skip::MissingMarket)?;
    let [home, away] = offer.odds.as_slice() else {
        return Err(Skip::OutcomeCount(offer.odds.len()));
    };
    if parsed.team_home.is_empty() {
        return Err(Skip::MissingField("TeamHome"));
    }
    if parsed.team_away.is_empty() {
        return Err(Skip::MissingField("TeamAway"));
    }
    record::reject_doubles([parsed.team_home.as_str(), parsed.team_away.as_str()])?;
    let home = record::side(BOOKMAKER, &parsed.team_home, record::price(&home.odd)?)?;
    let away = record::side(BOOKMAKER, &parsed.team_away, record::price(&away.odd)?)?;
    Ok(OddsPair::new(home, away, league_match.league.as_str())?)
}

pub async fn get_pairs(transport: &dyn Transport) -> anyhow::Result<Vec<OddsPair>> {
    let body = post_body(Local::now().naive_local());
    let payload = transport.post_json(URL, &body).await?;
    let matches = extract_matches(&payload)?;
    info!("{BOOKMAKER}: retrieved {} for further parsing", Counted::new(matches.len(), "match record"));
    let filter = TourFilter::new(&TOURS, &EXCLUDED);
    let (pairs, skipped) = skip::partition(matches.iter().map(|league_match| parse_match(&filter, league_match)));
    info!(
        "{BOOKMAKER}: got {} ({} skipped: {skipped})",
        Counted::new(pairs.len(), "odds pair"),
        skipped.total()
    );
    Ok(pairs)
}
