//! lvbet.pl, serving a flat JSON listing of pre-match events across all sports.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use deuce::display::Counted;
use deuce::names;
use deuce::odds::{Bookmaker, Odds};
use deuce::pair::OddsPair;
use deuce::skip::{self, Skip};

use crate::record::{self, decode};
use crate::transport::Transport;

pub const URL: &str = "https://app.lvbet.pl/_api/v1/offer/matches/?is_live=false&lang=pl";

const BOOKMAKER: Bookmaker = Bookmaker::LvBet;
const SPORT_GROUP: &str = "tennis";
const EXCLUDED: [&str; 6] = ["ITF", "Challenger", "UTR", "deble", "Pro Series", "Doubles"];
const WINNER_MARKET: &str = "match-winner";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Match {
    #[serde(default)]
    sports_groups: Vec<SportsGroup>,
    #[serde(default)]
    participants: FxHashMap<String, String>,
    #[serde(default)]
    primary_markets: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct SportsGroup {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct Market {
    #[serde(default)]
    selections: Vec<Selection>,
}

#[derive(Debug, Deserialize)]
struct Selection {
    #[serde(default)]
    name: String,
    #[serde(default)]
    rate: Rate,
}

#[derive(Debug, Default, Deserialize)]
struct Rate {
    #[serde(default)]
    decimal: Value,
}

/// Tennis matches only, as grouped by the listing.
pub fn select_matches(records: &[Value]) -> Vec<&Value> {
    records
        .iter()
        .filter(|record| record["group"]["label"] == SPORT_GROUP)
        .collect()
}

fn is_winner_market(market: &Value) -> bool {
    market
        .as_object()
        .is_some_and(|fields| fields.values().any(|value| value == WINNER_MARKET))
}

/// The tournament name, from the third sports group: `Tournament - Round` → `Tournament`.
fn event_label(sports_groups: &[SportsGroup]) -> Result<String, Skip> {
    let [_, _, tournament] = sports_groups else {
        return Err(Skip::MissingField("sportsGroups"));
    };
    if EXCLUDED.iter().any(|&word| tournament.name.contains(word)) {
        return Err(Skip::ExcludedCompetition(tournament.name.clone()));
    }
    let label = tournament.name.split(" - ").next().unwrap_or_default();
    Ok(label.trim().into())
}

pub fn parse_match(record: &Value) -> Result<OddsPair, Skip> {
    let parsed = decode::<Match>(record)?;
    let event = event_label(&parsed.sports_groups)?;
    if parsed.participants.len() != 2 {
        return Err(Skip::MissingField("participants"));
    }
    if let Some(doubles) = parsed.participants.values().find(|name| names::is_doubles(name)) {
        return Err(Skip::Doubles(doubles.clone()));
    }
    let market = parsed
        .primary_markets
        .iter()
        .find(|market| is_winner_market(market))
        .ok_or(Skip::MissingMarket)?;
    let market = decode::<Market>(market)?;
    let [home, away] = market.selections.as_slice() else {
        return Err(Skip::OutcomeCount(market.selections.len()));
    };
    let side = |selection: &Selection| -> Result<Odds, Skip> {
        if !parsed.participants.values().any(|name| *name == selection.name) {
            return Err(Skip::UnknownContender(selection.name.clone()));
        }
        record::side(BOOKMAKER, &selection.name, record::price(&selection.rate.decimal)?)
    };
    let (home, away) = (side(home)?, side(away)?);
    Ok(OddsPair::new(home, away, event)?)
}

pub async fn get_pairs(transport: &dyn Transport) -> anyhow::Result<Vec<OddsPair>> {
    let payload = transport.get_json(URL).await?;
    let matches = select_matches(record::top_level_records(&payload)?);
    info!("{BOOKMAKER}: parsed {}", Counted::new(matches.len(), "match record"));
    let (pairs, skipped) = skip::partition(matches.into_iter().map(parse_match));
    info!(
        "{BOOKMAKER}: got {} ({} skipped: {skipped})",
        Counted::new(pairs.len(), "odds pair"),
        skipped.total()
    );
    Ok(pairs)
}
