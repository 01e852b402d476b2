//! betclic.pl, serving a flat JSON listing of tennis events.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use deuce::display::Counted;
use deuce::odds::Bookmaker;
use deuce::pair::OddsPair;
use deuce::skip::{self, Skip};

use crate::record::{self, decode, NamedPrice};
use crate::transport::Transport;

pub const URL: &str = "https://offer.cdn.begmedia.com/api/pub/v4/events?application=2048&countrycode=pl\
&fetchMultipleDefaultMarkets=true&language=pa&limit=400&offset=0&sitecode=plpa\
&sortBy=ByLiveRankingPreliveDate&sportIds=2";

const BOOKMAKER: Bookmaker = Bookmaker::Betclic;
const EXCLUDED: [&str; 3] = ["Challenger", "ITF", "Exhibition"];
const WINNER_MARKET: &str = "Zwycięzca meczu";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    #[serde(default)]
    is_live: bool,
    #[serde(default)]
    competition: Competition,
    #[serde(default)]
    markets: Vec<Market>,
}

#[derive(Debug, Default, Deserialize)]
struct Competition {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct Market {
    #[serde(default)]
    name: String,
    #[serde(default)]
    selections: Vec<NamedPrice>,
}

fn screen(event: &Event) -> Result<(), Skip> {
    if event.is_live {
        return Err(Skip::Live);
    }
    if EXCLUDED.iter().any(|&word| event.competition.name.contains(word)) {
        return Err(Skip::ExcludedCompetition(event.competition.name.clone()));
    }
    if event.markets.is_empty() {
        return Err(Skip::MissingField("markets"));
    }
    Ok(())
}

pub fn parse_event(record: &Value) -> Result<OddsPair, Skip> {
    let event = decode::<Event>(record)?;
    screen(&event)?;
    let market = event
        .markets
        .iter()
        .find(|market| market.name == WINNER_MARKET)
        .ok_or(Skip::MissingMarket)?;
    let [home, away] = market.selections.as_slice() else {
        return Err(Skip::OutcomeCount(market.selections.len()));
    };
    record::reject_doubles([home.name.as_str(), away.name.as_str()])?;
    let home = record::side(BOOKMAKER, &home.name, record::price(&home.odds)?)?;
    let away = record::side(BOOKMAKER, &away.name, record::price(&away.odds)?)?;
    Ok(OddsPair::new(home, away, event.competition.name)?)
}

pub async fn get_pairs(transport: &dyn Transport) -> anyhow::Result<Vec<OddsPair>> {
    let payload = transport.get_json(URL).await?;
    let events = record::top_level_records(&payload)?;
    info!("{BOOKMAKER}: retrieved {}", Counted::new(events.len(), "event"));
    let (pairs, skipped) = skip::partition(events.iter().map(parse_event));
    info!(
        "{BOOKMAKER}: got {} ({} skipped: {skipped})",
        Counted::new(pairs.len(), "odds pair"),
        skipped.total()
    );
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::testing::CannedTransport;

    use super::*;

    fn event(competition: &str, is_live: bool, selections: Value) -> Value {
        json!({
            "id": 1,
            "isLive": is_live,
            "competition": {"id": 7, "name": competition},
            "markets": [
                {"name": "Liczba gemów", "selections": [{"name": "Powyżej 21.5", "odds": 1.9}]},
                {"name": "Zwycięzca meczu", "selections": selections}
            ]
        })
    }

    fn swiatek_linette() -> Value {
        json!([{"name": "Iga Swiatek", "odds": 1.25}, {"name": "Magda Linette", "odds": 3.75}])
    }

    #[test]
    fn parse_valid() {
        let pair = parse_event(&event("WTA Warsaw", false, swiatek_linette())).unwrap();
        assert_eq!(("Iga Swiatek", "Magda Linette"), pair.contenders());
        assert_eq!("WTA Warsaw", pair.event());
        assert_eq!(Bookmaker::Betclic, pair.provider());
    }

    #[test]
    fn screen_out() {
        assert_eq!(Skip::Live, parse_event(&event("WTA Warsaw", true, swiatek_linette())).unwrap_err());
        assert_eq!(
            Skip::ExcludedCompetition("Challenger Szczecin".into()),
            parse_event(&event("Challenger Szczecin", false, swiatek_linette())).unwrap_err()
        );
        assert_eq!(
            Skip::MissingField("markets"),
            parse_event(&json!({"isLive": false, "competition": {"name": "ATP Paris"}, "markets": []})).unwrap_err()
        );
    }

    #[test]
    fn missing_winner_market_is_skipped() {
        let record = json!({
            "isLive": false,
            "competition": {"name": "ATP Paris"},
            "markets": [{"name": "Liczba gemów", "selections": []}]
        });
        assert_eq!(Skip::MissingMarket, parse_event(&record).unwrap_err());
    }

    #[test]
    fn doubles_without_price_counted_as_doubles() {
        let record = event(
            "WTA Warsaw",
            false,
            json!([{"name": "Iga Swiatek", "odds": "-"}, {"name": "B. Nowak/C. Wisniewski", "odds": "-"}]),
        );
        assert_eq!(Skip::Doubles("B. Nowak/C. Wisniewski".into()), parse_event(&record).unwrap_err());
    }

    #[test]
    fn wrong_selection_count_is_skipped() {
        let record = event("ATP Paris", false, json!([{"name": "Hubert Hurkacz", "odds": 1.8}]));
        assert_eq!(Skip::OutcomeCount(1), parse_event(&record).unwrap_err());
    }

    #[tokio::test]
    async fn get_pairs_skips_bad_records() {
        let transport = CannedTransport::default().with_json(
            URL,
            json!([
                event("WTA Warsaw", false, swiatek_linette()),
                event("WTA Warsaw", true, swiatek_linette()),
                {"isLive": false, "competition": {"name": "ATP Paris"}, "markets": [{"name": "Handicap"}]},
            ]),
        );
        let pairs = get_pairs(&transport).await.unwrap();
        assert_eq!(1, pairs.len());
        assert_eq!(vec![URL.to_owned()], transport.requests());
    }
}
