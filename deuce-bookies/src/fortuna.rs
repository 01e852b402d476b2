//! efortuna.pl, scraped from the rendered tennis page: one table of matches per competition.

use anyhow::bail;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use deuce::display::Counted;
use deuce::names;
use deuce::odds::{Bookmaker, Odds};
use deuce::pair::OddsPair;
use deuce::skip::{self, parse_odds_text, Skip};
use deuce::timed::Timed;

use crate::config::{TourFilter, TOURS};
use crate::html::{selector, text_of};
use crate::record;
use crate::transport::Transport;

pub const URL: &str = "https://www.efortuna.pl/zaklady-bukmacherskie/tenis-mpl283";

const BOOKMAKER: Bookmaker = Bookmaker::Fortuna;
const EXCLUDED: [&str; 3] = ["ITF", "Chall", "debel"];
const LIVE_MARKER: &str = "LIVE";

/// Parses every match row of the accepted competitions. A page without any competition sections
/// is not one this adapter understands.
pub fn parse_page(html: &str) -> anyhow::Result<Vec<Result<OddsPair, Skip>>> {
    let doc = Html::parse_document(html);
    let sections: Vec<_> = doc.select(&selector("section.competition-box")?).collect();
    if sections.is_empty() {
        bail!("{BOOKMAKER}: page carries no competition sections");
    }
    let name = selector("span.competition-name")?;
    let rows = selector("table tbody tr")?;
    let cells = selector("td")?;
    let filter = TourFilter::new(&TOURS, &EXCLUDED);

    let mut results = vec![];
    for section in sections {
        let Some(competition) = section.select(&name).next().map(|span| text_of(&span)) else {
            debug!("{BOOKMAKER}: unnamed competition section");
            continue;
        };
        if !filter.accepts(&competition) {
            debug!("{BOOKMAKER}: passing over '{competition}'");
            continue;
        }
        results.extend(
            section
                .select(&rows)
                .map(|row| parse_row(&row, &cells, &competition)),
        );
    }
    Ok(results)
}

pub fn parse_row(row: &ElementRef, cells: &Selector, competition: &str) -> Result<OddsPair, Skip> {
    let mut cells = row.select(cells);
    let label = cells.next().map(|cell| text_of(&cell)).ok_or(Skip::MissingField("matchup"))?;
    if label.contains(LIVE_MARKER) {
        return Err(Skip::Live);
    }
    let (home, away) = names::split_matchup(&label).ok_or_else(|| Skip::Malformed(label.clone()))?;
    record::reject_doubles([home, away])?;
    let (Some(home_price), Some(away_price)) = (cells.next(), cells.next()) else {
        return Err(Skip::MissingField("odds"));
    };
    let home = side(home, &text_of(&home_price))?;
    let away = side(away, &text_of(&away_price))?;
    Ok(OddsPair::new(home, away, competition)?)
}

/// Names are listed surname first.
fn side(contender: &str, price: &str) -> Result<Odds, Skip> {
    let odds = parse_odds_text(price)?;
    Ok(BOOKMAKER.odds(names::surname_first_to_canonical(contender), odds)?)
}

pub async fn get_pairs(transport: &dyn Transport) -> anyhow::Result<Vec<OddsPair>> {
    let page = transport.get_text(URL).await?;
    let timed = Timed::result(|| parse_page(&page))?;
    debug!("{BOOKMAKER}: page parsed in {:.3} seconds", timed.elapsed.as_secs_f64());
    info!("{BOOKMAKER}: parsed {}", Counted::new(timed.value.len(), "row"));
    let (pairs, skipped) = skip::partition(timed.value);
    info!(
        "{BOOKMAKER}: got {} ({} skipped: {skipped})",
        Counted::new(pairs.len(), "odds pair"),
        skipped.total()
    );
    Ok(pairs)
}
