//! Routes each bookmaker to its adapter.

use std::time::Duration;

use anyhow::Context;
use tracing::info;

use deuce::odds::Bookmaker;
use deuce::pair::OddsPair;
use deuce::timed::Timed;

use crate::categorized::{self, CategorizedEventsParser};
use crate::forbet::{self, ForbetParser};
use crate::transport::Transport;
use crate::{betclic, betx, fortuna, lvbet};

/// Endpoints of the bookmakers running the categorized REST platform.
pub fn categorized_config(bookmaker: Bookmaker) -> Option<categorized::Config> {
    let host = match bookmaker {
        Bookmaker::Betfan => "https://betfan.pl",
        Bookmaker::Etoto => "https://api.etoto.pl",
        Bookmaker::EWinner => "https://ewinner.pl",
        Bookmaker::Fuksiarz => "https://fuksiarz.pl",
        _ => return None,
    };
    Some(categorized::Config::new(
        bookmaker,
        format!("{host}/rest/market/categories"),
        format!("{host}/rest/market/categories/multi/{{}}/events"),
    ))
}

/// Scrapes a single bookmaker. `throttle` overrides the default delay between consecutive
/// requests where an adapter issues several.
pub async fn get_pairs(
    bookmaker: Bookmaker,
    transport: &dyn Transport,
    throttle: Option<Duration>,
) -> anyhow::Result<Vec<OddsPair>> {
    info!("retrieving data from {bookmaker}...");
    let timed = Timed::future(dispatch(bookmaker, transport, throttle))
        .await
        .with_context(|| format!("failed to scrape {bookmaker}"))?;
    info!(
        "{bookmaker}: scraped in {:.3} seconds",
        timed.elapsed.as_secs_f64()
    );
    Ok(timed.value)
}

async fn dispatch(
    bookmaker: Bookmaker,
    transport: &dyn Transport,
    throttle: Option<Duration>,
) -> anyhow::Result<Vec<OddsPair>> {
    match bookmaker {
        Bookmaker::Betclic => betclic::get_pairs(transport).await,
        Bookmaker::BetX => betx::get_pairs(transport).await,
        Bookmaker::ForBet => {
            let mut config = forbet::Config::default();
            if let Some(throttle) = throttle {
                config = config.with_throttle(throttle);
            }
            ForbetParser::try_from(config)?.get_pairs(transport).await
        }
        Bookmaker::Fortuna => fortuna::get_pairs(transport).await,
        Bookmaker::LvBet => lvbet::get_pairs(transport).await,
        Bookmaker::Betfan | Bookmaker::Etoto | Bookmaker::EWinner | Bookmaker::Fuksiarz => {
            let mut config = categorized_config(bookmaker)
                .with_context(|| format!("{bookmaker} does not run the categorized platform"))?;
            if let Some(throttle) = throttle {
                config = config.with_throttle(throttle);
            }
            CategorizedEventsParser::try_from(config)?.get_pairs(transport).await
        }
    }
}
