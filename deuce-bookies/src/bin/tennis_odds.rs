use std::env;
use std::error::Error;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use deuce::display::Counted;
use deuce::filter;
use deuce::odds::Bookmaker;
use deuce::pair::OddsPair;
use deuce::print;
use deuce_bookies::providers;
use deuce_bookies::transport::HttpTransport;

const DEFAULT_PROVIDERS: [Bookmaker; 2] = [Bookmaker::Betclic, Bookmaker::Betfan];

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// comma-separated bookmakers to scrape [default: betclic,betfan]
    #[clap(short = 'p', long, value_delimiter = ',')]
    providers: Option<Vec<Bookmaker>>,

    /// scrape every supported bookmaker
    #[clap(long)]
    all: bool,

    /// only show matches where a contender's name contains this token
    #[clap(short = 'q', long)]
    query: Option<String>,

    /// merge the bookmakers' pairs into one table, sorted by spread
    #[clap(long)]
    sort: bool,

    /// delay between consecutive requests to the same bookmaker, in milliseconds
    #[clap(long = "throttle-ms")]
    throttle_ms: Option<u64>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.all && self.providers.is_some() {
            bail!("the --all and -p flags are mutually exclusive");
        }
        if self.providers.as_ref().is_some_and(Vec::is_empty) {
            bail!("at least one provider must be specified");
        }
        if self.query.as_ref().is_some_and(|query| query.trim().is_empty()) {
            bail!("the query must not be blank");
        }
        Ok(())
    }

    fn bookmakers(&self) -> Vec<Bookmaker> {
        let mut bookmakers = if self.all {
            Bookmaker::iter().collect()
        } else {
            self.providers.clone().unwrap_or_else(|| DEFAULT_PROVIDERS.to_vec())
        };
        let mut seen = vec![];
        bookmakers.retain(|bookmaker| {
            let first = !seen.contains(bookmaker);
            seen.push(*bookmaker);
            first
        });
        bookmakers
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let transport = HttpTransport::new()?;
    let throttle = args.throttle_ms.map(Duration::from_millis);
    let mut per_provider = vec![];
    for bookmaker in args.bookmakers() {
        let pairs = providers::get_pairs(bookmaker, &transport, throttle).await?;
        let pairs = match &args.query {
            None => pairs,
            Some(query) => {
                let matching: Vec<_> = filter::search(&pairs, query).into_iter().cloned().collect();
                info!(
                    "{bookmaker}: {} matching '{query}'",
                    Counted::new(matching.len(), "odds pair")
                );
                matching
            }
        };
        per_provider.push((bookmaker, pairs));
    }

    if args.sort {
        let merged = filter::merge_by_spread(per_provider.into_iter().map(|(_, pairs)| pairs).collect());
        println!("\n{}, sorted by spread:", Counted::new(merged.len(), "odds pair"));
        print_pairs(&merged);
    } else {
        for (bookmaker, pairs) in per_provider {
            println!("\n{bookmaker}: {}", Counted::new(pairs.len(), "odds pair"));
            print_pairs(&pairs);
        }
    }
    Ok(())
}

fn print_pairs(pairs: &[OddsPair]) {
    let table = print::tabulate_pairs(pairs);
    println!("{}", Console::default().render(&table));
}
