//! Aggregation helpers over odds and pairs gathered from one or more bookmakers.

use crate::odds::Odds;
use crate::pair::OddsPair;

/// Picks the first odds quoted for each of `home` and `away` and pairs them.
///
/// No check is made that the two entries belong to the same match; the caller must supply names
/// that correspond to one.
pub fn filter_pair(odds: &[Odds], home: &str, away: &str, event: &str) -> Option<OddsPair> {
    let home = odds.iter().find(|odds| odds.contender() == home)?;
    let away = odds.iter().find(|odds| odds.contender() == away)?;
    OddsPair::new(home.clone(), away.clone(), event).ok()
}

/// Flattens pairs into their sides, pair by pair, home before away.
pub fn flatten_pairs_to_odds(pairs: &[OddsPair]) -> Vec<Odds> {
    pairs
        .iter()
        .flat_map(|pair| [pair.home().clone(), pair.away().clone()])
        .collect()
}

/// Sorts by ascending spread. The sort is stable.
pub fn sort_by_spread(pairs: &mut [OddsPair]) {
    pairs.sort_by(|a, b| a.spread().total_cmp(&b.spread()));
}

/// Concatenates per-bookmaker pair lists and sorts the result by ascending spread, so that quotes
/// for the same match from different bookmakers tend to sit next to each other.
pub fn merge_by_spread(per_provider: Vec<Vec<OddsPair>>) -> Vec<OddsPair> {
    let mut merged: Vec<_> = per_provider.into_iter().flatten().collect();
    sort_by_spread(&mut merged);
    merged
}

/// Pairs where any token of either contender's name contains `query`, ignoring case.
pub fn search<'a>(pairs: &'a [OddsPair], query: &str) -> Vec<&'a OddsPair> {
    pairs.iter().filter(|pair| pair.matches_token(query)).collect()
}
