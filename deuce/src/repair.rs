//! Re-pairing of flat single-contender odds lists, for bookmakers whose listings carry no
//! home/away market structure.
//!
//! Entries are grouped by event label, in order of first appearance. Within a group, each unused
//! entry is matched with the first later unused entry quoting a different contender; both are
//! consumed. Matching is first-found in source order, not optimal. Unmatched leftovers are dropped.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::odds::Odds;
use crate::pair::OddsPair;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelledOdds {
    pub odds: Odds,
    pub event: String,
}

pub fn repair(entries: Vec<LabelledOdds>) -> Vec<OddsPair> {
    let mut group_indexes: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<Odds>> = vec![];
    for entry in entries {
        let index = *group_indexes.entry(entry.event.clone()).or_insert_with(|| {
            groups.push(vec![]);
            groups.len() - 1
        });
        groups[index].push(entry.odds);
    }

    let mut labels = vec![String::new(); groups.len()];
    for (label, index) in group_indexes {
        labels[index] = label;
    }

    let mut pairs = vec![];
    for (group, label) in groups.into_iter().zip(labels) {
        pair_within(group, &label, &mut pairs);
    }
    pairs
}

fn pair_within(group: Vec<Odds>, event: &str, pairs: &mut Vec<OddsPair>) {
    let mut slots: Vec<Option<Odds>> = group.into_iter().map(Some).collect();
    for home_index in 0..slots.len() {
        let Some(home) = slots[home_index].take() else {
            continue;
        };
        let away_index = (home_index + 1..slots.len()).find(|&index| {
            slots[index]
                .as_ref()
                .is_some_and(|candidate| candidate.contender() != home.contender())
        });
        match away_index.and_then(|index| slots[index].take()) {
            Some(away) => match OddsPair::new(home, away, event) {
                Ok(pair) => pairs.push(pair),
                Err(err) => debug!("unable to pair odds in '{event}': {err}"),
            },
            None => debug!("no counterpart for {home} in '{event}'"),
        }
    }
}
