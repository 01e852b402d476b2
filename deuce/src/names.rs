//! Contender name handling. Every adapter passes names through [canonicalise] so that the same
//! player is rendered as `Firstname Lastname` regardless of the bookmaker.

/// Separates the two players of a doubles team, e.g. `B. Nowak/C. Wisniewski`.
pub const DOUBLES_SEPARATOR: char = '/';

const MATCHUP_SEPARATOR: &str = " - ";

pub fn is_doubles(name: &str) -> bool {
    name.contains(DOUBLES_SEPARATOR)
}

/// Trims and collapses whitespace, and reorders a `Last, First` form into `First Last`.
pub fn canonicalise(name: &str) -> String {
    match name.split_once(',') {
        Some((last, first)) if !first.trim().is_empty() && !last.trim().is_empty() => {
            join_tokens(first.split_whitespace().chain(last.split_whitespace()))
        }
        _ => join_tokens(name.split_whitespace()),
    }
}

/// Converts a `Lastname Firstname` rendering into the canonical `Firstname Lastname`, treating
/// the final token as the first name. Multi-token surnames stay in order.
pub fn surname_first_to_canonical(name: &str) -> String {
    let tokens: Vec<_> = name.split_whitespace().collect();
    match tokens.split_last() {
        Some((first, surname)) if !surname.is_empty() => {
            join_tokens(std::iter::once(*first).chain(surname.iter().copied()))
        }
        _ => canonicalise(name),
    }
}

/// Splits a `Home - Away` matchup label on its first separator.
pub fn split_matchup(label: &str) -> Option<(&str, &str)> {
    let (home, away) = label.split_once(MATCHUP_SEPARATOR)?;
    let (home, away) = (home.trim(), away.trim());
    if home.is_empty() || away.is_empty() {
        None
    } else {
        Some((home, away))
    }
}

fn join_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for token in tokens {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(token);
    }
    joined
}
