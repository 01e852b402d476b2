//! Extraction helpers over raw JSON records. Missing or mistyped fields yield a [Skip] rather
//! than a failure of the whole scrape.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use deuce::names;
use deuce::odds::{Bookmaker, Odds};
use deuce::skip::{parse_odds_text, Skip};

pub fn decode<D: DeserializeOwned>(record: &Value) -> Result<D, Skip> {
    D::deserialize(record).map_err(|err| Skip::Malformed(err.to_string()))
}

/// The array held under `key` in a listing payload. Its absence means the payload is not what the
/// adapter understands, which is a hard error.
pub fn records<'a>(payload: &'a Value, key: &str) -> anyhow::Result<&'a [Value]> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .with_context(|| format!("payload carries no '{key}' array"))
}

pub fn top_level_records(payload: &Value) -> anyhow::Result<&[Value]> {
    payload
        .as_array()
        .map(Vec::as_slice)
        .context("payload is not an array")
}

/// A price rendered either as a JSON number or as text.
pub fn price(value: &Value) -> Result<f64, Skip> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| Skip::UnavailableOdds(number.to_string())),
        Value::String(text) => parse_odds_text(text),
        Value::Null => Err(Skip::UnavailableOdds(String::new())),
        other => Err(Skip::UnavailableOdds(other.to_string())),
    }
}

/// Passes over a quote naming a doubles team on either side. Checked ahead of the prices, so that
/// a doubles quote with an unavailable price is still counted as doubles.
pub fn reject_doubles<'a>(contenders: impl IntoIterator<Item = &'a str>) -> Result<(), Skip> {
    match contenders.into_iter().find(|contender| names::is_doubles(contender)) {
        Some(doubles) => Err(Skip::Doubles(doubles.into())),
        None => Ok(()),
    }
}

/// Builds one side of a quote, canonicalising the name and validating the price.
pub fn side(bookmaker: Bookmaker, contender: &str, odds: f64) -> Result<Odds, Skip> {
    Ok(bookmaker.odds(names::canonicalise(contender), odds)?)
}

/// A `{name, price}` outcome as found in most listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedPrice {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub odds: Value,
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn price_variants() {
        assert_float_absolute_eq!(1.5, price(&json!(1.5)).unwrap(), 1e-12);
        assert_float_absolute_eq!(2.25, price(&json!("2,25")).unwrap(), 1e-12);
        assert_eq!(Skip::UnavailableOdds("-".into()), price(&json!("-")).unwrap_err());
        assert_eq!(Skip::UnavailableOdds("".into()), price(&Value::Null).unwrap_err());
        assert_eq!(Skip::UnavailableOdds("true".into()), price(&json!(true)).unwrap_err());
    }

    #[test]
    fn reject_doubles_on_either_side() {
        assert_eq!(Ok(()), reject_doubles(["Iga Swiatek", "Magda Linette"]));
        assert_eq!(
            Err(Skip::Doubles("Nowak B./Wisniewski C.".into())),
            reject_doubles(["Iga Swiatek", "Nowak B./Wisniewski C."])
        );
    }

    #[test]
    fn side_canonicalises() {
        let odds = side(Bookmaker::Etoto, "Swiatek,  Iga", 1.2).unwrap();
        assert_eq!("Iga Swiatek", odds.contender());
        assert_eq!(Bookmaker::Etoto, odds.provider());
    }

    #[test]
    fn side_rejects_invalid_odds() {
        assert!(matches!(
            side(Bookmaker::Etoto, "Iga Swiatek", 0.0).unwrap_err(),
            Skip::InvalidOdds(_)
        ));
    }

    #[test]
    fn decode_malformed() {
        let err = decode::<NamedPrice>(&json!({"name": 5})).unwrap_err();
        assert!(matches!(err, Skip::Malformed(_)), "{err:?}");
    }

    #[test]
    fn records_present_and_absent() {
        let payload = json!({"data": [1, 2]});
        assert_eq!(2, records(&payload, "data").unwrap().len());
        assert_eq!(
            "payload carries no 'events' array",
            records(&payload, "events").unwrap_err().to_string()
        );
        assert_eq!(
            "payload is not an array",
            top_level_records(&payload).unwrap_err().to_string()
        );
    }
}
