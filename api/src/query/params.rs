//! Query-string binding for filter dimensions.
//!
//! Filters never fail a request: an unknown enum token or an unparsable
//! number is dropped and the dimension falls back to its "no filter"
//! sentinel.

use serde::de::{DeserializeOwned, IntoDeserializer, value::Error as ValueError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A single-valued filter with a distinguished "all" token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<V> {
    All,
    Only(V),
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Selection::All
    }
}

impl<V> Selection<V> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<V: Serialize> Serialize for Selection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str("all"),
            Selection::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, V: DeserializeOwned> Deserialize<'de> for Selection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| parse_token(&raw)).map_or(Selection::All, Selection::Only))
    }
}

/// Parse one token into a serde enum (or any type a string can become).
fn parse_token<V: DeserializeOwned>(raw: &str) -> Option<V> {
    let token = raw.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("all") {
        return None;
    }
    V::deserialize(token.to_string().into_deserializer())
        .map_err(|_: ValueError| ())
        .ok()
}

/// `a,b,c` into a list, dropping blanks and unknown tokens.
pub fn comma_list<'de, D, V>(deserializer: D) -> Result<Vec<V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .filter_map(parse_token)
        .collect())
}

/// A `FromStr` value, or `None` when missing or malformed.
pub fn lenient<'de, D, V>(deserializer: D) -> Result<Option<V>, D::Error>
where
    D: Deserializer<'de>,
    V: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.trim().parse().ok()))
}

/// A serde enum, or its default when missing or unknown.
pub fn lenient_enum<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| parse_token(&raw)).unwrap_or_default())
}
