//! Collection document codec
//!
//! A collection is stored as one string: the JSON array with every double
//! quote replaced by a single quote. Apostrophes inside text are written as
//! the JSON escape `\u0027` first, so reading the value back (single quotes
//! turned into double quotes, then parsed) yields the original strings.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a whole collection into its stored form.
pub fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    let json = serde_json::to_string(items)?;
    Ok(json.replace('\'', "\\u0027").replace('"', "'"))
}

/// Parse a stored collection. A blank value is an empty collection.
pub fn decode<T: DeserializeOwned>(value: &str) -> Result<Vec<T>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    let json = value.replace('\'', "\"");
    Ok(serde_json::from_str(&json)?)
}
