use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::station::Station;

/// Realtime YouBike 2.0 feed published by the Taipei City open data platform.
pub const DEFAULT_URL: &str =
    "https://tcgbusfs.blob.core.windows.net/dotapp/youbike/v2/youbike_immediate.json";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Feed should be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Parses a feed body into stations.
///
/// Elements of the array that are not objects are skipped, everything else
/// is kept as-is, duplicates included.
pub fn parse(body: &[u8]) -> Result<Vec<Station>, self::Error> {
    let value: Value = serde_json::from_slice(body)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(self::Error::NotAnArray(kind(&other))),
    };

    let total = items.len();
    let stations: Vec<Station> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(Station::from(map)),
            _ => None,
        })
        .collect();
    if stations.len() != total {
        debug!(
            "Skipped {} feed entries that were not objects",
            total - stations.len()
        );
    }
    Ok(stations)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[test]
fn kind_names() {
    assert_eq!(kind(&Value::Null), "null");
    assert_eq!(kind(&serde_json::json!({})), "an object");
}
