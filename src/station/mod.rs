use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

pub mod fields;

use crate::shared::geo::Coordinate;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y%m%d%H%M%S"];

/// One station as reported by the upstream feed.
///
/// The feed owns the schema, so the record is kept as the raw JSON object and
/// every accessor falls back to an empty value instead of failing. A `null`
/// is treated exactly like a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station(Map<String, Value>);

impl From<Map<String, Value>> for Station {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl Station {
    pub fn new() -> Self {
        Default::default()
    }

    /// Raw value of `field`, `None` when absent or null.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self.0.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// Text value of `field`, empty when absent or not a string.
    pub fn text(&self, field: &str) -> &str {
        match self.get(field) {
            Some(Value::String(value)) => value,
            _ => "",
        }
    }

    /// Value of `field` formatted for display.
    pub fn display(&self, field: &str) -> Cow<'_, str> {
        match self.get(field) {
            None => Cow::Borrowed(""),
            Some(Value::String(value)) => Cow::Borrowed(value),
            Some(value) => Cow::Owned(value.to_string()),
        }
    }

    /// Whole-number value of `field`. Fractions are not counts and yield `None`.
    pub fn count(&self, field: &str) -> Option<i64> {
        match self.get(field)? {
            Value::Number(value) => value.as_i64().or_else(|| {
                value
                    .as_f64()
                    .filter(|value| value.fract() == 0.0)
                    .map(|value| value as i64)
            }),
            Value::String(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        match self.get(field)? {
            Value::Number(value) => value.as_f64(),
            Value::String(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        self.text(fields::NAME)
    }

    /// District as shown on the board, `None` only when absent or null.
    pub fn district(&self) -> Option<Cow<'_, str>> {
        self.get(fields::DISTRICT)?;
        Some(self.display(fields::DISTRICT))
    }

    pub fn address(&self) -> &str {
        self.text(fields::ADDRESS)
    }

    pub fn available_rent_bikes(&self) -> Option<i64> {
        self.count(fields::AVAILABLE_RENT_BIKES)
    }

    pub fn available_return_bikes(&self) -> Option<i64> {
        self.count(fields::AVAILABLE_RETURN_BIKES)
    }

    /// Position of the station. A zero latitude or longitude counts as
    /// unknown, the feed uses it for docks that have not been surveyed.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let latitude = self.number(fields::LATITUDE).filter(|value| *value != 0.0)?;
        let longitude = self.number(fields::LONGITUDE).filter(|value| *value != 0.0)?;
        Some(Coordinate {
            latitude,
            longitude,
        })
    }

    pub fn updated_at(&self) -> &str {
        self.text(fields::UPDATED_AT)
    }

    pub fn updated_at_parsed(&self) -> Option<NaiveDateTime> {
        let raw = self.updated_at().trim();
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }

    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(field.to_string(), value.into());
        self
    }
}

#[cfg(test)]
fn station(value: Value) -> Station {
    serde_json::from_value(value).unwrap()
}

#[test]
fn missing_fields_degrade() {
    let station = Station::new();
    assert_eq!(station.name(), "");
    assert_eq!(station.address(), "");
    assert_eq!(station.district(), None);
    assert_eq!(station.available_rent_bikes(), None);
    assert_eq!(station.coordinate(), None);
    assert_eq!(station.display(fields::AVAILABLE_RENT_BIKES), "");
}

#[test]
fn null_is_missing() {
    let station = station(serde_json::json!({ "sarea": null, "sna": null }));
    assert_eq!(station.district(), None);
    assert_eq!(station.get(fields::NAME), None);
}

#[test]
fn counts_accept_numeric_strings() {
    let station = station(serde_json::json!({
        "available_rent_bikes": "7",
        "available_return_bikes": 3,
    }));
    assert_eq!(station.available_rent_bikes(), Some(7));
    assert_eq!(station.available_return_bikes(), Some(3));
    assert_eq!(station.display(fields::AVAILABLE_RETURN_BIKES), "3");
}

#[test]
fn fractional_counts_are_not_counts() {
    let station = station(serde_json::json!({
        "available_rent_bikes": 0.5,
        "available_return_bikes": 4.0,
    }));
    assert_eq!(station.available_rent_bikes(), None);
    assert_eq!(station.number(fields::AVAILABLE_RENT_BIKES), Some(0.5));
    assert_eq!(station.available_return_bikes(), Some(4));
}

#[test]
fn non_string_district_is_displayed() {
    let station = station(serde_json::json!({ "sna": "A", "sarea": 5 }));
    assert_eq!(station.district().as_deref(), Some("5"));
    assert_eq!(station.display(fields::DISTRICT), "5");
}

#[test]
fn zero_coordinate_is_unknown() {
    let unsurveyed = station(serde_json::json!({ "latitude": 0, "longitude": 121.5 }));
    assert_eq!(unsurveyed.coordinate(), None);

    let surveyed = station(serde_json::json!({ "latitude": 25.02, "longitude": "121.5" }));
    assert_eq!(surveyed.coordinate(), Some(Coordinate::from((25.02, 121.5))));
}

#[test]
fn parses_both_timestamp_forms() {
    let expected = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 34, 56)
        .unwrap();

    let dashed = station(serde_json::json!({ "mday": "2024-05-01 12:34:56" }));
    assert_eq!(dashed.updated_at_parsed(), Some(expected));

    let compact = station(serde_json::json!({ "mday": "20240501123456" }));
    assert_eq!(compact.updated_at_parsed(), Some(expected));

    let garbage = station(serde_json::json!({ "mday": "yesterday" }));
    assert_eq!(garbage.updated_at_parsed(), None);
}
