use rayon::prelude::*;
use serde_json::Value;
use std::{borrow::Cow, cmp::Ordering, fmt::Display};

use crate::station::Station;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Anything but `desc` sorts ascending.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "desc" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison key of a station field.
///
/// Keys of different kinds order as `Missing < Bool < Number < Text`, so a
/// station without the field always sorts first when ascending, whatever the
/// type of the field on the other stations.
#[derive(Debug, Clone)]
pub enum SortKey<'a> {
    Missing,
    Bool(bool),
    Number(f64),
    Text(Cow<'a, str>),
}

impl<'a> SortKey<'a> {
    pub fn of(station: &'a Station, field: &str) -> Self {
        match station.get(field) {
            None => Self::Missing,
            Some(Value::Bool(value)) => Self::Bool(*value),
            Some(Value::Number(value)) => value.as_f64().map_or(Self::Missing, Self::Number),
            Some(Value::String(value)) => Self::Text(Cow::Borrowed(value)),
            Some(value) => Self::Text(Cow::Owned(value.to_string())),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl PartialEq for SortKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey<'_> {}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Stable sort of `stations` by `field`.
///
/// Stations with equal keys keep their relative order in both directions.
pub fn sort_stations(stations: &mut [Station], field: &str, order: SortOrder) {
    stations.par_sort_by(|a, b| {
        let ordering = SortKey::of(a, field).cmp(&SortKey::of(b, field));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[test]
fn order_parse() {
    assert_eq!(SortOrder::parse("desc"), SortOrder::Descending);
    assert_eq!(SortOrder::parse("asc"), SortOrder::Ascending);
    assert_eq!(SortOrder::parse("DESC"), SortOrder::Ascending);
    assert_eq!(SortOrder::parse(""), SortOrder::Ascending);
}

#[test]
fn key_ranks() {
    assert!(SortKey::Missing < SortKey::Bool(false));
    assert!(SortKey::Bool(true) < SortKey::Number(-1.0));
    assert!(SortKey::Number(1e9) < SortKey::Text(Cow::Borrowed("")));
    assert_eq!(SortKey::Missing, SortKey::Missing);
}

#[test]
fn numbers_compare_numerically() {
    assert!(SortKey::Number(2.0) < SortKey::Number(10.0));
    assert!(SortKey::Text(Cow::Borrowed("10")) < SortKey::Text(Cow::Borrowed("2")));
}
