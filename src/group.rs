use indexmap::{IndexMap, map::Iter};
use std::{borrow::Cow, collections::BTreeSet};

use crate::station::Station;

/// District used for stations that do not report one.
pub const UNKNOWN_DISTRICT: &str = "未知區";

type Groups<'a> = IndexMap<Cow<'a, str>, Vec<(usize, &'a Station)>>;

/// Stations partitioned by district.
///
/// Districts iterate in the order they were first seen. Every station is
/// paired with its zero-based position inside its district.
#[derive(Debug, Clone, Default)]
pub struct DistrictGroups<'a> {
    groups: Groups<'a>,
}

impl<'a> DistrictGroups<'a> {
    pub fn from_sorted<I>(stations: I) -> Self
    where
        I: IntoIterator<Item = &'a Station>,
    {
        let mut groups: Groups<'a> = IndexMap::new();
        for station in stations {
            let district = station
                .district()
                .unwrap_or(Cow::Borrowed(UNKNOWN_DISTRICT));
            let group = groups.entry(district).or_default();
            let position = group.len();
            group.push((position, station));
        }
        Self { groups }
    }

    pub fn get(&self, district: &str) -> Option<&[(usize, &'a Station)]> {
        self.groups.get(district).map(Vec::as_slice)
    }

    pub fn iter(&self) -> Iter<'_, Cow<'a, str>, Vec<(usize, &'a Station)>> {
        self.groups.iter()
    }

    pub fn districts(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(|district| &**district)
    }

    /// Number of districts.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of stations across all districts.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl<'a, 'g> IntoIterator for &'g DistrictGroups<'a> {
    type Item = (&'g Cow<'a, str>, &'g Vec<(usize, &'a Station)>);
    type IntoIter = Iter<'g, Cow<'a, str>, Vec<(usize, &'a Station)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Sorted, de-duplicated districts reported by `stations`.
pub fn districts(stations: &[Station]) -> Vec<String> {
    stations
        .iter()
        .filter_map(Station::district)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}
