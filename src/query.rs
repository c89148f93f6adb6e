use rayon::prelude::*;

use crate::{shared, station::Station};

/// Filter over stations by free text and district.
///
/// Both parts are optional and combine with AND. Blank input disables a part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationQuery {
    needle: Option<String>,
    district: Option<String>,
}

impl StationQuery {
    pub fn new() -> Self {
        Default::default()
    }

    /// Case-insensitive substring match against the station name or address.
    pub fn search(mut self, text: &str) -> Self {
        let text = text.trim();
        self.needle = (!text.is_empty()).then(|| shared::normalize(text));
        self
    }

    /// Exact, case-sensitive match against the station district.
    pub fn district(mut self, district: &str) -> Self {
        let district = district.trim();
        self.district = (!district.is_empty()).then(|| district.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_none() && self.district.is_none()
    }

    pub fn matches(&self, station: &Station) -> bool {
        if let Some(district) = &self.district
            && station.district().as_deref() != Some(district.as_str())
        {
            return false;
        }
        match &self.needle {
            Some(needle) => {
                shared::normalize(station.name()).contains(needle.as_str())
                    || shared::normalize(station.address()).contains(needle.as_str())
            }
            None => true,
        }
    }

    /// Keeps the matching stations in their original order.
    pub fn filter(&self, stations: Vec<Station>) -> Vec<Station> {
        if self.is_empty() {
            return stations;
        }
        stations
            .into_par_iter()
            .filter(|station| self.matches(station))
            .collect()
    }
}
