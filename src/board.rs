use tracing::debug;

use crate::{
    group::{self, DistrictGroups},
    query::StationQuery,
    shared::geo::Coordinate,
    sort::{self, SortOrder},
    station::{Station, fields},
};

/// Everything a visitor can ask of the station board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardQuery {
    pub search: String,
    pub district: String,
    pub sort_by: String,
    pub order: SortOrder,
}

impl Default for BoardQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            district: String::new(),
            sort_by: fields::NAME.into(),
            order: SortOrder::Ascending,
        }
    }
}

impl BoardQuery {
    pub fn new() -> Self {
        Default::default()
    }

    /// Drops the search text and district, keeping the sort.
    pub fn cleared(mut self) -> Self {
        self.search.clear();
        self.district.clear();
        self
    }

    pub fn station_query(&self) -> StationQuery {
        StationQuery::new()
            .search(&self.search)
            .district(&self.district)
    }
}

/// Filtered and sorted stations for one request.
#[derive(Debug, Clone, Default)]
pub struct Board {
    districts: Vec<String>,
    stations: Vec<Station>,
}

impl Board {
    pub fn build(stations: Vec<Station>, query: &BoardQuery) -> Self {
        let total = stations.len();
        let districts = group::districts(&stations);
        let mut stations = query.station_query().filter(stations);
        sort::sort_stations(&mut stations, &query.sort_by, query.order);
        debug!(
            "Board kept {} of {total} stations sorted by {} {}",
            stations.len(),
            query.sort_by,
            query.order
        );
        Self {
            districts,
            stations,
        }
    }

    /// Every district in the feed, filters not applied.
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    /// Filtered stations in sort order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn groups(&self) -> DistrictGroups<'_> {
        DistrictGroups::from_sorted(&self.stations)
    }

    /// Stations that can be placed on a map.
    pub fn located(&self) -> impl Iterator<Item = (&Station, Coordinate)> {
        self.stations
            .iter()
            .filter_map(|station| Some((station, station.coordinate()?)))
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
