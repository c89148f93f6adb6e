use serde::{Deserialize, Serialize};
use youbike::{shared::geo::Coordinate, station::Station};

/// Marker data handed to the map script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStationDto {
    pub sna: String,
    pub ar: String,
    pub available_rent_bikes: Option<i64>,
    pub available_return_bikes: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
}

impl MapStationDto {
    pub fn from(station: &Station, coordinate: Coordinate) -> Self {
        Self {
            sna: station.name().to_string(),
            ar: station.address().to_string(),
            available_rent_bikes: station.available_rent_bikes(),
            available_return_bikes: station.available_return_bikes(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }
}
