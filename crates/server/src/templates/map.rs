use serde::Serialize;
use tracing::error;
use youbike::{
    board::Board,
    shared::geo::{Coordinate, TAIPEI},
};

use crate::dto::MapStationDto;

const ZOOM: u8 = 13;

/// Leaflet map with one marker per located station.
#[derive(Serialize)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    /// Emitted unescaped into a `<script>` element.
    pub markers_json: String,
}

impl MapView {
    pub fn new(board: &Board) -> Self {
        let markers: Vec<MapStationDto> = board
            .located()
            .map(|(station, coordinate)| MapStationDto::from(station, coordinate))
            .collect();
        let center = Coordinate::centroid(
            markers
                .iter()
                .map(|marker| Coordinate::from((marker.latitude, marker.longitude))),
        )
        .unwrap_or(TAIPEI);
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            zoom: ZOOM,
            markers_json: script_json(&markers),
        }
    }
}

/// JSON safe to inline in a `<script>` element.
fn script_json(markers: &[MapStationDto]) -> String {
    match serde_json::to_string(markers) {
        Ok(json) => json.replace('<', "\\u003c"),
        Err(err) => {
            error!("Failed to serialize map markers: {err}");
            "[]".into()
        }
    }
}

#[test]
fn script_json_cannot_close_the_script() {
    let marker = MapStationDto {
        sna: "</script><b>".into(),
        ar: String::new(),
        available_rent_bikes: Some(1),
        available_return_bikes: None,
        latitude: 25.0,
        longitude: 121.5,
    };
    let json = script_json(&[marker]);
    assert!(!json.contains("</script>"));
    assert!(json.contains("\\u003c/script>"));
}

#[test]
fn map_centres_on_taipei_without_markers() {
    let map = MapView::new(&Board::default());
    assert_eq!(map.latitude, TAIPEI.latitude);
    assert_eq!(map.longitude, TAIPEI.longitude);
    assert_eq!(map.zoom, 13);
    assert_eq!(map.markers_json, "[]");
}
