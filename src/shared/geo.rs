use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Taipei City Hall, where the map opens before any marker is known.
pub const TAIPEI: Coordinate = Coordinate {
    latitude: 25.0330,
    longitude: 121.5654,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinate {
    /// Mean position of all coordinates, `None` when there are none.
    pub fn centroid<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut count: usize = 0;
        let mut lat: f64 = 0.0;
        let mut lon: f64 = 0.0;
        iter.into_iter().for_each(|coordinate| {
            count += 1;
            lat += coordinate.latitude;
            lon += coordinate.longitude;
        });
        if count == 0 {
            return None;
        }
        let count = count as f64;
        Some(Self {
            latitude: lat / count,
            longitude: lon / count,
        })
    }
}

#[test]
fn centroid_of_nothing() {
    assert_eq!(Coordinate::centroid(Vec::new()), None);
}

#[test]
fn centroid_test() {
    let centroid = Coordinate::centroid([
        Coordinate::from((25.0, 121.0)),
        Coordinate::from((25.5, 121.5)),
    ])
    .unwrap();
    assert!((centroid.latitude - 25.25).abs() < f64::EPSILON);
    assert!((centroid.longitude - 121.25).abs() < f64::EPSILON);
}

#[test]
fn display_test() {
    assert_eq!(TAIPEI.to_string(), "25.033, 121.5654");
}
