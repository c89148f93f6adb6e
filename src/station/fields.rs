//! Field names used by the YouBike 2.0 realtime feed.

pub const NAME: &str = "sna";
pub const DISTRICT: &str = "sarea";
pub const ADDRESS: &str = "ar";
pub const AVAILABLE_RENT_BIKES: &str = "available_rent_bikes";
pub const AVAILABLE_RETURN_BIKES: &str = "available_return_bikes";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const UPDATED_AT: &str = "mday";
