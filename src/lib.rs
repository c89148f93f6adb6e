pub mod board;
pub mod feed;
pub mod group;
pub mod query;
pub mod shared;
pub mod sort;
pub mod station;

pub mod prelude {
    pub use crate::board::{Board, BoardQuery};
    pub use crate::feed;
    pub use crate::group::{DistrictGroups, UNKNOWN_DISTRICT, districts};
    pub use crate::query::StationQuery;
    pub use crate::shared::geo::Coordinate;
    pub use crate::sort::{SortKey, SortOrder, sort_stations};
    pub use crate::station::{Station, fields};
}
