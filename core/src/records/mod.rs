pub mod parking;
pub mod traffic;

pub use parking::{FeedPoint, GeoLineString, LotRecord, ParkingFeed, ParkingLot, RoutePolyline};
pub use traffic::{DayAggregate, LocationRecord, RegressionSet, Sample};
