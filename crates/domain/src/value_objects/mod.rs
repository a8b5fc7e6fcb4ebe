//! Value objects for the Raincheck domain

mod geo_location;

pub use geo_location::{GeoLocation, InvalidCoordinates};
