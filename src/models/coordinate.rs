use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Latitude is finite and inside [-90, 90].
    pub fn latitude_in_range(&self) -> bool {
        self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Longitude is finite and inside [-180, 180].
    pub fn longitude_in_range(&self) -> bool {
        self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn is_valid(&self) -> bool {
        self.latitude_in_range() && self.longitude_in_range()
    }
}
