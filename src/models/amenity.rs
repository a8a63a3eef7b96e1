use crate::models::cafe::Cafe;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The filterable amenity categories shown as chips above the café list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AmenityTag {
    BikeRacks,
    WaterRefill,
    OutdoorSeating,
}

impl AmenityTag {
    pub const ALL: [AmenityTag; 3] = [
        AmenityTag::BikeRacks,
        AmenityTag::WaterRefill,
        AmenityTag::OutdoorSeating,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AmenityTag::BikeRacks => "bikeRacks",
            AmenityTag::WaterRefill => "waterRefill",
            AmenityTag::OutdoorSeating => "outdoorSeating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AmenityTag::BikeRacks => "Bike Racks",
            AmenityTag::WaterRefill => "Water Refill",
            AmenityTag::OutdoorSeating => "Outdoor Seating",
        }
    }

    /// Whether the café's flag for this tag is set.
    pub fn is_offered_by(self, cafe: &Cafe) -> bool {
        let details = &cafe.details;
        match self {
            AmenityTag::BikeRacks => details.has_bike_racks,
            AmenityTag::WaterRefill => details.has_water_refill,
            AmenityTag::OutdoorSeating => details.has_outdoor_seating,
        }
    }
}

impl fmt::Display for AmenityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown amenity tag: {0}")]
pub struct UnknownAmenity(pub String);

impl FromStr for AmenityTag {
    type Err = UnknownAmenity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AmenityTag::ALL
            .into_iter()
            .find(|tag| tag.id() == s)
            .ok_or_else(|| UnknownAmenity(s.to_string()))
    }
}
