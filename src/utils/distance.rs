//! Great-circle distance between coordinates and its display form.

use crate::models::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Mean Earth radius in this unit.
    pub const fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => 3958.8,
            DistanceUnit::Kilometers => 6371.0,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

/// Haversine distance from `from` to `to`.
///
/// Non-finite input yields NaN; callers that rank or display distances
/// treat any non-finite result as "unknown".
pub fn haversine(from: Coordinate, to: Coordinate, unit: DistanceUnit) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let a = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon;
    // rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);

    2.0 * unit.earth_radius() * a.sqrt().atan2((1.0 - a).sqrt())
}

pub fn distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    haversine(from, to, DistanceUnit::Miles)
}

/// "<0.1 mi" below a tenth, one decimal otherwise, "— mi" when unknown.
pub fn format_distance(distance: f64, unit: DistanceUnit) -> String {
    let suffix = unit.suffix();
    if !distance.is_finite() {
        format!("— {suffix}")
    } else if distance < 0.1 {
        format!("<0.1 {suffix}")
    } else {
        format!("{distance:.1} {suffix}")
    }
}
