pub mod distance;
pub mod generation;
pub mod projection;

pub use distance::{distance_miles, format_distance, haversine, DistanceUnit};
pub use generation::{RequestGeneration, RequestTicket};
pub use projection::MapProjection;
