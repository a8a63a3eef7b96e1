pub mod amenity;
pub mod cafe;
pub mod coordinate;
pub mod review;
pub mod user;

pub use amenity::AmenityTag;
pub use cafe::{Cafe, CafeDetails, RatingAggregate};
pub use coordinate::Coordinate;
pub use review::{NewReview, Review};
pub use user::User;
