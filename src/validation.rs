//! Submission checks shared by the server handlers and the client forms.

use crate::models::user::LoginRequest;
use crate::models::{CafeDetails, Coordinate, NewReview};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const COMMENT_MAX_CHARS: usize = 500;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Every problem found in one submission.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(ValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message reported for `field`, for showing next to the input.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn require_text(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{label} is required"));
    }
}

fn check_stars(errors: &mut ValidationErrors, field: &str, value: Option<u8>) {
    if let Some(stars) = value {
        if !(1..=5).contains(&stars) {
            errors.push(field, "Rating must be between 1 and 5");
        }
    }
}

pub fn validate_cafe(cafe: &CafeDetails) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require_text(&mut errors, "name", &cafe.name, "Name");
    require_text(&mut errors, "address", &cafe.address, "Address");

    let point = Coordinate::new(cafe.latitude, cafe.longitude);
    if !point.latitude_in_range() {
        errors.push("latitude", "Latitude must be between -90 and 90");
    }
    if !point.longitude_in_range() {
        errors.push("longitude", "Longitude must be between -180 and 180");
    }

    if let Some(description) = &cafe.description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(
                "description",
                format!("Description must be at most {DESCRIPTION_MAX_CHARS} characters"),
            );
        }
    }
    if !(1..=3).contains(&cafe.price_level) {
        errors.push("priceLevel", "Price level must be 1, 2 or 3");
    }
    errors.into_result()
}

pub fn validate_review(review: &NewReview) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require_text(&mut errors, "cafeId", &review.cafe_id, "Café");
    require_text(&mut errors, "userName", &review.user_name, "Name");
    if !(1..=5).contains(&review.rating) {
        errors.push("rating", "Overall rating is required (1-5 stars)");
    }
    check_stars(&mut errors, "ratingCoffee", review.rating_coffee);
    check_stars(&mut errors, "ratingFood", review.rating_food);
    check_stars(&mut errors, "ratingValue", review.rating_value);
    check_stars(&mut errors, "ratingBikeFriendly", review.rating_bike_friendly);
    check_stars(&mut errors, "ratingGroupFriendly", review.rating_group_friendly);

    require_text(&mut errors, "comment", &review.comment, "Comment");
    if review.comment.chars().count() > COMMENT_MAX_CHARS {
        errors.push(
            "comment",
            format!("Comment must be at most {COMMENT_MAX_CHARS} characters"),
        );
    }
    errors.into_result()
}

pub fn validate_login(login: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    require_text(&mut errors, "firstName", &login.first_name, "First name");
    if let Some(email) = login.email.as_deref().filter(|e| !e.trim().is_empty()) {
        if !email.contains('@') {
            errors.push("email", "Email must contain @");
        }
    }
    errors.into_result()
}
