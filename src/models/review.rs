// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted review, as accepted by `POST /api/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub cafe_id: String,              // café the review belongs to
    #[serde(default)]
    pub user_id: Option<String>,      // set when the reviewer is logged in
    pub user_name: String,            // display name shown next to the review
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub rating: u8,                   // overall rating, 1-5
    #[serde(default)]
    pub rating_coffee: Option<u8>,
    #[serde(default)]
    pub rating_food: Option<u8>,
    #[serde(default)]
    pub rating_value: Option<u8>,
    #[serde(default)]
    pub rating_bike_friendly: Option<u8>,
    #[serde(default)]
    pub rating_group_friendly: Option<u8>,
    pub comment: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(flatten)]
    pub body: NewReview,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn rating(&self) -> u8 {
        self.body.rating
    }
}

/// Human label for a star value, as shown under the star picker.
pub fn rating_label(stars: u8) -> Option<&'static str> {
    match stars {
        1 => Some("Poor"),
        2 => Some("Fair"),
        3 => Some("Good"),
        4 => Some("Very Good"),
        5 => Some("Excellent"),
        _ => None,
    }
}
