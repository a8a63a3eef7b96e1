//! Averages over a café's reviews.

use crate::models::{RatingAggregate, Review};

/// Mean of each rating dimension. `None` means nobody rated it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSummary {
    pub overall: Option<f64>,
    pub coffee: Option<f64>,
    pub food: Option<f64>,
    pub value: Option<f64>,
    pub bike_friendly: Option<f64>,
    pub group_friendly: Option<f64>,
    pub count: usize,
}

fn mean<I: IntoIterator<Item = u8>>(values: I) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0u64, 0u32), |(sum, n), v| (sum + u64::from(v), n + 1));
    (n > 0).then(|| sum as f64 / f64::from(n))
}

/// Mean overall rating, or `None` for a café without reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    mean(reviews.iter().map(Review::rating))
}

pub fn summarize(reviews: &[Review]) -> RatingSummary {
    let dimension = |pick: fn(&Review) -> Option<u8>| mean(reviews.iter().filter_map(pick));
    RatingSummary {
        overall: average_rating(reviews),
        coffee: dimension(|r| r.body.rating_coffee),
        food: dimension(|r| r.body.rating_food),
        value: dimension(|r| r.body.rating_value),
        bike_friendly: dimension(|r| r.body.rating_bike_friendly),
        group_friendly: dimension(|r| r.body.rating_group_friendly),
        count: reviews.len(),
    }
}

impl RatingSummary {
    /// Stored form; unrated dimensions become 0.
    pub fn to_aggregate(&self) -> RatingAggregate {
        RatingAggregate {
            rating_coffee: self.coffee.unwrap_or(0.0),
            rating_food: self.food.unwrap_or(0.0),
            rating_value: self.value.unwrap_or(0.0),
            rating_bike_friendly: self.bike_friendly.unwrap_or(0.0),
            rating_group_friendly: self.group_friendly.unwrap_or(0.0),
            rating_overall: self.overall.unwrap_or(0.0),
            rating_count: u32::try_from(self.count).unwrap_or(u32::MAX),
        }
    }

    /// "4.5" style label, or "No ratings yet".
    pub fn overall_label(&self) -> String {
        match self.overall {
            Some(avg) => format!("{avg:.1}"),
            None => "No ratings yet".to_string(),
        }
    }
}
