//! The directory query pipeline: text search, amenity filter, nearest first.
//!
//! Runs synchronously over an already-fetched café list every time the
//! search text, the selected amenities or the reference point changes.

use crate::models::{AmenityTag, Cafe, Coordinate};
use crate::utils::distance::{distance_miles, format_distance, DistanceUnit};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// What the rider typed and which amenity chips are selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeQuery {
    pub text: String,
    pub tags: BTreeSet<AmenityTag>,
}

impl CafeQuery {
    pub fn new(text: impl Into<String>, tags: impl IntoIterator<Item = AmenityTag>) -> Self {
        Self {
            text: text.into(),
            tags: tags.into_iter().collect(),
        }
    }

    /// Case-insensitive substring match on name or address.
    /// Blank text matches everything.
    pub fn matches_text(&self, cafe: &Cafe) -> bool {
        let needle = self.text.trim().to_lowercase();
        needle.is_empty()
            || cafe.name().to_lowercase().contains(&needle)
            || cafe.address().to_lowercase().contains(&needle)
    }

    /// Every selected tag must be offered. No tags matches everything.
    pub fn matches_tags(&self, cafe: &Cafe) -> bool {
        self.tags.iter().all(|tag| tag.is_offered_by(cafe))
    }

    pub fn matches(&self, cafe: &Cafe) -> bool {
        self.matches_text(cafe) && self.matches_tags(cafe)
    }

    /// Selects `tag` if it was not selected, deselects it otherwise.
    pub fn toggle_tag(&mut self, tag: AmenityTag) {
        if !self.tags.remove(&tag) {
            self.tags.insert(tag);
        }
    }
}

/// A café that survived filtering, with its distance from the reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCafe {
    pub cafe: Cafe,
    /// Miles; `None` when the café's coordinate is not a real number.
    pub distance: Option<f64>,
}

impl RankedCafe {
    pub fn distance_label(&self) -> String {
        format_distance(self.distance.unwrap_or(f64::NAN), DistanceUnit::Miles)
    }
}

/// Filters `cafes` with `query` and orders the survivors nearest first.
pub fn rank(cafes: &[Cafe], query: &CafeQuery, reference: Coordinate) -> Vec<RankedCafe> {
    rank_matching(cafes, reference, |cafe| query.matches(cafe))
}

/// Keeps cafés accepted by `keep` and orders them nearest first.
///
/// The sort is stable: equal distances keep collection order. Cafés with an
/// unknown distance go last.
pub fn rank_matching<F>(cafes: &[Cafe], reference: Coordinate, keep: F) -> Vec<RankedCafe>
where
    F: Fn(&Cafe) -> bool,
{
    let mut ranked: Vec<RankedCafe> = cafes
        .iter()
        .filter(|cafe| keep(cafe))
        .map(|cafe| {
            let distance = distance_miles(reference, cafe.coordinate());
            RankedCafe {
                cafe: cafe.clone(),
                distance: distance.is_finite().then_some(distance),
            }
        })
        .collect();

    ranked.sort_by(|a, b| compare_distance(a.distance, b.distance));
    ranked
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::DEFAULT_REFERENCE;
    use crate::models::{CafeDetails, RatingAggregate};
    use chrono::Utc;

    fn cafe(id: &str, name: &str, address: &str, lat: f64, lon: f64) -> Cafe {
        Cafe {
            id: id.into(),
            details: CafeDetails {
                name: name.into(),
                address: address.into(),
                latitude: lat,
                longitude: lon,
                ..CafeDetails::default()
            },
            ratings: RatingAggregate::default(),
            verified: false,
            last_updated: Utc::now(),
            user_id: None,
        }
    }

    fn with_flags(mut cafe: Cafe, bike_racks: bool, water: bool, outdoor: bool) -> Cafe {
        cafe.details.has_bike_racks = bike_racks;
        cafe.details.has_water_refill = water;
        cafe.details.has_outdoor_seating = outdoor;
        cafe
    }

    fn ids(ranked: &[RankedCafe]) -> Vec<&str> {
        ranked.iter().map(|r| r.cafe.id.as_str()).collect()
    }

    fn seeded() -> Vec<Cafe> {
        vec![
            with_flags(cafe("latte", "Café Latte", "123 Main St", 40.7128, -74.0060), true, false, true),
            with_flags(cafe("oak", "Oakwood Café", "456 Park Ave", 40.7580, -73.9855), true, true, true),
            with_flags(cafe("river", "Riverbank Coffee", "789 River Rd", 40.7489, -73.9680), true, false, true),
            with_flags(cafe("green", "Green Bean Café", "321 Elm Street", 40.7350, -73.9950), true, true, false),
            with_flags(cafe("stop", "The Cycling Stop", "555 Bike Lane", 40.7200, -74.0100), true, true, true),
        ]
    }

    #[test]
    fn water_refill_cafes_matching_text() {
        let collection = vec![
            with_flags(cafe("1", "Oakwood Café", "456 Park Ave", 40.758, -73.9855), true, true, false),
            with_flags(cafe("2", "Café Latte", "123 Main St", 40.7128, -74.0060), true, false, false),
        ];
        let query = CafeQuery::new("café", [AmenityTag::WaterRefill]);

        let ranked = rank(&collection, &query, Coordinate::new(40.7128, -74.0060));

        assert_eq!(ids(&ranked), vec!["1"]);
        let miles = ranked[0].distance.unwrap();
        assert!((miles - 3.3).abs() < 0.05, "got {miles}");
        assert_eq!(ranked[0].distance_label(), "3.3 mi");
    }

    #[test]
    fn text_matches_name_or_address_ignoring_case() {
        let cafes = seeded();
        let by_name = rank(&cafes, &CafeQuery::new("RIVERBANK", []), DEFAULT_REFERENCE);
        assert_eq!(ids(&by_name), vec!["river"]);

        let by_address = rank(&cafes, &CafeQuery::new("bike lane", []), DEFAULT_REFERENCE);
        assert_eq!(ids(&by_address), vec!["stop"]);

        let nothing = rank(&cafes, &CafeQuery::new("tea room", []), DEFAULT_REFERENCE);
        assert!(nothing.is_empty());
    }

    #[test]
    fn empty_query_keeps_everything_sorted_by_distance() {
        let cafes = seeded();
        let ranked = rank(&cafes, &CafeQuery::default(), DEFAULT_REFERENCE);
        assert_eq!(ids(&ranked), vec!["latte", "stop", "green", "river", "oak"]);
        assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn empty_tag_set_does_not_narrow_text_results() {
        let cafes = seeded();
        let text_only = CafeQuery::new("café", []);
        let filtered: Vec<&Cafe> = cafes.iter().filter(|c| text_only.matches_text(c)).collect();
        let ranked = rank(&cafes, &text_only, DEFAULT_REFERENCE);
        assert_eq!(ranked.len(), filtered.len());
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn tags_combine_with_and() {
        let cafes = seeded();
        let query = CafeQuery::new("", [AmenityTag::WaterRefill, AmenityTag::OutdoorSeating]);
        let ranked = rank(&cafes, &query, DEFAULT_REFERENCE);
        assert_eq!(ids(&ranked), vec!["stop", "oak"]);
    }

    #[test]
    fn output_is_a_subset_of_input() {
        let cafes = seeded();
        let query = CafeQuery::new("e", [AmenityTag::BikeRacks]);
        for ranked in rank(&cafes, &query, DEFAULT_REFERENCE) {
            assert!(cafes.contains(&ranked.cafe));
        }
    }

    #[test]
    fn ties_keep_collection_order() {
        let here = Coordinate::new(10.0, 10.0);
        let cafes = vec![
            cafe("far", "Far", "x", 11.0, 10.0),
            cafe("a", "A", "x", 10.5, 10.0),
            cafe("b", "B", "x", 10.5, 10.0),
            cafe("c", "C", "x", 10.5, 10.0),
        ];
        let ranked = rank(&cafes, &CafeQuery::default(), here);
        assert_eq!(ids(&ranked), vec!["a", "b", "c", "far"]);
    }

    #[test]
    fn unknown_distances_sort_last() {
        let cafes = vec![
            cafe("broken", "Broken", "x", f64::NAN, 0.0),
            cafe("near", "Near", "x", 40.72, -74.0),
        ];
        let ranked = rank(&cafes, &CafeQuery::default(), DEFAULT_REFERENCE);
        assert_eq!(ids(&ranked), vec!["near", "broken"]);
        assert_eq!(ranked[1].distance, None);
        assert_eq!(ranked[1].distance_label(), "— mi");
    }

    #[test]
    fn toggling_a_tag_twice_restores_the_query() {
        let mut query = CafeQuery::default();
        query.toggle_tag(AmenityTag::BikeRacks);
        assert!(query.tags.contains(&AmenityTag::BikeRacks));
        query.toggle_tag(AmenityTag::BikeRacks);
        assert_eq!(query, CafeQuery::default());
    }

    #[test]
    fn rank_matching_supports_favorites_view() {
        let cafes = seeded();
        let favorites = ["oak", "latte"];
        let ranked = rank_matching(&cafes, DEFAULT_REFERENCE, |c| favorites.contains(&c.id.as_str()));
        assert_eq!(ids(&ranked), vec!["latte", "oak"]);
    }
}
