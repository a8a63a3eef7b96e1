// src/models/cafe.rs
use crate::models::coordinate::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BikeParkingType {
    Covered,
    Open,
    Inside,
    #[serde(rename = "none")]
    NoParking,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    QuickCounter,
    TableService,
    PreorderFriendly,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MenuFocus {
    BigBreakfasts,
    CakesBakes,
    LightBites,
    ProperMeals,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeQuality {
    Specialty,
    Good,
    Basic,
}

/// Opening times for one weekday, "HH:MM" strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DayHours {
    pub open: Option<String>,
    pub close: Option<String>,
    pub closed: bool,
}

/// Everything a rider can submit about a café. This is the body of
/// `POST /api/cafes`; the server adds the id, ratings and moderation fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CafeDetails {
    // Basic info
    pub name: String,
    pub description: Option<String>, // short, ≤160 chars
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,

    // Location
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub town: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub plus_code: Option<String>,

    // Opening hours, keyed by lowercase weekday
    pub hours: Option<BTreeMap<String, DayHours>>,
    pub holiday_notes: Option<String>,
    pub opens_early: bool, // before 07:30
    pub opens_late: bool,  // after 18:00

    // Group capacity
    pub max_indoor_seats: Option<u32>,
    pub max_outdoor_seats: Option<u32>,
    pub max_rider_group: Option<u32>,
    pub can_book_groups: bool,
    pub booking_link: Option<String>,
    pub queue_tolerant: bool,

    // Bike parking
    pub bike_parking_type: Option<BikeParkingType>,
    pub bike_parking_count: Option<u32>,
    pub bike_parking_visible: bool,
    pub bike_parking_secure: bool,
    #[serde(rename = "bikeParkingCCTV")]
    pub bike_parking_cctv: bool,
    pub bike_parking_lockable: bool,

    // Amenities
    pub has_toilets: bool,
    pub has_baby_change: bool,
    pub has_repair_stand: bool,
    pub has_track_pump: bool,
    pub has_basic_tools: bool,
    pub has_power_sockets: bool,
    pub has_wifi: bool,
    pub has_water_refill: bool,
    pub water_refill_free: bool,

    // Outdoor seating
    pub has_outdoor_seating: bool,
    pub outdoor_seating_heated: bool,
    pub outdoor_seating_sheltered: bool,

    // Service
    pub service_type: Option<ServiceType>,
    pub average_serve_time: Option<u32>, // minutes
    pub can_pre_order_groups: bool,

    // Payment
    pub accepts_card: bool,
    pub accepts_cash: bool,
    pub splits_bill: bool,
    pub has_tap_to_pay: bool,

    // Dietary
    pub gluten_free_friendly: bool,
    pub vegan_options: bool,
    pub vegetarian_options: bool,
    pub dairy_free_options: bool,
    pub nut_aware: bool,
    pub dietary_notes: Option<String>,

    // Menu
    pub menu_focus: Option<MenuFocus>,
    pub menu_highlights: Vec<String>,
    pub coffee_quality: Option<CoffeeQuality>,
    pub price_level: u8, // 1=£, 2=££, 3=£££

    // Accessibility & friendliness
    pub step_free: bool,
    pub accessible_toilet: bool,
    pub dog_friendly: bool,
    pub kids_friendly: bool,
    pub rain_plan: bool, // group can sit inside if it rains

    // Photos
    pub hero_image: Option<String>,
    pub gallery_images: Vec<String>,

    // Legacy fields still read by the list and detail views
    pub image_url: Option<String>,
    pub has_bike_racks: bool,
    pub seating_capacity: Option<u32>,
    pub is_open: bool,
    pub menu_items: Vec<String>,
}

impl Default for CafeDetails {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            phone: None,
            website: None,
            email: None,
            latitude: 0.0,
            longitude: 0.0,
            address: String::new(),
            town: None,
            postcode: None,
            country: Some("UK".to_string()),
            plus_code: None,
            hours: None,
            holiday_notes: None,
            opens_early: false,
            opens_late: false,
            max_indoor_seats: None,
            max_outdoor_seats: None,
            max_rider_group: None,
            can_book_groups: false,
            booking_link: None,
            queue_tolerant: false,
            bike_parking_type: None,
            bike_parking_count: None,
            bike_parking_visible: false,
            bike_parking_secure: false,
            bike_parking_cctv: false,
            bike_parking_lockable: false,
            has_toilets: false,
            has_baby_change: false,
            has_repair_stand: false,
            has_track_pump: false,
            has_basic_tools: false,
            has_power_sockets: false,
            has_wifi: false,
            has_water_refill: false,
            water_refill_free: true,
            has_outdoor_seating: false,
            outdoor_seating_heated: false,
            outdoor_seating_sheltered: false,
            service_type: None,
            average_serve_time: None,
            can_pre_order_groups: false,
            accepts_card: true,
            accepts_cash: true,
            splits_bill: false,
            has_tap_to_pay: true,
            gluten_free_friendly: false,
            vegan_options: false,
            vegetarian_options: false,
            dairy_free_options: false,
            nut_aware: false,
            dietary_notes: None,
            menu_focus: None,
            menu_highlights: Vec::new(),
            coffee_quality: None,
            price_level: 2,
            step_free: false,
            accessible_toilet: false,
            dog_friendly: false,
            kids_friendly: false,
            rain_plan: false,
            hero_image: None,
            gallery_images: Vec::new(),
            image_url: None,
            has_bike_racks: false,
            seating_capacity: None,
            is_open: true,
            menu_items: Vec::new(),
        }
    }
}

impl CafeDetails {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Hero image, falling back to the legacy image field.
    pub fn display_image(&self) -> Option<&str> {
        self.hero_image
            .as_deref()
            .or(self.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Per-dimension review averages stored on the café row. Zero means unrated.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingAggregate {
    pub rating_coffee: f64,
    pub rating_food: f64,
    pub rating_value: f64,
    pub rating_bike_friendly: f64,
    pub rating_group_friendly: f64,
    pub rating_overall: f64,
    pub rating_count: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    pub id: String,
    #[serde(flatten)]
    pub details: CafeDetails,
    #[serde(flatten)]
    pub ratings: RatingAggregate,
    #[serde(default)]
    pub verified: bool,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Cafe {
    pub fn coordinate(&self) -> Coordinate {
        self.details.coordinate()
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn address(&self) -> &str {
        &self.details.address
    }
}
