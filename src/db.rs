#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::{Cafe, CafeDetails, NewReview, RatingAggregate, Review, User};
    use crate::ratings;
    use chrono::Utc;
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::types::Type;
    use rusqlite::{Connection, Error, OptionalExtension, Row};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::models::AmenityTag;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            log!("[TEST] Database schema created");
            db
        }

        async fn seeded_db() -> Database {
            let db = create_test_db().await;
            assert!(db.seed_if_empty().await.unwrap());
            db
        }

        fn details(name: &str, address: &str) -> CafeDetails {
            CafeDetails {
                name: name.into(),
                address: address.into(),
                latitude: 51.5,
                longitude: -0.12,
                ..CafeDetails::default()
            }
        }

        fn review_for(cafe_id: &str, rating: u8, coffee: Option<u8>) -> NewReview {
            NewReview {
                cafe_id: cafe_id.into(),
                user_name: "Tester".into(),
                rating,
                rating_coffee: coffee,
                comment: "Solid stop.".into(),
                ..NewReview::default()
            }
        }

        #[tokio::test]
        async fn test_schema_creation() {
            let db = create_test_db().await;

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"users".to_string()));
            assert!(tables.contains(&"cafes".to_string()));
            assert!(tables.contains(&"reviews".to_string()));
        }

        #[tokio::test]
        async fn test_seed_runs_once() {
            let db = seeded_db().await;
            assert!(!db.seed_if_empty().await.unwrap());

            let cafes = db.get_all_cafes().await.unwrap();
            assert_eq!(cafes.len(), 5);
            assert_eq!(cafes[0].name(), "Café Latte");

            let mut total_reviews = 0;
            for cafe in &cafes {
                let reviews = db.get_reviews_by_cafe_id(&cafe.id).await.unwrap();
                assert_eq!(cafe.ratings.rating_count as usize, reviews.len());
                total_reviews += reviews.len();
            }
            assert_eq!(total_reviews, 7);

            // Café Latte has a 5 and a 4
            assert_eq!(cafes[0].ratings.rating_overall, 4.5);
        }

        #[tokio::test]
        async fn test_search_matches_name_address_and_description() {
            let db = seeded_db().await;

            let by_name = db.search_cafes("CAFÉ").await.unwrap();
            let names: Vec<&str> = by_name.iter().map(|c| c.name()).collect();
            assert_eq!(names, vec!["Café Latte", "Oakwood Café", "Green Bean Café"]);

            let by_address = db.search_cafes("river rd").await.unwrap();
            assert_eq!(by_address.len(), 1);
            assert_eq!(by_address[0].name(), "Riverbank Coffee");

            let by_description = db.search_cafes("repair station").await.unwrap();
            assert_eq!(by_description.len(), 1);
            assert_eq!(by_description[0].name(), "The Cycling Stop");

            assert!(db.search_cafes("tea room").await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_filter_only_constrains_supplied_flags() {
            let db = seeded_db().await;

            let all = db.filter_cafes(&AmenityFlags::default()).await.unwrap();
            assert_eq!(all.len(), 5);

            let water = db
                .filter_cafes(&AmenityFlags {
                    water_refill: Some(true),
                    ..AmenityFlags::default()
                })
                .await
                .unwrap();
            assert_eq!(water.len(), 3);
            assert!(water.iter().all(|c| AmenityTag::WaterRefill.is_offered_by(c)));

            let water_no_seating = db
                .filter_cafes(&AmenityFlags {
                    water_refill: Some(true),
                    outdoor_seating: Some(false),
                    ..AmenityFlags::default()
                })
                .await
                .unwrap();
            assert_eq!(water_no_seating.len(), 1);
            assert_eq!(water_no_seating[0].name(), "Green Bean Café");
        }

        #[tokio::test]
        async fn test_cafe_lifecycle() {
            let db = create_test_db().await;
            db.upsert_user(&User {
                id: "u1".into(),
                email: None,
                first_name: Some("Ada".into()),
                last_name: None,
                profile_image_url: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();

            let mut submitted = details("Hill Top Café", "1 Summit Rd");
            submitted.has_repair_stand = true;
            submitted.menu_items = vec!["Flapjack".into()];

            let created = db.create_cafe(&submitted, Some("u1")).await.unwrap();
            assert_eq!(created.user_id.as_deref(), Some("u1"));
            assert_eq!(created.ratings, RatingAggregate::default());
            assert!(!created.verified);

            let stored = db.get_cafe(&created.id).await.unwrap().unwrap();
            assert_eq!(stored.details, submitted);
            assert_eq!(stored.user_id.as_deref(), Some("u1"));

            assert!(db.get_cafe("missing").await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_review_updates_cafe_aggregates() {
            let db = create_test_db().await;
            let cafe = db.create_cafe(&details("A", "B"), None).await.unwrap();

            db.create_review(&review_for(&cafe.id, 5, Some(4))).await.unwrap();
            let latest = db.create_review(&review_for(&cafe.id, 2, None)).await.unwrap();

            let stored = db.get_cafe(&cafe.id).await.unwrap().unwrap();
            assert_eq!(stored.ratings.rating_count, 2);
            assert_eq!(stored.ratings.rating_overall, 3.5);
            assert_eq!(stored.ratings.rating_coffee, 4.0);
            assert_eq!(stored.ratings.rating_food, 0.0);

            let reviews = db.get_reviews_by_cafe_id(&cafe.id).await.unwrap();
            assert_eq!(reviews.len(), 2);
            assert_eq!(reviews[0].id, latest.id, "newest review first");
            assert!(db.get_reviews_by_cafe_id("missing").await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_user_upsert_and_lookup() {
            let db = create_test_db().await;
            let now = Utc::now();
            let mut user = User {
                id: "u1".into(),
                email: Some("rider@example.com".into()),
                first_name: Some("Sam".into()),
                last_name: None,
                profile_image_url: None,
                created_at: now,
                updated_at: now,
            };
            db.upsert_user(&user).await.unwrap();

            user.last_name = Some("K.".into());
            let updated = db.upsert_user(&user).await.unwrap();
            assert_eq!(updated.last_name.as_deref(), Some("K."));

            let by_email = db.find_user_by_email("rider@example.com").await.unwrap();
            assert_eq!(by_email.map(|u| u.id), Some("u1".to_string()));
            assert!(db.get_user("nobody").await.unwrap().is_none());
        }
    }

    const CAFE_COLUMNS: &str = "id, details, rating_coffee, rating_food, rating_value, \
        rating_bike_friendly, rating_group_friendly, rating_overall, rating_count, \
        verified, last_updated, user_id";

    const REVIEW_COLUMNS: &str = "id, cafe_id, user_id, user_name, user_avatar, rating, \
        rating_coffee, rating_food, rating_value, rating_bike_friendly, rating_group_friendly, \
        comment, photos, created_at";

    const USER_COLUMNS: &str =
        "id, email, first_name, last_name, profile_image_url, created_at, updated_at";

    /// Server-side amenity filter. Only flags that are `Some` constrain the result.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct AmenityFlags {
        pub bike_racks: Option<bool>,
        pub water_refill: Option<bool>,
        pub outdoor_seating: Option<bool>,
    }

    impl AmenityFlags {
        pub fn is_empty(&self) -> bool {
            self.bike_racks.is_none() && self.water_refill.is_none() && self.outdoor_seating.is_none()
        }
    }

    fn json_column<T: serde::de::DeserializeOwned>(row: &Row<'_>, idx: usize) -> Result<T, Error> {
        let raw: String = row.get(idx)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }

    fn to_json<T: serde::Serialize>(value: &T) -> Result<String, Error> {
        serde_json::to_string(value).map_err(|e| Error::ToSqlConversionFailure(Box::new(e)))
    }

    fn cafe_from_row(row: &Row<'_>) -> Result<Cafe, Error> {
        Ok(Cafe {
            id: row.get(0)?,
            details: json_column(row, 1)?,
            ratings: RatingAggregate {
                rating_coffee: row.get(2)?,
                rating_food: row.get(3)?,
                rating_value: row.get(4)?,
                rating_bike_friendly: row.get(5)?,
                rating_group_friendly: row.get(6)?,
                rating_overall: row.get(7)?,
                rating_count: row.get(8)?,
            },
            verified: row.get(9)?,
            last_updated: row.get(10)?,
            user_id: row.get(11)?,
        })
    }

    fn review_from_row(row: &Row<'_>) -> Result<Review, Error> {
        Ok(Review {
            id: row.get(0)?,
            body: NewReview {
                cafe_id: row.get(1)?,
                user_id: row.get(2)?,
                user_name: row.get(3)?,
                user_avatar: row.get(4)?,
                rating: row.get(5)?,
                rating_coffee: row.get(6)?,
                rating_food: row.get(7)?,
                rating_value: row.get(8)?,
                rating_bike_friendly: row.get(9)?,
                rating_group_friendly: row.get(10)?,
                comment: row.get(11)?,
                photos: json_column(row, 12)?,
            },
            created_at: row.get(13)?,
        })
    }

    fn user_from_row(row: &Row<'_>) -> Result<User, Error> {
        Ok(User {
            id: row.get(0)?,
            email: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            profile_image_url: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    fn load_reviews(conn: &Connection, cafe_id: &str) -> Result<Vec<Review>, Error> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE cafe_id = ?
             ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([cafe_id], review_from_row)?;
        rows.collect()
    }

    fn matches_search(cafe: &Cafe, needle: &str) -> bool {
        let details = &cafe.details;
        details.name.to_lowercase().contains(needle)
            || details.address.to_lowercase().contains(needle)
            || details
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    // Define a struct to represent a database connection
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            // 1. Users table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS users (
                    id TEXT PRIMARY KEY,
                    email TEXT UNIQUE,
                    first_name TEXT,
                    last_name TEXT,
                    profile_image_url TEXT,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );",
            )
            .map_err(|e| {
                logging::error!("Failed creating users table: {}", e);
                e
            })?;

            // 2. Cafes table; searchable and filterable fields are columns,
            //    the full submission lives in `details` as JSON
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS cafes (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    address TEXT NOT NULL,
                    description TEXT,
                    latitude REAL NOT NULL,
                    longitude REAL NOT NULL,
                    has_bike_racks INTEGER NOT NULL DEFAULT 0,
                    has_water_refill INTEGER NOT NULL DEFAULT 0,
                    has_outdoor_seating INTEGER NOT NULL DEFAULT 0,
                    details TEXT NOT NULL,
                    rating_coffee REAL NOT NULL DEFAULT 0,
                    rating_food REAL NOT NULL DEFAULT 0,
                    rating_value REAL NOT NULL DEFAULT 0,
                    rating_bike_friendly REAL NOT NULL DEFAULT 0,
                    rating_group_friendly REAL NOT NULL DEFAULT 0,
                    rating_overall REAL NOT NULL DEFAULT 0,
                    rating_count INTEGER NOT NULL DEFAULT 0,
                    verified INTEGER NOT NULL DEFAULT 0,
                    last_updated TEXT NOT NULL,
                    user_id TEXT
                );",
            )
            .map_err(|e| {
                logging::error!("Failed creating cafes table: {}", e);
                e
            })?;

            // 3. Reviews table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    cafe_id TEXT NOT NULL,
                    user_id TEXT,
                    user_name TEXT NOT NULL,
                    user_avatar TEXT,
                    rating INTEGER NOT NULL,
                    rating_coffee INTEGER,
                    rating_food INTEGER,
                    rating_value INTEGER,
                    rating_bike_friendly INTEGER,
                    rating_group_friendly INTEGER,
                    comment TEXT NOT NULL,
                    photos TEXT NOT NULL DEFAULT '[]',
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (cafe_id) REFERENCES cafes(id) ON DELETE CASCADE
                );
                CREATE INDEX IF NOT EXISTS idx_reviews_cafe_id ON reviews(cafe_id);",
            )
            .map_err(|e| {
                logging::error!("Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        /// Loads the demo cafés and reviews into an empty database.
        /// Returns whether anything was inserted.
        pub async fn seed_if_empty(&self) -> Result<bool, Error> {
            {
                let conn = self.conn.lock().await;
                let existing: i64 =
                    conn.query_row("SELECT COUNT(*) FROM cafes", [], |row| row.get(0))?;
                if existing > 0 {
                    return Ok(false);
                }
            }

            let mut ids = Vec::new();
            for details in seed::cafes() {
                ids.push(self.create_cafe(&details, None).await?.id);
            }
            for (index, user_name, rating, comment) in seed::REVIEWS {
                let Some(cafe_id) = ids.get(index) else {
                    continue;
                };
                let review = NewReview {
                    cafe_id: cafe_id.clone(),
                    user_name: user_name.to_string(),
                    rating,
                    comment: comment.to_string(),
                    ..NewReview::default()
                };
                self.create_review(&review).await?;
            }
            log!("[DB] Seeded {} cafes and {} reviews", ids.len(), seed::REVIEWS.len());
            Ok(true)
        }

        pub async fn get_cafe(&self, id: &str) -> Result<Option<Cafe>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {CAFE_COLUMNS} FROM cafes WHERE id = ?"),
                [id],
                cafe_from_row,
            )
            .optional()
        }

        // Retrieve all cafes in submission order
        pub async fn get_all_cafes(&self) -> Result<Vec<Cafe>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!("SELECT {CAFE_COLUMNS} FROM cafes ORDER BY rowid"))?;
            let cafes = stmt
                .query_map([], cafe_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            logging::log!("Fetched {} cafes from the database", cafes.len());
            Ok(cafes)
        }

        /// Case-insensitive substring search over name, address and description.
        ///
        /// Matching happens in Rust rather than SQL because SQLite's `LIKE`
        /// only folds ASCII case, and café names are full of accents.
        pub async fn search_cafes(&self, query: &str) -> Result<Vec<Cafe>, Error> {
            let needle = query.to_lowercase();
            let cafes = self.get_all_cafes().await?;
            Ok(cafes
                .into_iter()
                .filter(|cafe| matches_search(cafe, &needle))
                .collect())
        }

        pub async fn filter_cafes(&self, flags: &AmenityFlags) -> Result<Vec<Cafe>, Error> {
            if flags.is_empty() {
                return self.get_all_cafes().await;
            }

            let mut conditions = Vec::new();
            let mut values = Vec::new();
            for (column, wanted) in [
                ("has_bike_racks", flags.bike_racks),
                ("has_water_refill", flags.water_refill),
                ("has_outdoor_seating", flags.outdoor_seating),
            ] {
                if let Some(wanted) = wanted {
                    conditions.push(format!("{column} = ?"));
                    values.push(wanted);
                }
            }

            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT {CAFE_COLUMNS} FROM cafes WHERE {} ORDER BY rowid",
                conditions.join(" AND ")
            ))?;
            let cafes = stmt
                .query_map(rusqlite::params_from_iter(values), cafe_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            log!("[DB] Filter {:?} matched {} cafes", flags, cafes.len());
            Ok(cafes)
        }

        pub async fn create_cafe(
            &self,
            details: &CafeDetails,
            user_id: Option<&str>,
        ) -> Result<Cafe, Error> {
            let cafe = Cafe {
                id: Uuid::new_v4().to_string(),
                details: details.clone(),
                ratings: RatingAggregate::default(),
                verified: false,
                last_updated: Utc::now(),
                user_id: user_id.map(str::to_string),
            };
            let details_json = to_json(&cafe.details)?;

            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO cafes (
                    id, name, address, description, latitude, longitude,
                    has_bike_racks, has_water_refill, has_outdoor_seating,
                    details, verified, last_updated, user_id
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    &cafe.id,
                    &details.name,
                    &details.address,
                    &details.description,
                    details.latitude,
                    details.longitude,
                    details.has_bike_racks,
                    details.has_water_refill,
                    details.has_outdoor_seating,
                    details_json,
                    cafe.verified,
                    cafe.last_updated,
                    &cafe.user_id,
                ],
            )?;
            log!("[DB] Cafe created: {} ({})", cafe.details.name, cafe.id);
            Ok(cafe)
        }

        // Retrieve the reviews of one cafe, newest first
        pub async fn get_reviews_by_cafe_id(&self, cafe_id: &str) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            load_reviews(&conn, cafe_id)
        }

        /// Stores a review and refreshes the café's aggregate ratings in the
        /// same transaction.
        pub async fn create_review(&self, new_review: &NewReview) -> Result<Review, Error> {
            let review = Review {
                id: Uuid::new_v4().to_string(),
                body: new_review.clone(),
                created_at: Utc::now(),
            };
            let body = &review.body;

            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;
            tx.execute(
                &format!(
                    "INSERT INTO reviews ({REVIEW_COLUMNS})
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
                ),
                rusqlite::params![
                    &review.id,
                    &body.cafe_id,
                    &body.user_id,
                    &body.user_name,
                    &body.user_avatar,
                    body.rating,
                    body.rating_coffee,
                    body.rating_food,
                    body.rating_value,
                    body.rating_bike_friendly,
                    body.rating_group_friendly,
                    &body.comment,
                    to_json(&body.photos)?,
                    review.created_at,
                ],
            )?;

            let aggregate = ratings::summarize(&load_reviews(&tx, &body.cafe_id)?).to_aggregate();
            tx.execute(
                "UPDATE cafes SET
                    rating_coffee = ?, rating_food = ?, rating_value = ?,
                    rating_bike_friendly = ?, rating_group_friendly = ?,
                    rating_overall = ?, rating_count = ?, last_updated = ?
                 WHERE id = ?",
                rusqlite::params![
                    aggregate.rating_coffee,
                    aggregate.rating_food,
                    aggregate.rating_value,
                    aggregate.rating_bike_friendly,
                    aggregate.rating_group_friendly,
                    aggregate.rating_overall,
                    aggregate.rating_count,
                    Utc::now(),
                    &body.cafe_id,
                ],
            )?;
            tx.commit()?;
            log!(
                "[DB] Review {} stored for cafe {} ({} reviews, avg {:.2})",
                review.id,
                body.cafe_id,
                aggregate.rating_count,
                aggregate.rating_overall
            );
            Ok(review)
        }

        pub async fn get_user(&self, id: &str) -> Result<Option<User>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"),
                [id],
                user_from_row,
            )
            .optional()
        }

        pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"),
                [email],
                user_from_row,
            )
            .optional()
        }

        // Insert the user, or refresh its profile fields if the id exists
        pub async fn upsert_user(&self, user: &User) -> Result<User, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO users (id, email, first_name, last_name, profile_image_url, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    email = excluded.email,
                    first_name = excluded.first_name,
                    last_name = excluded.last_name,
                    profile_image_url = excluded.profile_image_url,
                    updated_at = excluded.updated_at",
                rusqlite::params![
                    &user.id,
                    &user.email,
                    &user.first_name,
                    &user.last_name,
                    &user.profile_image_url,
                    user.created_at,
                    Utc::now(),
                ],
            )?;
            conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"),
                [&user.id],
                user_from_row,
            )
        }
    }

    mod seed {
        use crate::models::CafeDetails;

        fn cafe(
            name: &str,
            address: &str,
            (latitude, longitude): (f64, f64),
            description: &str,
            (bike_racks, water_refill, outdoor_seating): (bool, bool, bool),
            seating_capacity: u32,
            menu_items: &[&str],
        ) -> CafeDetails {
            CafeDetails {
                name: name.to_string(),
                address: address.to_string(),
                latitude,
                longitude,
                description: Some(description.to_string()),
                has_bike_racks: bike_racks,
                has_water_refill: water_refill,
                has_outdoor_seating: outdoor_seating,
                seating_capacity: Some(seating_capacity),
                is_open: true,
                menu_items: menu_items.iter().map(|item| item.to_string()).collect(),
                ..CafeDetails::default()
            }
        }

        pub(super) fn cafes() -> Vec<CafeDetails> {
            vec![
                cafe(
                    "Café Latte",
                    "123 Main St",
                    (40.7128, -74.0060),
                    "Cozy neighborhood café with excellent espresso and fresh pastries.",
                    (true, false, true),
                    25,
                    &["Coffee", "Pastries", "Sandwiches"],
                ),
                cafe(
                    "Oakwood Café",
                    "456 Park Ave",
                    (40.7580, -73.9855),
                    "Cyclist-friendly café with a beautiful garden seating area.",
                    (true, true, true),
                    40,
                    &["Coffee", "Smoothies", "Salads", "Bagels"],
                ),
                cafe(
                    "Riverbank Coffee",
                    "789 River Rd",
                    (40.7489, -73.9680),
                    "Riverside café with scenic views and bike-friendly amenities.",
                    (true, false, true),
                    30,
                    &["Coffee", "Pastries", "Breakfast"],
                ),
                cafe(
                    "Green Bean Café",
                    "321 Elm Street",
                    (40.7350, -73.9950),
                    "Eco-friendly café serving organic coffee and plant-based treats.",
                    (true, true, false),
                    20,
                    &["Organic Coffee", "Vegan Pastries", "Smoothie Bowls"],
                ),
                cafe(
                    "The Cycling Stop",
                    "555 Bike Lane",
                    (40.7200, -74.0100),
                    "Built by cyclists, for cyclists. Full bike repair station on-site!",
                    (true, true, true),
                    35,
                    &["Energy Drinks", "Protein Bars", "Fresh Juice", "Coffee"],
                ),
            ]
        }

        /// (index into `cafes()`, reviewer, overall rating, comment)
        pub(super) const REVIEWS: [(usize, &str, u8, &str); 7] = [
            (0, "Emma J.", 5, "Best coffee on my morning route! The baristas are super friendly."),
            (0, "Alex P.", 4, "Great pastries and good bike parking. Can get busy on weekends."),
            (1, "Tom R.", 5, "Love the outdoor seating area! Perfect stop after a long ride."),
            (1, "Sarah M.", 5, "The water refill station is a lifesaver. Great smoothies too!"),
            (2, "Lisa M.", 4, "Beautiful location by the river. Coffee is solid."),
            (3, "Mike T.", 5, "Best vegan options in the area. The staff really cares about sustainability."),
            (4, "Chris B.", 5, "This place is a game-changer! Fixed my chain while enjoying coffee."),
        ];
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{AmenityFlags, Database};
