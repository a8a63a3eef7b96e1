#[cfg(feature = "ssr")]
use crate::auth::{current_user_id, forget_user, remember_user, require_user_id};
#[cfg(feature = "ssr")]
use crate::db::{AmenityFlags, Database};
#[cfg(feature = "ssr")]
use crate::error::ApiError;
#[cfg(feature = "ssr")]
use crate::models::user::LoginRequest;
#[cfg(feature = "ssr")]
use crate::models::{CafeDetails, NewReview, User};
#[cfg(feature = "ssr")]
use crate::validation::{validate_cafe, validate_login, validate_review};
#[cfg(feature = "ssr")]
use actix_session::Session;
#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use chrono::Utc;
#[cfg(feature = "ssr")]
use leptos::logging::log;
#[cfg(feature = "ssr")]
use serde::Deserialize;
#[cfg(feature = "ssr")]
use uuid::Uuid;

/// Query string of `GET /api/cafes`.
#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CafeListParams {
    pub search: Option<String>,
    pub has_bike_racks: Option<String>,
    pub has_water_refill: Option<String>,
    pub has_outdoor_seating: Option<String>,
}

#[cfg(feature = "ssr")]
impl CafeListParams {
    /// Supplied flags constrain to `value == "true"`; absent flags do not constrain.
    pub fn flags(&self) -> AmenityFlags {
        let flag = |value: &Option<String>| value.as_deref().map(|v| v == "true");
        AmenityFlags {
            bike_racks: flag(&self.has_bike_racks),
            water_refill: flag(&self.has_water_refill),
            outdoor_seating: flag(&self.has_outdoor_seating),
        }
    }

    fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// GET /api/cafes
#[cfg(feature = "ssr")]
pub async fn list_cafes(
    db: web::Data<Database>,
    params: web::Query<CafeListParams>,
) -> Result<HttpResponse, ApiError> {
    let cafes = if let Some(search) = params.search_text() {
        log!("[API] Searching cafes for '{}'", search);
        db.search_cafes(search).await?
    } else {
        let flags = params.flags();
        if flags.is_empty() {
            db.get_all_cafes().await?
        } else {
            db.filter_cafes(&flags).await?
        }
    };
    log!("[API] Returning {} cafes", cafes.len());
    Ok(HttpResponse::Ok().json(cafes))
}

// GET /api/cafes/{id}
#[cfg(feature = "ssr")]
pub async fn get_cafe(
    db: web::Data<Database>,
    cafe_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let cafe = db
        .get_cafe(&cafe_id)
        .await?
        .ok_or(ApiError::NotFound("Café"))?;
    Ok(HttpResponse::Ok().json(cafe))
}

// GET /api/cafes/{id}/reviews
#[cfg(feature = "ssr")]
pub async fn get_cafe_reviews(
    db: web::Data<Database>,
    cafe_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reviews = db.get_reviews_by_cafe_id(&cafe_id).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

// POST /api/cafes (login required)
#[cfg(feature = "ssr")]
pub async fn create_cafe(
    db: web::Data<Database>,
    session: Session,
    details: web::Json<CafeDetails>,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&session)?;
    let details = details.into_inner();
    validate_cafe(&details)?;

    log!("[API] User {} submitting cafe '{}'", user_id, details.name);
    let cafe = db.create_cafe(&details, Some(&user_id)).await?;
    Ok(HttpResponse::Created().json(cafe))
}

// POST /api/reviews
#[cfg(feature = "ssr")]
pub async fn create_review(
    db: web::Data<Database>,
    session: Session,
    review: web::Json<NewReview>,
) -> Result<HttpResponse, ApiError> {
    let mut review = review.into_inner();
    validate_review(&review)?;

    if db.get_cafe(&review.cafe_id).await?.is_none() {
        return Err(ApiError::NotFound("Café"));
    }
    // only the session decides who wrote the review
    review.user_id = current_user_id(&session)?;

    let created = db.create_review(&review).await?;
    log!("[API] Review {} created for cafe {}", created.id, review.cafe_id);
    Ok(HttpResponse::Created().json(created))
}

// GET /api/auth/user
#[cfg(feature = "ssr")]
pub async fn current_user(
    db: web::Data<Database>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user_id(&session)?;
    match db.get_user(&user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            // the session outlived its user row
            forget_user(&session);
            Err(ApiError::Unauthorized)
        }
    }
}

// POST /api/login
#[cfg(feature = "ssr")]
pub async fn login(
    db: web::Data<Database>,
    session: Session,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    validate_login(&request)?;
    let email = request
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    let existing = match current_user_id(&session)? {
        Some(id) => db.get_user(&id).await?,
        None => None,
    };
    let existing = match (existing, &email) {
        (Some(user), _) => Some(user),
        (None, Some(email)) => db.find_user_by_email(email).await?,
        (None, None) => None,
    };

    let now = Utc::now();
    let user = User {
        id: existing
            .as_ref()
            .map(|u| u.id.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        email,
        first_name: Some(request.first_name.trim().to_string()),
        last_name: request.last_name.filter(|n| !n.trim().is_empty()),
        profile_image_url: existing.as_ref().and_then(|u| u.profile_image_url.clone()),
        created_at: existing.as_ref().map_or(now, |u| u.created_at),
        updated_at: now,
    };
    let user = db.upsert_user(&user).await?;
    remember_user(&session, &user.id)?;
    log!("[API] User {} logged in", user.id);
    Ok(HttpResponse::Ok().json(user))
}

// POST /api/logout
#[cfg(feature = "ssr")]
pub async fn logout(session: Session) -> HttpResponse {
    forget_user(&session);
    HttpResponse::NoContent().finish()
}

/// Registers every `/api` route plus JSON body error handling.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .route("/cafes", web::get().to(list_cafes)) // GET /api/cafes
            .route("/cafes", web::post().to(create_cafe)) // POST /api/cafes
            .route("/cafes/{id}", web::get().to(get_cafe)) // GET /api/cafes/{id}
            .route("/cafes/{id}/reviews", web::get().to(get_cafe_reviews))
            .route("/reviews", web::post().to(create_review)) // POST /api/reviews
            .route("/auth/user", web::get().to(current_user))
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout)),
    );
}
