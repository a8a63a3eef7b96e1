//! Browser-side calls to the `/api` endpoints.

use crate::models::user::LoginRequest;
use crate::models::{Cafe, CafeDetails, NewReview, Review, User};
use crate::validation::ValidationErrors;
use gloo_net::http::{Request, Response};
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("please log in first")]
    Unauthorized,
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    details: Option<ValidationErrors>,
}

pub fn cafe_url(cafe_id: &str) -> String {
    format!("/api/cafes/{}", urlencoding::encode(cafe_id))
}

pub fn reviews_url(cafe_id: &str) -> String {
    format!("{}/reviews", cafe_url(cafe_id))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.ok() {
        return Err(error_from(&response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ClientError::Decode(err.to_string()))
}

async fn error_from(response: &Response) -> ClientError {
    let status = response.status();
    if status == 401 {
        return ClientError::Unauthorized;
    }
    let err = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            details: Some(details),
            ..
        }) if !details.is_empty() => ClientError::Validation(details),
        Ok(body) => ClientError::Status {
            status,
            message: body.message,
        },
        Err(_) => ClientError::Status {
            status,
            message: response.status_text(),
        },
    };
    warn!("[CLIENT] {} {}", response.url(), err);
    err
}

/// Every café; filtering and ordering happen in the browser.
pub async fn fetch_cafes() -> Result<Vec<Cafe>, ClientError> {
    let response = Request::get("/api/cafes").send().await?;
    read_json(response).await
}

/// `Ok(None)` when the café does not exist.
pub async fn fetch_cafe(cafe_id: &str) -> Result<Option<Cafe>, ClientError> {
    let response = Request::get(&cafe_url(cafe_id)).send().await?;
    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

pub async fn fetch_reviews(cafe_id: &str) -> Result<Vec<Review>, ClientError> {
    let response = Request::get(&reviews_url(cafe_id)).send().await?;
    read_json(response).await
}

pub async fn submit_cafe(details: &CafeDetails) -> Result<Cafe, ClientError> {
    let response = Request::post("/api/cafes").json(details)?.send().await?;
    read_json(response).await
}

pub async fn submit_review(review: &NewReview) -> Result<Review, ClientError> {
    let response = Request::post("/api/reviews").json(review)?.send().await?;
    read_json(response).await
}

/// `Ok(None)` when nobody is logged in.
pub async fn fetch_current_user() -> Result<Option<User>, ClientError> {
    let response = Request::get("/api/auth/user").send().await?;
    match read_json(response).await {
        Ok(user) => Ok(Some(user)),
        Err(ClientError::Unauthorized) => Ok(None),
        Err(err) => Err(err),
    }
}

pub async fn login(request: &LoginRequest) -> Result<User, ClientError> {
    let response = Request::post("/api/login").json(request)?.send().await?;
    read_json(response).await
}

pub async fn logout() -> Result<(), ClientError> {
    let response = Request::post("/api/logout").send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(&response).await)
    }
}
