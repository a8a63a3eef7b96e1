//! "Is logged in" checks on top of a cookie session.

use crate::error::ApiError;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::Key;
use leptos::logging::warn;

pub(crate) const USER_ID_KEY: &str = "user_id";
const SESSION_COOKIE: &str = "brewstop_session";

/// Signed, client-side session cookie. Holds only the user id.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_secure(false)
        .build()
}

/// The logged-in user's id, if any.
pub fn current_user_id(session: &Session) -> Result<Option<String>, ApiError> {
    session
        .get::<String>(USER_ID_KEY)
        .map_err(|err| {
            warn!("[AUTH] Unreadable session: {}", err);
            ApiError::Unauthorized
        })
        .map(|id| id.filter(|id| !id.is_empty()))
}

/// The logged-in user's id, or `401 Unauthorized`.
pub fn require_user_id(session: &Session) -> Result<String, ApiError> {
    current_user_id(session)?.ok_or(ApiError::Unauthorized)
}

pub fn remember_user(session: &Session, user_id: &str) -> Result<(), ApiError> {
    session.renew();
    session
        .insert(USER_ID_KEY, user_id)
        .map_err(|err| ApiError::Internal(format!("failed to persist session: {err}")))
}

pub fn forget_user(session: &Session) {
    session.purge();
}
