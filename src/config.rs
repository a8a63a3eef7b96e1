//! Server settings read from the environment.

use actix_web::cookie::Key;
use leptos::logging::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite file, or `:memory:`
    pub db_path: String,
    /// Load demo cafés into an empty database
    pub seed: bool,
    /// Session signing/encryption key material, at least 64 bytes
    pub session_key: Option<Vec<u8>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_path: "brewstop.db".to_string(),
            seed: true,
            session_key: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("BREWSTOP_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.db_path = path;
        }
        if let Some(seed) = lookup("BREWSTOP_SEED") {
            match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.seed = true,
                "0" | "false" | "no" | "off" => config.seed = false,
                other => warn!("[CONFIG] Ignoring BREWSTOP_SEED={}", other),
            }
        }
        if let Some(key) = lookup("BREWSTOP_SESSION_KEY") {
            config.session_key = Some(key.into_bytes());
        }
        config
    }

    /// The configured session key, or a fresh random one. A random key logs
    /// everybody out when the server restarts.
    pub fn session_key(&self) -> Key {
        match self.session_key.as_deref().map(Key::try_from) {
            Some(Ok(key)) => key,
            Some(Err(err)) => {
                warn!("[CONFIG] BREWSTOP_SESSION_KEY rejected ({}), using a random key", err);
                Key::generate()
            }
            None => Key::generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(ServerConfig::from_lookup(|_| None), ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BREWSTOP_DB_PATH", ":memory:"),
            ("BREWSTOP_SEED", "off"),
            ("BREWSTOP_SESSION_KEY", "k"),
        ]));
        assert_eq!(config.db_path, ":memory:");
        assert!(!config.seed);
        assert_eq!(config.session_key.as_deref(), Some(&b"k"[..]));
    }

    #[test]
    fn unrecognised_seed_value_keeps_default() {
        let config = ServerConfig::from_lookup(lookup(&[("BREWSTOP_SEED", "maybe")]));
        assert!(config.seed);
    }

    #[test]
    fn short_session_key_falls_back_to_random() {
        let config = ServerConfig::from_lookup(lookup(&[("BREWSTOP_SESSION_KEY", "too short")]));
        // does not panic
        let _ = config.session_key();

        let long = "x".repeat(64);
        let config = ServerConfig::from_lookup(lookup(&[("BREWSTOP_SESSION_KEY", long.as_str())]));
        assert_eq!(config.session_key().master(), Key::from(long.as_bytes()).master());
    }
}
