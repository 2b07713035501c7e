//! Admin sessions
//!
//! A successful login issues a random token, stored server-side with an
//! expiry and handed to the browser as a cookie. Requests carry their own
//! authentication through that cookie; there is no process-wide login flag.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "fleetbook_session";

/// Server-side session table: token -> expiry
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session and return its token
    pub fn create(&self) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let now = Utc::now();

        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.insert(token.clone(), now + self.ttl);
        token
    }

    /// Whether `token` names a live session; expired sessions are dropped
    pub fn is_valid(&self, token: &str) -> bool {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        match sessions.get(token) {
            Some(expires_at) if *expires_at > Utc::now() => true,
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    pub fn revoke(&self, token: &str) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session token from the request's Cookie headers
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.to_string())
        .filter(|token| !token.is_empty())
}

/// Set-Cookie value carrying a new session
pub fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl.num_seconds().max(0)
    )
}

/// Set-Cookie value removing the session cookie
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_create_validate_revoke() {
        let store = SessionStore::new(Duration::hours(1));
        let token = store.create();

        assert!(store.is_valid(&token));
        assert!(!store.is_valid("not-a-token"));
        assert!(store.revoke(&token));
        assert!(!store.is_valid(&token));
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_session_is_rejected() {
        let store = SessionStore::new(Duration::seconds(-1));
        let token = store.create();
        assert!(!store.is_valid(&token));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_session_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; fleetbook_session=abc123; other=1"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));

        headers.insert(COOKIE, HeaderValue::from_static("fleetbook_session="));
        assert_eq!(session_token(&headers), None);

        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_cookie_strings() {
        let cookie = session_cookie("abc", Duration::hours(2));
        assert!(cookie.starts_with("fleetbook_session=abc;"));
        assert!(cookie.contains("Max-Age=7200"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }
}
