//! Request extractors: per-request auth context and JSON bodies

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use tracing::debug;

use fleetbook_types::Error;

use crate::error::ApiError;
use crate::session::session_token;
use crate::state::AppState;

/// Who is making the request
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub token: Option<String>,
    pub authenticated: bool,
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers);
        let authenticated = token
            .as_deref()
            .is_some_and(|token| state.sessions.is_valid(token));
        Ok(Self {
            token,
            authenticated,
        })
    }
}

/// Proof of an admin session; rejects with 403 before the body is read
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth = match AuthContext::from_request_parts(parts, state).await {
            Ok(auth) => auth,
            Err(never) => match never {},
        };
        match auth.token {
            Some(token) if auth.authenticated => Ok(Self { token }),
            _ => {
                debug!(path = %parts.uri.path(), "rejected unauthenticated request");
                Err(Error::Unauthorized.into())
            }
        }
    }
}

/// `Json` whose rejection follows the API failure contract
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "rejected request body");
                Err(ApiError::invalid_json())
            }
        }
    }
}
