//! Admin login and logout

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tera::Context;
use tracing::{info, warn};

use crate::extract::AuthContext;
use crate::session::{clear_session_cookie, session_cookie};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub password: Option<String>,
}

pub async fn login_page(State(state): State<AppState>) -> Response {
    state.pages.render("login.html", &Context::new())
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let password = form.password.unwrap_or_default();
    if state.credentials.verify_password(&password) {
        let token = state.sessions.create();
        info!("admin logged in");
        let cookie = session_cookie(&token, state.sessions.ttl());
        return ([(SET_COOKIE, cookie)], Redirect::to("/admin")).into_response();
    }

    warn!("failed admin login attempt");
    let mut context = Context::new();
    context.insert("error", "Invalid password!");
    state.pages.render("login.html", &context)
}

pub async fn admin(State(state): State<AppState>, auth: AuthContext) -> Response {
    if !auth.authenticated {
        return Redirect::to("/login").into_response();
    }
    state.pages.render("admin.html", &Context::new())
}

pub async fn logout(State(state): State<AppState>, auth: AuthContext) -> Response {
    if let Some(token) = auth.token.as_deref() {
        if state.sessions.revoke(token) {
            info!("admin logged out");
        }
    }
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/login")).into_response()
}
