//! Page templates

use std::path::Path;

use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use tera::{Context, Tera};
use tracing::{error, info, warn};

use crate::state::AppState;

/// Renders the site's HTML pages from `<templates_dir>/**/*.html`
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Load every template under `dir`; a missing directory gives no pages
    pub fn load(dir: &Path) -> Result<Self, tera::Error> {
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "templates directory not found, pages will 404");
            return Ok(Self::empty());
        }

        let glob = format!("{}/**/*.html", dir.display());
        let tera = Tera::new(&glob)?;
        info!(
            dir = %dir.display(),
            templates = tera.get_template_names().count(),
            "page templates loaded"
        );
        Ok(Self { tera })
    }

    pub fn empty() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Build from in-memory `(name, source)` pairs
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, tera::Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)?;
        Ok(Self { tera })
    }

    pub fn has_page(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|t| t == name)
    }

    pub fn render(&self, name: &str, context: &Context) -> Response {
        if !self.has_page(name) {
            return (StatusCode::NOT_FOUND, "Page not found").into_response();
        }
        match self.tera.render(name, context) {
            Ok(body) => Html(body).into_response(),
            Err(e) => {
                error!(page = name, error = ?e, "failed to render page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

/// GET route rendering a fixed template
pub fn page_route(template: &'static str) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move {
        state.pages.render(template, &Context::new())
    })
}

/// Operator fleet lists under `lists/operators/`
pub async fn operator_page(State(state): State<AppState>, UrlPath(page): UrlPath<String>) -> Response {
    let valid = page
        .strip_suffix(".html")
        .is_some_and(|stem| !stem.is_empty() && stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    if !valid {
        return (StatusCode::NOT_FOUND, "Page not found").into_response();
    }
    state
        .pages
        .render(&format!("lists/operators/{}", page), &Context::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_names_templates_relative_to_dir() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("lists/operators")).unwrap();
        std::fs::write(dir.path().join("index.html"), "home").unwrap();
        std::fs::write(dir.path().join("lists/operators/wray.html"), "wray").unwrap();

        let pages = PageRenderer::load(dir.path()).unwrap();
        assert!(pages.has_page("index.html"));
        assert!(pages.has_page("lists/operators/wray.html"));
        assert!(!pages.has_page("contact.html"));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        let pages = PageRenderer::load(&dir.path().join("absent")).unwrap();
        assert!(!pages.has_page("index.html"));
    }

    #[test]
    fn test_render_status() {
        let pages = PageRenderer::from_sources([("login.html", "{{ error | default(value='') }}")]).unwrap();

        let mut context = Context::new();
        context.insert("error", "Invalid password!");
        assert_eq!(pages.render("login.html", &context).status(), StatusCode::OK);
        assert_eq!(pages.render("admin.html", &context).status(), StatusCode::NOT_FOUND);
    }
}
