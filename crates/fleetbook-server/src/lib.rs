//! HTTP layer for the fleet list site
//!
//! Serves the HTML pages, the admin login and the JSON API over the
//! application services in `fleetbook-app`.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod session;
pub mod state;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, changes, fleets, tables};
use crate::pages::{operator_page, page_route};

pub use crate::state::AppState;

/// Every route the site serves
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", page_route("index.html"))
        .route("/changes", page_route("changes.html"))
        .route("/data-sources", page_route("data-sources.html"))
        .route("/contact", page_route("contact.html"))
        .route("/custom-table", page_route("table.html"))
        .route("/fleetshome", page_route("lists/flistshome.html"))
        .route("/lcreator", page_route("liverycreator.html"))
        .route("/operators/{page}", get(operator_page));

    let admin = Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/admin", get(auth::admin))
        .route("/logout", get(auth::logout));

    let api = Router::new()
        .route("/api/fleets", get(fleets::raw_fleets))
        .route("/api/add_fleet", post(fleets::add_fleet))
        .route("/api/update_fleet", post(fleets::update_fleet))
        .route("/api/delete_fleet", post(fleets::delete_fleet))
        .route("/api/parse_bulk_fleet", post(fleets::parse_bulk_fleet))
        .route("/api/request_change", post(changes::request_change))
        .route("/api/validate_key", post(changes::validate_key))
        .route("/api/table/{table_name}", get(tables::get_table))
        .route("/api/table/{table_name}/add", post(tables::add_row))
        .route("/api/table/{table_name}/update", post(tables::update_row));

    Router::new()
        .merge(pages)
        .merge(admin)
        .merge(api)
        .route("/fleets.json", get(fleets::raw_fleets))
        .route("/healthz", get(handlers::healthz))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .with_state(state)
}
