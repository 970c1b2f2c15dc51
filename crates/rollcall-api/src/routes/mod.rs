//! Route definitions
//!
//! JSON endpoints live under `/api`; the client shell and its assets are
//! served from the configured static directory.

use std::path::Path;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{attendance, auth, health, members, roles, users};
use crate::state::AppState;

/// All `/api` routes (rate limited when enabled)
pub fn api_routes() -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(auth_routes())
            .merge(user_routes())
            .merge(member_routes())
            .merge(attendance_routes())
            .merge(role_routes()),
    )
}

/// Health check routes (kept outside rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// `/` serves `index.html`; `/static/*` serves the directory as is
pub fn static_routes(dir: impl AsRef<Path>) -> Router<AppState> {
    let dir = dir.as_ref();
    Router::new()
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .nest_service("/static", ServeDir::new(dir))
}

fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(auth::login))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/me", get(users::get_current_user))
}

fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members).post(members::create_member))
        .route("/members/:id", put(members::update_member))
}

fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/attendance", get(attendance::list_attendance))
        .route("/attendance/:date", put(attendance::update_attendance))
}

fn role_routes() -> Router<AppState> {
    Router::new().route("/roles", get(roles::list_roles))
}
