//! API endpoints.

mod auth;
mod content;
mod meta;
mod registration;
mod schools;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/registration", registration::router())
        .nest("/schools", schools::router())
        .nest("/content", content::router())
        .nest("/meta", meta::router())
}
