//! Meta endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::middleware::AppState;

/// Server metadata response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub name: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub version: String,
}

/// Get server metadata.
async fn meta(State(state): State<AppState>) -> Json<MetaResponse> {
    Json(MetaResponse {
        name: state.association.name.clone(),
        description: state.association.description.clone(),
        contact_email: state.association.contact_email.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(meta))
}
