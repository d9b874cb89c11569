//! Static content endpoints for the public pages.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::content::{events, leadership, medical_fund, photos, workplan};
use crate::middleware::AppState;

/// Home page content: hero copy plus the upcoming event strip.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub upcoming_events: Vec<events::Event>,
}

async fn home() -> Json<HomeContent> {
    let upcoming_events = events::all()
        .into_iter()
        .filter(|e| !matches!(e.timeline, events::EventTimeline::Past))
        .collect();

    Json(HomeContent {
        headline: "Nurturing Young Rugby Talents",
        tagline: "Empowering young athletes through rugby excellence",
        upcoming_events,
    })
}

async fn list_events() -> Json<Vec<events::Event>> {
    Json(events::all())
}

async fn list_leadership() -> Json<Vec<leadership::Committee>> {
    Json(leadership::all())
}

async fn list_workplan() -> Json<Vec<workplan::WorkplanEntry>> {
    Json(workplan::all())
}

async fn get_medical_fund() -> Json<medical_fund::MedicalFundInfo> {
    Json(medical_fund::info())
}

async fn list_photos() -> Json<Vec<photos::PhotoCollection>> {
    Json(photos::all())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(home))
        .route("/events", get(list_events))
        .route("/leadership", get(list_leadership))
        .route("/workplan", get(list_workplan))
        .route("/medical-fund", get(get_medical_fund))
        .route("/photos", get(list_photos))
}
