//! API integration tests.
//!
//! These tests verify the routers work correctly together against a
//! mock database and an isolated local storage root.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use tower::ServiceExt;
use usra_api::{middleware::AppState, router as api_router};
use usra_common::{LocalStorage, config::AssociationConfig};
use usra_core::{
    AccountIdentityProvider, PlayerService, ProfileService, SchoolService, StorageService,
};
use usra_db::{
    entities::account,
    repositories::{AccountRepository, PlayerRepository, SchoolRepository},
};

/// Create a mock database connection.
fn create_mock_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

/// Build an app with the given database connection behind every repo.
fn create_app(db: DatabaseConnection) -> Router {
    let db = Arc::new(db);

    let account_repo = AccountRepository::new(Arc::clone(&db));
    let school_repo = SchoolRepository::new(Arc::clone(&db));
    let player_repo = PlayerRepository::new(Arc::clone(&db));

    let storage_service = StorageService::new(Arc::new(LocalStorage::new(
        PathBuf::from("./target/test-files"),
        "/files".to_string(),
    )));

    let state = AppState {
        identity_service: AccountIdentityProvider::new(account_repo),
        storage_service: storage_service.clone(),
        school_service: SchoolService::new(school_repo.clone()),
        player_service: PlayerService::new(player_repo.clone(), Arc::new(storage_service)),
        profile_service: ProfileService::new(school_repo, player_repo),
        association: AssociationConfig {
            name: "Uganda Schools Rugby Association".to_string(),
            description: Some("Nurturing young rugby talents".to_string()),
            contact_email: None,
        },
    };

    api_router().with_state(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_events_content_is_served() {
    let app = create_app(create_mock_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/content/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Independence Cup"));
}

#[tokio::test]
async fn test_leadership_content_is_served() {
    let app = create_app(create_mock_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/content/leadership")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json[0]["name"], "Executive Committee");
}

#[tokio::test]
async fn test_medical_fund_and_photos_and_workplan_are_served() {
    for uri in ["/content/medical-fund", "/content/photos", "/content/workplan", "/content/home"] {
        let app = create_app(create_mock_db());

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri} should serve");
    }
}

#[tokio::test]
async fn test_meta_reports_association_name() {
    let app = create_app(create_mock_db());

    let response = app
        .oneshot(Request::builder().uri("/meta").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Uganda Schools Rugby Association");
}

#[tokio::test]
async fn test_validate_flags_empty_school_info() {
    let app = create_app(create_mock_db());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/registration/validate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"step":1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let errors = json["data"]["errors"].as_object().unwrap();

    assert_eq!(json["data"]["valid"], false);
    assert_eq!(errors.len(), 5);
    for key in ["school_name", "office_contact", "region", "district", "school_badge"] {
        assert!(errors.contains_key(key), "missing error for {key}");
    }
}

#[tokio::test]
async fn test_validate_accepts_complete_school_info() {
    let app = create_app(create_mock_db());

    let body = serde_json::json!({
        "step": 1,
        "schoolName": "Acme High",
        "officeContact": "+256700000000",
        "region": "Central",
        "district": "Kampala",
        "schoolBadgeAttached": true,
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/registration/validate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["valid"], true);
}

#[tokio::test]
async fn test_registration_options_list_fixed_sets() {
    let app = create_app(create_mock_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/registration/options")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["regions"].as_array().unwrap().len(), 4);
    assert!(
        json["classLevels"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("S1"))
    );
}

#[tokio::test]
async fn test_profile_requires_authentication() {
    let app = create_app(create_mock_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/schools/some-school")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signin_with_unknown_email_is_rejected() {
    // Account lookup comes back empty.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<account::Model>::new()])
        .into_connection();
    let app = create_app(db);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/signin")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email":"nobody@example.com","password":"whatever-pass"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
