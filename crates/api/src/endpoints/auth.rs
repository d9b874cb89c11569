//! Authentication endpoints.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use usra_common::AppResult;
use usra_core::{Identity, IdentityProvider};
use validator::Validate;

use crate::{
    extractors::{AuthAccount, MaybeAuthAccount},
    middleware::AppState,
    response::ApiResponse,
};

/// Signin request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Signin response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub account_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub token: String,
    /// The school this administrator owns, if one is registered.
    pub school_id: Option<String>,
}

/// Sign in to an existing account.
async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> AppResult<ApiResponse<SigninResponse>> {
    req.validate()?;

    let session = state
        .identity_service
        .create_session(&req.email, &req.password)
        .await?;

    let account = state
        .identity_service
        .authenticate_by_token(&session.token)
        .await?;

    let identity = Identity::from(&account);
    let school_id = state.profile_service.owned_school_id(&identity).await?;

    Ok(ApiResponse::ok(SigninResponse {
        account_id: account.id,
        email: account.email,
        display_name: account.display_name,
        token: session.token,
        school_id,
    }))
}

/// Current-session response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub account_id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// The school owned by the signed-in administrator, if any.
    pub school_id: Option<String>,
}

/// Resolve the current session to its identity and owned school.
async fn session(
    MaybeAuthAccount(account): MaybeAuthAccount,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<SessionResponse>> {
    let Some(account) = account else {
        return Ok(ApiResponse::ok(SessionResponse {
            account_id: None,
            email: None,
            display_name: None,
            school_id: None,
        }));
    };

    let identity = Identity::from(&account);
    let school_id = state.profile_service.owned_school_id(&identity).await?;

    Ok(ApiResponse::ok(SessionResponse {
        account_id: Some(account.id),
        email: Some(account.email),
        display_name: account.display_name,
        school_id,
    }))
}

/// Signout response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignoutResponse {
    pub ok: bool,
}

/// Sign out (tear down the current session token).
async fn signout(
    AuthAccount(account): AuthAccount,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<SignoutResponse>> {
    if let Some(token) = account.token {
        state.identity_service.delete_session(&token).await?;
    }

    Ok(ApiResponse::ok(SignoutResponse { ok: true }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signin", post(signin))
        .route("/signout", post(signout))
        .route("/session", get(session))
}
