//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use usra_common::config::AssociationConfig;
use usra_core::{
    AccountIdentityProvider, PlayerService, ProfileService, SchoolService, StorageService,
};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Identity/session service.
    pub identity_service: AccountIdentityProvider,
    /// Object storage adapter.
    pub storage_service: StorageService,
    /// School record service.
    pub school_service: SchoolService,
    /// Player registration service.
    pub player_service: PlayerService,
    /// Profile resolver.
    pub profile_service: ProfileService,
    /// Association metadata.
    pub association: AssociationConfig,
}

/// Authentication middleware.
///
/// Resolves a `Bearer` token to the account it scopes and stores the
/// model in request extensions for the extractors.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
    {
        match state.identity_service.authenticate_by_token(token).await {
            Ok(account) => {
                req.extensions_mut().insert(account);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Bearer token did not resolve to an account");
            }
        }
    }

    next.run(req).await
}
