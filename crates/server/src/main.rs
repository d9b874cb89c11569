//! USRA-rs server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usra_api::{middleware::AppState, router as api_router};
use usra_common::{Config, LocalStorage};
use usra_core::{
    AccountIdentityProvider, PlayerService, ProfileService, SchoolService, StorageService,
};
use usra_db::repositories::{AccountRepository, PlayerRepository, SchoolRepository};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usra=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting usra-rs server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database and run migrations
    let db = usra_db::init(&config).await?;
    info!("Connected to database");

    info!("Running database migrations...");
    usra_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize file storage
    let storage = LocalStorage::new(
        config.storage.base_path.clone(),
        format!(
            "{}{}",
            config.server.url.trim_end_matches('/'),
            config.storage.base_url
        ),
    );

    // Initialize repositories
    let db = Arc::new(db);
    let account_repo = AccountRepository::new(Arc::clone(&db));
    let school_repo = SchoolRepository::new(Arc::clone(&db));
    let player_repo = PlayerRepository::new(Arc::clone(&db));

    // Initialize services
    let identity_service = AccountIdentityProvider::new(account_repo);
    let storage_service = StorageService::new(Arc::new(storage));
    let school_service = SchoolService::new(school_repo.clone());
    let player_service =
        PlayerService::new(player_repo.clone(), Arc::new(storage_service.clone()));
    let profile_service = ProfileService::new(school_repo, player_repo);

    // Create app state
    let state = AppState {
        identity_service,
        storage_service,
        school_service,
        player_service,
        profile_service,
        association: config.association.clone(),
    };

    // Build router
    let app = Router::new()
        .nest("/api", api_router())
        .nest_service("/files", ServeDir::new(config.storage.base_path.clone()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            usra_api::middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
