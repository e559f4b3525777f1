use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tokio::signal;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use mergington::data::ActivityListing;
use mergington::errors::{Report, SeedError};
use mergington::log;

mod config;
mod handlers;
mod seed;
mod services;

use config::Config;
use services::{RosterInMemory, RosterService};

/// State shared by every request handler.
pub struct AppState {
    pub roster: RosterInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(seed: ActivityListing) -> Result<Self, SeedError> {
        Ok(Self {
            roster: RosterInMemory::from_seed(seed)?,
            started_at: chrono::Utc::now(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    let config = Config::from_env()?;
    let seed = match &config.seed_file {
        Some(path) => {
            log::info!("Loading activities from {}", path.display());
            seed::from_file(path)?
        }
        None => seed::mergington(),
    };
    let state = AppState::new(seed)?;
    let stats = state.roster.stats().await?;
    log::info!(
        "Roster ready with {} activities and {} signups",
        stats.activities,
        stats.participants
    );

    let listener = tokio::net::TcpListener::bind(SocketAddr::new(config.host, config.port)).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app(state, config.static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Build the router with its routes, static files and middleware
pub fn app(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(handlers::activities::root))
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        [3000, 5173, 8000, 8080]
            .into_iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                log::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
