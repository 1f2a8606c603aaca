// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::catalog_service::CatalogService;
use crate::application::delta_source::DeltaSource;
use crate::application::live_metrics_service::{DeltaSourceFactory, LiveMetricsService};
use crate::application::submission_service::SubmissionService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::random_deltas::RandomDeltaSource;
use crate::infrastructure::tracing_sink::TracingSink;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    about, book_taxi, contact_info, dashboard, feedback_page, health_check, home,
    list_routes, list_taxi_routes, live_metrics, submit_contact, submit_feedback,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("raah_transit=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create adapters (infrastructure layer)
    let sink = Arc::new(TracingSink);
    let bounds = config.simulator.bounds;
    let seed = config.simulator.seed;
    let delta_sources: DeltaSourceFactory =
        Arc::new(move || Box::new(RandomDeltaSource::new(bounds, seed)) as Box<dyn DeltaSource>);

    // Create services (application layer)
    let catalog_service = CatalogService::with_samples();
    let live_metrics_service = LiveMetricsService::new(
        config.simulator.initial,
        config.simulator.interval(),
        config.simulator.clamp_counts,
        delta_sources,
    );
    let submission_service = SubmissionService::new(
        sink,
        catalog_service.clone(),
        config.submissions.latency(),
        config.submissions.platform.clone(),
    );

    // Create application state
    let state = Arc::new(AppState {
        catalog_service,
        live_metrics_service,
        submission_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/home", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact_info).post(submit_contact))
        .route("/feedback", get(feedback_page).post(submit_feedback))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/live", get(live_metrics))
        .route("/routes", get(list_routes))
        .route("/taxi-routes", get(list_taxi_routes))
        .route("/taxi-routes/:id/book", post(book_taxi))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting raah-transit service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
