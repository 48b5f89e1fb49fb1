use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};
use std::error::Error as StdError;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use journal_workflow_api::middleware::create_cors_layer;
use journal_workflow_api::routes;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn StdError + Send + Sync + 'static>> {
    // RUST_LOG environment variable controls log level (default: info)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Write to stderr, no ANSI colors for log files
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("Application starting...");

    let app_state = routes::create_app_state_with_storage().await?;
    if app_state.is_postgres() {
        info!("Storage backend: PostgreSQL");
    } else {
        info!("Storage backend: in-memory");
    }

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/health", get(health_check))
        .nest("/api/v1", routes::create_api_router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        );

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8081);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "journal-workflow-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
