pub mod api;
pub mod catalog;
pub mod export;
pub mod query;
pub mod shared;
pub mod system;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log every request with method, path, status and duration
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        "{} {} -> {} ({}ms)",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Export files and the log file need their directories up front
    std::fs::create_dir_all(api::handlers::export::EXPORT_DIR)?;
    let log_dir = std::path::Path::new("logs");
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn,sea_orm=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;

    // A broken catalog is a programming error; refuse to start
    catalog::validate()?;

    // An unreachable database is not fatal: the server starts in degraded
    // mode and every query answers empty with an error indicator
    if let Err(e) = shared::data::db::initialize_database(&config.database).await {
        tracing::warn!("database unavailable, starting in no-data mode: {}", e);
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/catalog/tables", get(api::handlers::catalog::list_tables))
        .route("/api/query", post(api::handlers::query::run_query))
        .route("/api/export", post(api::handlers::export::run_export))
        .route("/api/stats", get(api::handlers::stats::get_stats))
        .route(
            "/api/system/health",
            get(api::handlers::system::database_health),
        )
        .route("/api/system/info", get(api::handlers::system::system_info))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
