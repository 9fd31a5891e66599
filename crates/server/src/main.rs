mod error;
mod routes;
mod storage;

use axum::{Router, routing::get};
use std::path::{Path, PathBuf};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use storage::Db;

/// Build the full application router.
///
/// Every route sits behind the same cross-cutting layers: request tracing,
/// panic recovery (a panicking handler becomes a 500 and the process keeps
/// serving), and permissive CORS.
fn build_router(db: Db, web_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/projects", get(routes::projects::list_projects))
        .route("/projects/{id}", get(routes::projects::get_project))
        .route_service("/", ServeFile::new(web_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(web_dir.join("static")))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estates_server=info,tower_http=info".into()),
        )
        .init();

    let data_dir = std::env::var("ESTATES_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));
    tracing::info!("data directory: {}", data_dir.display());

    // Open the store and run migrations; failure here is fatal before the
    // listener is ever bound.
    let db = storage::init_db(&data_dir)?;
    let count: i64 = storage::sq_query_row(&db.conn(), estates_db::projects::count(), |row| {
        row.get(0)
    })?;
    tracing::info!("database initialized, {count} projects on record");

    let web_dir = std::env::var("ESTATES_WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("frontend"));

    let app = build_router(db, &web_dir);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".into());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("serving on http://0.0.0.0:{port}");
    axum::serve(listener, app).await?;

    Ok(())
}
