mod app_state;
mod config_source;
mod error;
mod handlers;
mod page_session;
mod render;
mod settings;

use std::sync::Arc;

use app_state::AppState;
use axum::routing::get;
use axum::{Extension, Router};
use error::Result;
use handlers::index_handler::index_handler;
use handlers::repositories_handler::repositories_handler;
use settings::Settings;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn app(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.settings.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/api/repositories", get(repositories_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    let address = settings.address();
    tracing::debug!("Serving {}", settings.static_dir.display());

    let app_state = Arc::new(AppState::new(settings));

    let listener = TcpListener::bind(address).await?;
    tracing::info!("Starting server on port {}...", address.port());

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
