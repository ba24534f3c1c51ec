//! Serves freshly rendered slides to a display that polls over HTTP.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use log::info;
use rtopfm::{
    app::{self, App, ConfigBuilder},
    render::Root,
};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

async fn render(State(app): State<Arc<App>>) -> Json<Root> {
    // No caching here, every poll resolves again
    Json(app.render_with_artwork().await)
}

async fn health() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    app::load_env_files();

    let config = ConfigBuilder::from_env().build()?;
    let state = Arc::new(App::new(config));
    let router = Router::new()
        .route("/render", get(render))
        .route("/health", get(health))
        .with_state(state);

    let addr = std::env::var("RTOPFM_HTTP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving slides on http://{addr}/render");
    axum::serve(listener, router).await?;
    Ok(())
}
