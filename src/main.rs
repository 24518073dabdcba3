mod compose;
mod config;
mod datauri;
mod error;
mod removebg;
mod routes;
mod session;
mod specs;
mod state;

use std::sync::Arc;

use removebg::{BackgroundRemover, RemoveBgClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();

    // Missing credential is non-fatal: the proxy route answers with a
    // configuration error until the key is set.
    let remover: Option<Arc<dyn BackgroundRemover>> = match &config.remove_bg {
        Some(remove_bg) => match RemoveBgClient::new(remove_bg.clone()) {
            Ok(client) => {
                tracing::info!(endpoint = %remove_bg.endpoint, "remove.bg client initialized");
                Some(Arc::new(client))
            }
            Err(e) => {
                tracing::warn!(error = %e, "remove.bg client build failed — removal disabled");
                None
            }
        },
        None => {
            tracing::warn!("REMOVE_BG_API_KEY not configured — removal disabled");
            None
        }
    };

    let port = config.port;
    let state = state::AppState::new(config, remover);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "idphoto listening");
    axum::serve(listener, app).await.expect("server failed");
}
