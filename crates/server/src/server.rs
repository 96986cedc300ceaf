use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use crate::{account, pages, profile};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/error", get(pages::error))
        .route("/register", get(account::register_form).post(account::register))
        .route("/login", get(account::login_form).post(account::login))
        .route("/welcome/{id}", get(profile::welcome))
        .route(
            "/edit_profile/{id}",
            get(profile::edit_profile_form).post(profile::edit_profile),
        )
        .route("/delete/{id}", get(profile::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the application router around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
