use axum::{Router, middleware, routing::get};
use axum_helpers::server::{create_router, health_router};
use domain_items::entity;
use observability::{metrics_handler, metrics_middleware};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod items;
pub mod root;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `create_router`.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest(entity::Model::URL, items::router(state))
}

/// `/ready`, with the state applied so it merges into the stateless app.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The full application: docs, `/api`, health, metrics and the welcome page.
pub fn app(state: &AppState) -> io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state), &state.config.server)?;

    let app = router
        .route("/", get(root::welcome).with_state(state.config.app))
        .route("/metrics", get(metrics_handler))
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()))
        .layer(middleware::from_fn(metrics_middleware));

    Ok(app)
}
