//! Items API routes
//!
//! Wires the items domain to HTTP routes.

use axum::Router;
use domain_items::{ItemService, SqlItemRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = SqlItemRepository::new(state.db.clone());
    handlers::router(ItemService::new(repository))
}
