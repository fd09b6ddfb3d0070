//! HTTP middleware applied by [`create_router`](crate::server::create_router).

pub mod cors;
pub mod security;

pub use cors::cors_layer;
pub use security::security_headers;
