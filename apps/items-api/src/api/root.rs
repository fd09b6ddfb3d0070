use axum::{Json, extract::State};
use core_config::AppInfo;
use serde::Serialize;

#[derive(Serialize)]
pub struct Welcome {
    message: &'static str,
    docs: &'static str,
    version: &'static str,
}

/// `GET /`
pub async fn welcome(State(app): State<AppInfo>) -> Json<Welcome> {
    Json(Welcome {
        message: "Items API - full CRUD",
        docs: "/swagger-ui",
        version: app.version,
    })
}
