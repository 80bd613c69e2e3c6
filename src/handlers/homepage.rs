use axum::{routing::get, Router};

use crate::{names, rejections::AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::HEALTH_URL, get(health))
}

async fn health() -> &'static str {
    names::HEALTH_MESSAGE
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
