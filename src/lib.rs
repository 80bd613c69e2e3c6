pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod validation;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn db::QuestionStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::questions::routes())
        .fallback(handlers::homepage::not_found)
        .method_not_allowed_fallback(handlers::homepage::not_found)
        .layer(DefaultBodyLimit::max(names::MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
