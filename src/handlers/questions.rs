use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    models::{Category, Question},
    names,
    rejections::{AppError, ResultExt},
    validation::{self, ValidationError},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUESTIONS_URL, post(insert_questions))
        .route(names::QUESTIONS_BY_CATEGORY_URL, get(questions_by_category))
}

#[derive(Serialize)]
struct Inserted {
    message: &'static str,
    data: Vec<Question>,
}

async fn insert_questions(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A body that is not JSON is treated like any other non-array payload.
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!("rejected question payload: {e}");
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            ValidationError::InvalidPayload.into()
        }
    })?;

    let questions = validation::validate_questions(payload)?;

    let data = state
        .db
        .insert_many(questions)
        .await
        .reject("could not insert questions")?;

    Ok((
        StatusCode::CREATED,
        Json(Inserted {
            message: names::INSERTED_MESSAGE,
            data,
        }),
    ))
}

async fn questions_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Question>>, AppError> {
    // Undecodable segments (e.g. invalid UTF-8) are just another unknown category.
    let category = category
        .ok()
        .and_then(|Path(category)| category.parse::<Category>().ok())
        .ok_or(AppError::InvalidCategory)?;

    let questions = state
        .db
        .find_by_category(category)
        .await
        .reject("could not get questions")?;

    Ok(Json(questions))
}
