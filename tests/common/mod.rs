#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use color_eyre::{eyre::eyre, Result};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use quizbank::{
    db::QuestionStore,
    models::{Category, NewQuestion, Question},
    router, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Keeps questions in insertion order, like a collection scanned without a sort.
#[derive(Default)]
pub struct MemoryStore {
    questions: Mutex<Vec<Question>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn insert_many(&self, questions: Vec<NewQuestion>) -> Result<Vec<Question>> {
        let stored: Vec<Question> = questions
            .into_iter()
            .map(|q| q.persisted(ObjectId::new()))
            .collect();
        self.questions.lock().unwrap().extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }
}

/// Every call fails the way an unreachable database would.
pub struct FailingStore;

pub const FAILING_STORE_MESSAGE: &str = "Server selection timeout: No available servers";

#[async_trait]
impl QuestionStore for FailingStore {
    async fn insert_many(&self, _questions: Vec<NewQuestion>) -> Result<Vec<Question>> {
        Err(eyre!(FAILING_STORE_MESSAGE))
    }

    async fn find_by_category(&self, _category: Category) -> Result<Vec<Question>> {
        Err(eyre!(FAILING_STORE_MESSAGE))
    }
}

pub fn app_with(store: Arc<dyn QuestionStore>) -> Router {
    router(AppState { db: store })
}

pub fn sample_question() -> Value {
    json!({
        "question": "2+2?",
        "options": ["3", "4"],
        "answer": "4",
        "category": "se-bh",
        "reference": "arith-101",
        "quizLevel": "l1"
    })
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed");
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    send(app, request).await
}
