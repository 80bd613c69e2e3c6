// Database schema initialization

use color_eyre::Result;
use mongodb::{
    bson::{doc, Document},
    Database, IndexModel,
};

use crate::{
    models::{Category, QuizLevel},
    names,
};

/// `$jsonSchema` validator matching the question model, so documents written
/// by other clients are held to the same shape.
fn question_validator() -> Document {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let levels: Vec<&str> = QuizLevel::ALL.iter().map(|l| l.as_str()).collect();

    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["question", "options", "answer", "category", "reference", "quizLevel"],
            "properties": {
                "question": { "bsonType": "string", "minLength": 1 },
                "options": {
                    "bsonType": "array",
                    "minItems": 1,
                    "items": { "bsonType": "string" }
                },
                "answer": { "bsonType": "string" },
                "hint": { "bsonType": "string" },
                "category": { "enum": categories },
                "reference": { "bsonType": "string" },
                "quizLevel": { "enum": levels }
            }
        }
    }
}

pub async fn ensure_schema(database: &Database) -> Result<()> {
    let existing = database.list_collection_names().await?;

    if !existing.iter().any(|name| name == names::QUESTIONS_COLLECTION) {
        database
            .create_collection(names::QUESTIONS_COLLECTION)
            .validator(question_validator())
            .await?;
        tracing::info!(
            collection = names::QUESTIONS_COLLECTION,
            "created collection with schema validator"
        );
    }

    database
        .collection::<Document>(names::QUESTIONS_COLLECTION)
        .create_index(IndexModel::builder().keys(doc! { "category": 1 }).build())
        .await?;

    Ok(())
}
