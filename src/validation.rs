use serde_json::{Map, Value};

use crate::models::{Category, NewQuestion, QuizLevel};

/// Fields every question in a bulk insert must carry with a truthy value.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "question",
    "options",
    "answer",
    "category",
    "reference",
    "quizLevel",
];

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Request body must be a non-empty array of questions.")]
    InvalidPayload,
    #[error("Each question must include question, options, answer, category, reference, and quizLevel fields.")]
    MissingField,
    #[error("Invalid {field}. Must be {expected}.")]
    InvalidEnum {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Invalid question at index {index}: {detail}")]
    MalformedQuestion { index: usize, detail: String },
}

/// Check a bulk-insert payload and turn it into typed questions.
///
/// The first failing element rejects the whole batch, so nothing reaches
/// storage unless every element passes.
pub fn validate_questions(payload: Value) -> Result<Vec<NewQuestion>, ValidationError> {
    let items = match payload {
        Value::Array(items) if !items.is_empty() => items,
        _ => return Err(ValidationError::InvalidPayload),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_question(index, item))
        .collect()
}

fn validate_question(index: usize, item: Value) -> Result<NewQuestion, ValidationError> {
    let empty = Map::new();
    let fields = item.as_object().unwrap_or(&empty);

    let all_present = REQUIRED_FIELDS
        .iter()
        .all(|name| fields.get(*name).is_some_and(is_truthy));
    let has_options = fields
        .get("options")
        .and_then(Value::as_array)
        .map_or(true, |options| !options.is_empty());
    if !all_present || !has_options {
        return Err(ValidationError::MissingField);
    }

    let level_ok = fields
        .get("quizLevel")
        .and_then(Value::as_str)
        .is_some_and(|level| level.parse::<QuizLevel>().is_ok());
    if !level_ok {
        return Err(ValidationError::InvalidEnum {
            field: "quizLevel",
            expected: "'l1', 'l2', or 'l3'",
        });
    }

    let category_ok = fields
        .get("category")
        .and_then(Value::as_str)
        .is_some_and(|category| category.parse::<Category>().is_ok());
    if !category_ok {
        return Err(ValidationError::InvalidEnum {
            field: "category",
            expected: "'se-bh' or 'se-ah'",
        });
    }

    serde_json::from_value(item).map_err(|e| ValidationError::MalformedQuestion {
        index,
        detail: e.to_string(),
    })
}

/// JavaScript truthiness: null, false, 0 and "" are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
