use std::collections::HashMap;

use async_trait::async_trait;
use color_eyre::{eyre::OptionExt, Result};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson};

use super::{Db, QuestionStore};
use crate::models::{Category, NewQuestion, Question};

/// Pair each inserted question with the id the driver reported for its
/// position in the batch.
fn attach_ids(
    questions: Vec<NewQuestion>,
    mut inserted: HashMap<usize, Bson>,
) -> Result<Vec<Question>> {
    questions
        .into_iter()
        .enumerate()
        .map(|(idx, question)| -> Result<Question> {
            let id = inserted
                .remove(&idx)
                .and_then(|id| id.as_object_id())
                .ok_or_eyre("database did not report an id for an inserted question")?;
            Ok(question.persisted(id))
        })
        .collect()
}

#[async_trait]
impl QuestionStore for Db {
    async fn insert_many(&self, questions: Vec<NewQuestion>) -> Result<Vec<Question>> {
        let inserted = self.questions.insert_many(&questions).await?.inserted_ids;
        let stored = attach_ids(questions, inserted)?;

        tracing::info!(count = stored.len(), "questions inserted");
        Ok(stored)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Question>> {
        let questions = self
            .questions
            .clone_with_type::<Question>()
            .find(doc! { "category": category.as_str() })
            .projection(doc! {
                "_id": 1,
                "question": 1,
                "options": 1,
                "answer": 1,
                "hint": 1,
                "category": 1,
                "reference": 1,
                "quizLevel": 1,
            })
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        tracing::debug!(%category, count = questions.len(), "questions fetched");
        Ok(questions)
    }
}
