use std::{fmt, str::FromStr};

use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "se-bh")]
    SeBh,
    #[serde(rename = "se-ah")]
    SeAh,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::SeBh, Category::SeAh];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::SeBh => "se-bh",
            Category::SeAh => "se-ah",
        }
    }
}

/// Difficulty tier: l1 is easy, l2 intermediate, l3 hard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizLevel {
    #[serde(rename = "l1")]
    L1,
    #[serde(rename = "l2")]
    L2,
    #[serde(rename = "l3")]
    L3,
}

impl QuizLevel {
    pub const ALL: [QuizLevel; 3] = [QuizLevel::L1, QuizLevel::L2, QuizLevel::L3];

    pub fn as_str(self) -> &'static str {
        match self {
            QuizLevel::L1 => "l1",
            QuizLevel::L2 => "l2",
            QuizLevel::L3 => "l3",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownVariant;

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(UnknownVariant)
    }
}

impl FromStr for QuizLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuizLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or(UnknownVariant)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QuizLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question that passed validation but has not been stored yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub category: Category,
    pub reference: String,
    pub quiz_level: QuizLevel,
}

impl NewQuestion {
    pub fn persisted(self, id: ObjectId) -> Question {
        Question {
            id,
            question: self.question,
            options: self.options,
            answer: self.answer,
            hint: self.hint,
            category: self.category,
            reference: self.reference,
            quiz_level: self.quiz_level,
        }
    }
}

/// A stored question. The id is read from BSON as an ObjectId and written
/// to JSON as its hex string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub category: Category,
    pub reference: String,
    pub quiz_level: QuizLevel,
}
