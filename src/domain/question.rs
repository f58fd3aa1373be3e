use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A trivia question as stored and served.
///
/// Every non-id field is nullable: the create route accepts partial (even
/// empty) bodies and inserts whatever was supplied. The `category` field is
/// a string column holding the stringified id of a `Category` row; no
/// foreign key enforces the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}

/// Field values for inserting a new question. The id is assigned by the
/// store.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}
