use serde::Serialize;
use sqlx::FromRow;

/// A question category. Read-only in this API: no route creates, updates,
/// or deletes categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    /// The column is named `type`, which is reserved in Rust.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}
