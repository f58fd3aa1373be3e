use async_trait::async_trait;

use super::RepoError;
use crate::domain::question::{NewQuestion, Question};

/// Repository trait for Question entities
///
/// Defines the contract for persisting and querying questions.
/// Implementations handle database-specific details.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// List every question, ordered by id
    async fn list_all(&self) -> Result<Vec<Question>, RepoError>;

    /// Find a question by its id
    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, RepoError>;

    /// Insert a new question, returning the stored row with its assigned id
    async fn insert(&self, new: NewQuestion) -> Result<Question, RepoError>;

    /// Delete a question by id
    async fn delete(&self, id: i32) -> Result<(), RepoError>;

    /// Case-insensitive substring search against the question text
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepoError>;

    /// List questions whose category column equals the given string
    async fn list_by_category(&self, category: &str) -> Result<Vec<Question>, RepoError>;

    /// List questions not in `previous`, optionally restricted to a category
    async fn list_unseen(
        &self,
        previous: &[i32],
        category: Option<&str>,
    ) -> Result<Vec<Question>, RepoError>;
}
