// Repository contracts for the trivia store

pub mod category_repository;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use question_repository::QuestionRepository;

use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
