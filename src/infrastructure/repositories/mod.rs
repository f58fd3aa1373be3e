// PostgreSQL repository implementations

pub mod postgres_category_repository;
pub mod postgres_question_repository;

pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_question_repository::PostgresQuestionRepository;
