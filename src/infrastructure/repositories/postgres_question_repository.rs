use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::{QuestionRepository, RepoError};

/// PostgreSQL implementation of QuestionRepository
///
/// Queries are runtime-checked (`query_as` over `FromRow`) so the crate
/// builds without a reachable database.
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    /// Creates a new PostgresQuestionRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>, RepoError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, RepoError> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert(&self, new: NewQuestion) -> Result<Question, RepoError> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepoError> {
        // Wildcard on both sides; ILIKE makes the match case-insensitive.
        // An empty term matches every row.
        let pattern = format!("%{}%", term);

        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Question>, RepoError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_unseen(
        &self,
        previous: &[i32],
        category: Option<&str>,
    ) -> Result<Vec<Question>, RepoError> {
        // `<> ALL` over an empty array is true, so no seen ids means
        // every question qualifies.
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE id <> ALL($1) AND category = $2
                    ORDER BY id
                    "#,
                )
                .bind(previous)
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE id <> ALL($1)
                    ORDER BY id
                    "#,
                )
                .bind(previous)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }
}
