use axum::{extract::State, Json};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::api::extractors::JsonBody;
use crate::domain::question::Question;
use crate::domain::repositories::QuestionRepository;
use crate::infrastructure::repositories::PostgresQuestionRepository;

/// Request body for the quiz route
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Category selector; id 0 means "any category". Clients also send a
/// `type` label, which is ignored here.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// Null when every candidate has already been seen (quiz complete)
    pub question: Option<Question>,
}

/// Uniform random choice over the candidate set. None when no candidates
/// remain.
fn pick_random(candidates: &[Question]) -> Option<&Question> {
    candidates.choose(&mut rand::thread_rng())
}

/// Pick the next unseen quiz question
///
/// POST /quizzes
///
/// Candidates are questions outside `previous_questions`, restricted to
/// the requested category unless its id is 0. An exhausted candidate set
/// answers with a null question rather than an error.
pub async fn next_question(
    State(pool): State<PgPool>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = (request.quiz_category.id != 0).then(|| request.quiz_category.id.to_string());

    let question_repo = PostgresQuestionRepository::new(pool);
    let candidates = question_repo
        .list_unseen(&request.previous_questions, category.as_deref())
        .await
        .map_err(ApiError::internal)?;

    let question = pick_random(&candidates).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
