use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::api::extractors::{JsonBody, PageQuery};
use crate::api::handlers::categories::category_map;
use crate::api::pagination::paginate;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresQuestionRepository,
};

/// Request body for creating a question; every field may be omitted
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryRef>,
    pub difficulty: Option<i32>,
}

/// The category column is TEXT, but clients send the category id as a
/// number. Accept either form and store the string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Label(String),
}

impl CategoryRef {
    fn into_string(self) -> String {
        match self {
            CategoryRef::Id(id) => id.to_string(),
            CategoryRef::Label(label) => label,
        }
    }
}

/// Request body for the search route
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

/// List questions, paginated
///
/// GET /questions?page=N
///
/// 404s when the requested page is empty, which covers both an empty
/// question set and a page number past the last page.
pub async fn list_questions(
    State(pool): State<PgPool>,
    query: PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let question_repo = PostgresQuestionRepository::new(pool.clone());
    let selection = question_repo.list_all().await.map_err(ApiError::internal)?;

    let questions = paginate(selection, query.page());
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let category_repo = PostgresCategoryRepository::new(pool);
    let categories = category_repo.list_all().await.map_err(ApiError::internal)?;

    // total_questions reports the page slice, not the full count
    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        categories: category_map(&categories),
    }))
}

/// Delete a question by id
///
/// DELETE /questions/{question_id}
///
/// A missing id is a 404; a store failure during lookup or delete is a
/// 422 with the cause logged but not surfaced.
pub async fn delete_question(
    State(pool): State<PgPool>,
    Path(question_id): Path<i32>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let question_repo = PostgresQuestionRepository::new(pool);

    let question = question_repo
        .find_by_id(question_id)
        .await
        .map_err(ApiError::unprocessable)?;

    if question.is_none() {
        return Err(ApiError::NotFound);
    }

    question_repo
        .delete(question_id)
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
    }))
}

/// Create a question
///
/// POST /questions?page=N
///
/// No required-field validation: an all-null body inserts a row of nulls.
/// The response echoes the page of questions the current page parameter
/// selects, plus the true total count.
pub async fn create_question(
    State(pool): State<PgPool>,
    query: PageQuery,
    JsonBody(request): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let question_repo = PostgresQuestionRepository::new(pool);

    let created = question_repo
        .insert(NewQuestion {
            question: request.question,
            answer: request.answer,
            category: request.category.map(CategoryRef::into_string),
            difficulty: request.difficulty,
        })
        .await
        .map_err(ApiError::unprocessable)?;

    let selection = question_repo
        .list_all()
        .await
        .map_err(ApiError::unprocessable)?;
    let total_questions = selection.len();
    let questions = paginate(selection, query.page());

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions,
        total_questions,
    }))
}

/// Search questions by substring
///
/// POST /questions/search?page=N
///
/// Case-insensitive substring match against the question text. A missing
/// search_term matches everything; zero matches is a 404.
pub async fn search_questions(
    State(pool): State<PgPool>,
    query: PageQuery,
    JsonBody(request): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = request.search_term.unwrap_or_default();

    let question_repo = PostgresQuestionRepository::new(pool);
    let results = question_repo
        .search(&term)
        .await
        .map_err(ApiError::internal)?;

    if results.is_empty() {
        return Err(ApiError::NotFound);
    }

    let questions = paginate(results, query.page());

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

/// List questions in one category, paginated
///
/// GET /categories/{category_id}/questions?page=N
///
/// Matches against the string form of the id, mirroring the TEXT
/// category column. An empty result is still a 200.
pub async fn list_by_category(
    State(pool): State<PgPool>,
    Path(category_id): Path<i32>,
    query: PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let question_repo = PostgresQuestionRepository::new(pool);
    let selection = question_repo
        .list_by_category(&category_id.to_string())
        .await
        .map_err(ApiError::internal)?;

    let questions = paginate(selection, query.page());

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}
