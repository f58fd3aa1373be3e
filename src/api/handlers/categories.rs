use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::domain::category::Category;
use crate::domain::repositories::CategoryRepository;
use crate::infrastructure::repositories::PostgresCategoryRepository;

/// Response listing every category
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<String, String>,
}

/// Shapes categories as an id-to-label JSON object. Object keys are
/// strings, so ids are stringified.
pub fn category_map(categories: &[Category]) -> BTreeMap<String, String> {
    categories
        .iter()
        .map(|category| (category.id.to_string(), category.kind.clone()))
        .collect()
}

/// List all categories
///
/// GET /categories
pub async fn list_categories(
    State(pool): State<PgPool>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let category_repo = PostgresCategoryRepository::new(pool);
    let categories = category_repo.list_all().await.map_err(ApiError::internal)?;

    // 200 with an empty mapping when no categories exist, never a 404
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}
