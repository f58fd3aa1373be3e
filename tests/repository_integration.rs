//! Integration tests for the repository layer
//!
//! These verify that the PostgreSQL repositories implement the domain
//! contracts: CRUD, the string-typed category filter, search, and the
//! unseen-question query. All need a prepared database:
//!
//!   DATABASE_URL=postgres://... cargo test -- --ignored

use sqlx::PgPool;
use trivia_api::domain::question::NewQuestion;
use trivia_api::domain::repositories::{
    CategoryRepository, QuestionRepository, RepoError,
};
use trivia_api::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresQuestionRepository,
};

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

fn new_question(text: &str, category: Option<&str>) -> NewQuestion {
    NewQuestion {
        question: Some(text.to_string()),
        answer: Some("answer".to_string()),
        category: category.map(str::to_string),
        difficulty: Some(1),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn insert_find_delete_roundtrip() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let created = repo
        .insert(new_question("Repo roundtrip?", None))
        .await
        .expect("insert failed");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("find failed")
        .expect("question missing");
    assert_eq!(found, created);

    repo.delete(created.id).await.expect("delete failed");

    let gone = repo.find_by_id(created.id).await.expect("find failed");
    assert!(gone.is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_missing_id_reports_not_found() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let result = repo.delete(-1).await;

    assert!(matches!(result, Err(RepoError::NotFound { .. })));
}

#[tokio::test]
#[ignore = "requires database"]
async fn insert_accepts_all_null_fields() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let created = repo
        .insert(NewQuestion::default())
        .await
        .expect("all-null insert failed");

    assert!(created.question.is_none());
    assert!(created.answer.is_none());
    assert!(created.category.is_none());
    assert!(created.difficulty.is_none());

    repo.delete(created.id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn search_matches_case_insensitively() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let created = repo
        .insert(new_question("Quixotic repo search?", None))
        .await
        .expect("insert failed");

    let hits = repo.search("qUIXOTIC").await.expect("search failed");
    assert!(hits.iter().any(|q| q.id == created.id));

    let misses = repo
        .search("zzz-repo-no-match-zzz")
        .await
        .expect("search failed");
    assert!(misses.is_empty());

    repo.delete(created.id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_by_category_compares_the_string_column() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let inside = repo
        .insert(new_question("Inside the category?", Some("90001")))
        .await
        .expect("insert failed");
    let outside = repo
        .insert(new_question("Outside the category?", Some("90002")))
        .await
        .expect("insert failed");

    let listed = repo.list_by_category("90001").await.expect("list failed");
    assert!(listed.iter().any(|q| q.id == inside.id));
    assert!(listed.iter().all(|q| q.category.as_deref() == Some("90001")));

    repo.delete(inside.id).await.expect("cleanup failed");
    repo.delete(outside.id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_unseen_excludes_previous_and_filters_category() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let seen = repo
        .insert(new_question("Seen?", Some("90003")))
        .await
        .expect("insert failed");
    let unseen = repo
        .insert(new_question("Unseen?", Some("90003")))
        .await
        .expect("insert failed");
    let elsewhere = repo
        .insert(new_question("Elsewhere?", Some("90004")))
        .await
        .expect("insert failed");

    let candidates = repo
        .list_unseen(&[seen.id], Some("90003"))
        .await
        .expect("list_unseen failed");

    let ids: Vec<i32> = candidates.iter().map(|q| q.id).collect();
    assert!(ids.contains(&unseen.id));
    assert!(!ids.contains(&seen.id));
    assert!(!ids.contains(&elsewhere.id));

    // No category restriction: only the seen id is excluded
    let all_candidates = repo
        .list_unseen(&[seen.id], None)
        .await
        .expect("list_unseen failed");
    let all_ids: Vec<i32> = all_candidates.iter().map(|q| q.id).collect();
    assert!(all_ids.contains(&unseen.id));
    assert!(all_ids.contains(&elsewhere.id));
    assert!(!all_ids.contains(&seen.id));

    for id in [seen.id, unseen.id, elsewhere.id] {
        repo.delete(id).await.expect("cleanup failed");
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_all_is_ordered_by_id() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool);

    let first = repo
        .insert(new_question("Ordered first?", None))
        .await
        .expect("insert failed");
    let second = repo
        .insert(new_question("Ordered second?", None))
        .await
        .expect("insert failed");

    let all = repo.list_all().await.expect("list_all failed");
    let ids: Vec<i32> = all.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    repo.delete(first.id).await.expect("cleanup failed");
    repo.delete(second.id).await.expect("cleanup failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn categories_list_all_returns_seeded_rows() {
    let pool = setup_test_db().await;

    let id: i32 =
        sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
            .bind("Repo Category")
            .fetch_one(&pool)
            .await
            .expect("seed failed");

    let repo = PostgresCategoryRepository::new(pool.clone());
    let categories = repo.list_all().await.expect("list failed");

    assert!(categories
        .iter()
        .any(|c| c.id == id && c.kind == "Repo Category"));

    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .expect("cleanup failed");
}
