use super::*;
use crate::state::test_helpers;
use serde_json::json;

#[test]
fn catalog_error_statuses() {
    assert_eq!(catalog_error_to_status(&CatalogError::UnknownKind("x".into())), StatusCode::NOT_FOUND);
    assert_eq!(catalog_error_to_status(&CatalogError::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(catalog_error_to_status(&CatalogError::Invalid("bad".into())), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        catalog_error_to_status(&CatalogError::Database(sqlx::Error::PoolTimedOut)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn list_unknown_kind_is_not_found() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = list(State(state), Path("widgets".into())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "unknown record kind: widgets");
}

#[tokio::test]
async fn list_returns_seeded_ad_types() {
    let state = test_helpers::seeded_app_state();
    let Json(items) = list(State(state), Path("ad-types".into())).await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], json!({ "id": "1", "name": "Sponsored Post", "price": 10000, "currency": "NGN" }));
}

#[tokio::test]
async fn create_returns_created_with_id() {
    let state = test_helpers::test_app_state();
    let (status, Json(record)) = create(
        State(state.clone()),
        Path("ad-types".into()),
        Json(json!({ "name": "Sponsored Post", "price": 10000 })),
    )
    .await
    .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(record["id"].as_str().is_some_and(|id| !id.is_empty()));

    let Json(items) = list(State(state), Path("ad-types".into())).await.unwrap();
    assert_eq!(items, vec![record]);
}

#[tokio::test]
async fn create_invalid_is_unprocessable_with_message() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = create(State(state), Path("categories".into()), Json(json!({ "name": "" })))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "Category name cannot be empty.");
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let state = test_helpers::seeded_app_state();
    let (status, Json(body)) = update(
        State(state),
        Path(("durations".into(), "404".into())),
        Json(json!({ "label": "x", "valueDays": 3 })),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "record not found");
}

#[tokio::test]
async fn delete_locked_answers_success_false() {
    let state = test_helpers::seeded_app_state();
    let Json(resp) = delete(State(state), Path(("categories".into(), "cat1".into()))).await.unwrap();
    assert!(!resp.success);
}

#[tokio::test]
async fn delete_missing_answers_success_true() {
    let state = test_helpers::seeded_app_state();
    let Json(resp) = delete(State(state), Path(("categories".into(), "nope".into()))).await.unwrap();
    assert!(resp.success);
}
