//! Integration tests for the Items domain
//!
//! Repository and service against a migrated database (in-memory SQLite by
//! default):
//! - Generated columns come back from inserts
//! - Partial updates only touch present fields
//! - Hard and soft delete semantics
//! - Pagination, filtering and stats queries

use chrono::Utc;
use domain_items::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn widget() -> CreateItem {
    CreateItem {
        name: "Widget".to_string(),
        description: None,
        price: 9.99,
        quantity: 5,
        is_active: true,
    }
}

fn sample(builder: &TestDataBuilder, index: u64) -> CreateItem {
    CreateItem {
        name: builder.name("item", &index.to_string()),
        description: Some(format!("sample {}", index)),
        price: builder.price(index),
        quantity: builder.quantity(index),
        is_active: true,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_item() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");
    let input = sample(&builder, 0);

    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.description, input.description);
    assert_close(created.price, input.price, "price");
    assert_eq!(created.quantity, input.quantity);
    assert!(created.is_active);
    assert!(created.created_at <= Utc::now());
    assert_eq!(created.updated_at, None);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "item should exist");
    assert_eq!(retrieved, created);
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());

    let first = repo.create(widget()).await.unwrap();
    assert!(repo.delete(first.id).await.unwrap());

    let second = repo.create(widget()).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_missing_id_is_not_an_error() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let existing = repo.create(widget()).await.unwrap();

    assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
    assert_eq!(
        repo.update(9999, UpdateItem {
            price: Some(1.0),
            ..UpdateItem::default()
        })
        .await
        .unwrap(),
        None
    );
    assert!(!repo.delete(9999).await.unwrap());
    assert_eq!(repo.soft_delete(9999).await.unwrap(), None);

    // nothing else changed
    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(repo.get_by_id(existing.id).await.unwrap(), Some(existing));
}

#[tokio::test]
async fn test_empty_update_only_refreshes_updated_at() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let created = repo.create(widget()).await.unwrap();

    let first = repo
        .update(created.id, UpdateItem::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first.name, created.name);
    assert_eq!(first.description, created.description);
    assert_close(first.price, created.price, "price");
    assert_eq!(first.quantity, created.quantity);
    assert_eq!(first.is_active, created.is_active);
    assert_eq!(first.created_at, created.created_at);
    let first_updated = assert_some(first.updated_at, "updated_at after update");
    assert!(first_updated >= created.created_at);

    let second = repo
        .update(created.id, UpdateItem::default())
        .await
        .unwrap()
        .unwrap();
    let second_updated = assert_some(second.updated_at, "updated_at after second update");
    assert!(second_updated >= first_updated);
}

#[tokio::test]
async fn test_partial_update_and_description_clearing() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let created = repo
        .create(CreateItem {
            description: Some("blue".to_string()),
            ..widget()
        })
        .await
        .unwrap();

    let renamed = repo
        .update(created.id, UpdateItem {
            name: Some("Gadget".to_string()),
            ..UpdateItem::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "Gadget");
    assert_eq!(renamed.description.as_deref(), Some("blue"));
    assert_eq!(renamed.quantity, 5);

    let cleared = repo
        .update(created.id, UpdateItem {
            description: Some(None),
            ..UpdateItem::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.name, "Gadget");
    assert_eq!(cleared.description, None);
}

#[tokio::test]
async fn test_soft_delete_keeps_row() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let created = repo.create(widget()).await.unwrap();

    let deactivated = repo.soft_delete(created.id).await.unwrap().unwrap();

    assert!(!deactivated.is_active);
    assert_eq!(deactivated.name, created.name);
    assert_close(deactivated.price, created.price, "price");
    assert_eq!(deactivated.quantity, created.quantity);
    assert!(deactivated.updated_at.is_some());

    let retrieved = assert_some(repo.get_by_id(created.id).await.unwrap(), "soft-deleted row");
    assert!(!retrieved.is_active);
}

#[tokio::test]
async fn test_hard_delete_removes_row() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let created = repo.create(widget()).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_list_pagination_in_insertion_order() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_pagination");

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(repo.create(sample(&builder, i)).await.unwrap().id);
    }

    let all = repo.list(ListParams::default()).await.unwrap();
    assert_eq!(all.iter().map(|i| i.id).collect::<Vec<_>>(), ids);

    let page = repo
        .list(ListParams {
            skip: 1,
            limit: 2,
            active_only: false,
        })
        .await
        .unwrap();
    assert_eq!(page.iter().map(|i| i.id).collect::<Vec<_>>(), ids[1..3]);

    let past_end = repo
        .list(ListParams {
            skip: 10,
            ..ListParams::default()
        })
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_list_active_only_excludes_inactive() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("active_only");

    let kept = repo.create(sample(&builder, 0)).await.unwrap();
    let dropped = repo.create(sample(&builder, 1)).await.unwrap();
    repo.create(CreateItem {
        is_active: false,
        ..sample(&builder, 2)
    })
    .await
    .unwrap();
    repo.soft_delete(dropped.id).await.unwrap();

    let active = repo
        .list(ListParams {
            active_only: true,
            ..ListParams::default()
        })
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, kept.id);
    assert!(active.iter().all(|item| item.is_active));

    let everything = repo.list(ListParams::default()).await.unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn test_stats_counts_by_state() {
    let db = TestDatabase::new().await;
    let repo = SqlItemRepository::new(db.connection());

    assert_eq!(repo.stats().await.unwrap(), ItemStats::default());

    let a = repo.create(widget()).await.unwrap();
    repo.create(widget()).await.unwrap();
    repo.create(widget()).await.unwrap();
    repo.soft_delete(a.id).await.unwrap();

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.inactive, 1);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_widget_lifecycle() {
    let db = TestDatabase::new().await;
    let service = ItemService::new(SqlItemRepository::new(db.connection()));

    let created = service.create_item(widget()).await.unwrap();
    assert_eq!(created.quantity, 5);
    assert!(created.is_active);
    assert!(created.id > 0);
    assert_eq!(created.updated_at, None);

    let repriced = service
        .update_item(created.id, UpdateItem {
            price: Some(12.50),
            ..UpdateItem::default()
        })
        .await
        .unwrap();
    assert_close(repriced.price, 12.50, "price after update");
    assert_eq!(repriced.quantity, 5);
    assert!(repriced.updated_at.is_some());

    let deactivated = service.deactivate_item(created.id).await.unwrap();
    assert!(!deactivated.is_active);

    let stats = service.item_stats().await.unwrap();
    assert!(stats.inactive >= 1);
}

#[tokio::test]
async fn test_invalid_create_persists_nothing() {
    let db = TestDatabase::new().await;
    let service = ItemService::new(SqlItemRepository::new(db.connection()));

    let result = service
        .create_item(CreateItem {
            name: "X".to_string(),
            price: -1.0,
            ..widget()
        })
        .await;

    assert!(matches!(result, Err(ItemError::Validation(_))));
    assert_eq!(service.item_stats().await.unwrap().total, 0);
}

#[tokio::test]
async fn test_service_not_found_errors() {
    let db = TestDatabase::new().await;
    let service = ItemService::new(SqlItemRepository::new(db.connection()));

    assert!(matches!(service.get_item(1).await, Err(ItemError::NotFound(1))));
    assert!(matches!(
        service.update_item(1, UpdateItem::default()).await,
        Err(ItemError::NotFound(1))
    ));
    assert!(matches!(service.delete_item(1).await, Err(ItemError::NotFound(1))));
    assert!(matches!(
        service.deactivate_item(1).await,
        Err(ItemError::NotFound(1))
    ));
}

#[tokio::test]
async fn test_service_delete_then_get_is_not_found() {
    let db = TestDatabase::new().await;
    let service = ItemService::new(SqlItemRepository::new(db.connection()));

    let created = service.create_item(widget()).await.unwrap();
    service.delete_item(created.id).await.unwrap();

    assert!(matches!(
        service.get_item(created.id).await,
        Err(ItemError::NotFound(_))
    ));
}
