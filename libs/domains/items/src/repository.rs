use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemStats, ListParams, UpdateItem};

/// Repository trait for Item persistence
///
/// Lookups by id report a missing row as `Ok(None)` / `Ok(false)`; `Err` is
/// reserved for backend failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a validated item and return the stored row
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Items ordered by id, paginated by `skip`/`limit`
    async fn list(&self, params: ListParams) -> ItemResult<Vec<Item>>;

    /// Apply the present fields and refresh `updated_at`
    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// Hard delete. `true` if a row was removed.
    async fn delete(&self, id: i32) -> ItemResult<bool>;

    /// Mark an item inactive, keeping the row
    async fn soft_delete(&self, id: i32) -> ItemResult<Option<Item>> {
        self.update(id, UpdateItem::deactivate()).await
    }

    async fn stats(&self) -> ItemResult<ItemStats>;
}
