//! Item Service - Business logic layer

use observability::ItemMetrics;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemStats, ListParams, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Validates payloads before they reach the repository and turns a missing
/// row into [`ItemError::NotFound`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let result: ItemResult<Item> = async {
            input.validate()?;
            self.repository.create(input).await
        }
        .await;
        record("create", result)
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        let result = self
            .repository
            .get_by_id(id)
            .await
            .and_then(|item| item.ok_or(ItemError::NotFound(id.into())));
        record("get", result)
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, params: ListParams) -> ItemResult<Vec<Item>> {
        let result: ItemResult<Vec<Item>> = async {
            params.validate()?;
            self.repository.list(params).await
        }
        .await;
        record("list", result)
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i32, input: UpdateItem) -> ItemResult<Item> {
        let result: ItemResult<Item> = async {
            input.validate()?;
            self.repository
                .update(id, input)
                .await?
                .ok_or(ItemError::NotFound(id.into()))
        }
        .await;
        record("update", result)
    }

    /// Permanently remove an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<()> {
        let result = match self.repository.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ItemError::NotFound(id.into())),
            Err(e) => Err(e),
        };
        record("delete", result)
    }

    /// Soft delete: the row stays, with `is_active = false`
    #[instrument(skip(self))]
    pub async fn deactivate_item(&self, id: i32) -> ItemResult<Item> {
        let result = self
            .repository
            .soft_delete(id)
            .await
            .and_then(|item| item.ok_or(ItemError::NotFound(id.into())));
        record("deactivate", result)
    }

    #[instrument(skip(self))]
    pub async fn item_stats(&self) -> ItemResult<ItemStats> {
        let result = self.repository.stats().await;
        if let Ok(stats) = &result {
            ItemMetrics::set_totals(stats.active, stats.inactive);
        }
        record("stats", result)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn record<T>(operation: &'static str, result: ItemResult<T>) -> ItemResult<T> {
    match &result {
        Ok(_) => ItemMetrics::record_operation(operation, "success"),
        Err(e) => ItemMetrics::record_operation(operation, e.outcome()),
    }
    result
}
