use async_trait::async_trait;
use chrono::Utc;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    entity,
    error::ItemResult,
    models::{CreateItem, Item, ItemStats, ListParams, UpdateItem},
    repository::ItemRepository,
};

/// SeaORM-backed item repository. Works against SQLite and PostgreSQL.
#[derive(Clone)]
pub struct SqlItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl SqlItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ItemRepository for SqlItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, params: ListParams) -> ItemResult<Vec<Item>> {
        let mut query = entity::Entity::find();

        if params.active_only {
            query = query.filter(entity::Column::IsActive.eq(true));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            // the drivers bind offsets as i64; no table holds more rows
            .offset(params.skip.min(i64::MAX as u64))
            .limit(params.limit)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateItem) -> ItemResult<Option<Item>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        if let Some(name) = input.name {
            active_model.name = Set(name);
        }
        if let Some(description) = input.description {
            active_model.description = Set(description);
        }
        if let Some(price) = input.price {
            active_model.price = Set(price);
        }
        if let Some(quantity) = input.quantity {
            active_model.quantity = Set(quantity);
        }
        if let Some(is_active) = input.is_active {
            active_model.is_active = Set(is_active);
        }
        active_model.updated_at = Set(Some(Utc::now().into()));

        match self.base.update(active_model).await {
            Ok(model) => {
                tracing::info!(item_id = id, "Updated item");
                Ok(Some(model.into()))
            }
            // deleted between the lookup and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ItemResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn stats(&self) -> ItemResult<ItemStats> {
        let total = self.base.count().await?;
        let active = entity::Entity::find()
            .filter(entity::Column::IsActive.eq(true))
            .count(self.base.db())
            .await?;

        Ok(ItemStats {
            total,
            active,
            inactive: total.saturating_sub(active),
        })
    }
}
