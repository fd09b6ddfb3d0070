use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{CreateItem, Item};

/// Sea-ORM entity for the `items` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub quantity: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag for the item routes
    pub const TAG: &'static str = "Items";
    /// Mount point of the item routes, relative to `/api`
    pub const URL: &'static str = "/items";
}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            quantity: model.quantity,
            is_active: model.is_active,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}

// `created_at` is written here rather than left to the column default so
// every backend stores it with an explicit offset.
impl From<CreateItem> for ActiveModel {
    fn from(input: CreateItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            quantity: Set(input.quantity),
            is_active: Set(input.is_active),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item_leaves_id_to_the_store() {
        let model: ActiveModel = CreateItem {
            name: "Widget".to_string(),
            description: None,
            price: 9.99,
            quantity: 5,
            is_active: true,
        }
        .into();

        assert!(matches!(model.id, NotSet));
        assert_eq!(model.name, Set("Widget".to_string()));
        assert_eq!(model.updated_at, Set(None));
    }

    #[test]
    fn test_model_into_item() {
        let now = Utc::now();
        let item: Item = Model {
            id: 7,
            name: "Gadget".to_string(),
            description: Some("blue".to_string()),
            price: 3.5,
            quantity: 2,
            is_active: false,
            created_at: now.into(),
            updated_at: None,
        }
        .into();

        assert_eq!(item.id, 7);
        assert_eq!(item.description.as_deref(), Some("blue"));
        assert!(!item.is_active);
        assert_eq!(item.created_at, now);
        assert_eq!(item.updated_at, None);
    }
}
