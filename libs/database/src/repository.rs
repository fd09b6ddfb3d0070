//! Generic single-entity CRUD over SeaORM.
//!
//! Domain repositories embed a `BaseRepository<Entity>` for the primitive
//! operations and drop to `db()` for anything query-specific.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait,
};
use std::marker::PhantomData;

pub struct BaseRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync + 'static,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert and return the stored row, including generated columns.
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Write the `Set` columns of `model`. Fails with `RecordNotUpdated` if
    /// the primary key matches no row.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_by_id<K>(&self, id: K) -> Result<u64, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        E::find().count(&self.db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{DatabaseConfig, connect_from_config};
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::ConnectionTrait;

    mod note {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "notes")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub body: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    async fn repo() -> BaseRepository<note::Entity> {
        let config = DatabaseConfig::new("sqlite::memory:").with_pool_size(1, 1);
        let db = connect_from_config(config).await.unwrap();
        db.execute_unprepared(
            "CREATE TABLE notes (id INTEGER PRIMARY KEY AUTOINCREMENT, body TEXT NOT NULL)",
        )
        .await
        .unwrap();
        BaseRepository::new(db)
    }

    fn new_note(body: &str) -> note::ActiveModel {
        note::ActiveModel {
            id: NotSet,
            body: Set(body.to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_find_returns_row() {
        let repo = repo().await;

        let inserted = repo.insert(new_note("first")).await.unwrap();
        assert!(inserted.id > 0);

        let found = repo.find_by_id(inserted.id).await.unwrap();
        assert_eq!(found, Some(inserted));
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = repo().await;
        assert_eq!(repo.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_changes_set_columns() {
        let repo = repo().await;
        let inserted = repo.insert(new_note("draft")).await.unwrap();

        let updated = repo
            .update(note::ActiveModel {
                id: Set(inserted.id),
                body: Set("final".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, inserted.id);
        assert_eq!(updated.body, "final");
    }

    #[tokio::test]
    async fn test_delete_and_count() {
        let repo = repo().await;
        let a = repo.insert(new_note("a")).await.unwrap();
        repo.insert(new_note("b")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        assert_eq!(repo.delete_by_id(a.id).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(a.id).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
