use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::UserResult,
    models::{CreateUser, User},
    repository::UserRepository,
};

/// MySQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct MysqlUserRepository {
    db: DatabaseConnection,
}

impl MysqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> UserResult<u64> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        tracing::info!(user_id = id, rows = result.rows_affected, "Deleted user");
        Ok(result.rows_affected)
    }
}
