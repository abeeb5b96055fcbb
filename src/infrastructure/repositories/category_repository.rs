//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{CategoryRepository, CreateCategoryInput, DomainError};
use crate::infrastructure::db::now_timestamp;
use crate::models::category::{ActiveModel, Column, Entity as CategoryEntity};
use crate::models::Category;

pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(CategoryEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create(&self, input: CreateCategoryInput) -> Result<Category, DomainError> {
        let now = now_timestamp();

        let category = ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(category.insert(&self.db).await?)
    }
}
