//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{CreateProductInput, DomainError, ProductRepository};
use crate::infrastructure::db::now_timestamp;
use crate::models::product::{ActiveModel, Column, Entity as ProductEntity};
use crate::models::Product;

/// SeaORM-based implementation of ProductRepository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(ProductEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create(&self, input: CreateProductInput) -> Result<Product, DomainError> {
        let now = now_timestamp();

        // Duplicate names are left to the UNIQUE constraint.
        let product = ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            category_id: Set(input.category_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(product.insert(&self.db).await?)
    }
}
