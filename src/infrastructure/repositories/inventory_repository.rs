//! SeaORM implementation of InventoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    CreateInventoryInput, DomainError, InventoryRepository, UpdateInventoryInput,
};
use crate::infrastructure::db::now_timestamp;
use crate::models::inventory::{ActiveModel, Column, Entity as InventoryEntity};
use crate::models::Inventory;

/// SeaORM-based implementation of InventoryRepository
pub struct SeaOrmInventoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepository for SeaOrmInventoryRepository {
    async fn find_all(&self) -> Result<Vec<Inventory>, DomainError> {
        Ok(InventoryEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn find_below(&self, threshold: i32) -> Result<Vec<Inventory>, DomainError> {
        Ok(InventoryEntity::find()
            .filter(Column::Quantity.lt(threshold))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create(&self, input: CreateInventoryInput) -> Result<Inventory, DomainError> {
        let now = now_timestamp();

        let inventory = ActiveModel {
            quantity: Set(input.quantity.unwrap_or(0)),
            product_id: Set(input.product_id),
            category_id: Set(input.category_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(inventory.insert(&self.db).await?)
    }

    async fn update(&self, id: i32, input: UpdateInventoryInput) -> Result<Inventory, DomainError> {
        let existing = InventoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        if input.quantity().is_none()
            && input.product_id().is_none()
            && input.category_id().is_none()
        {
            // Nothing to write, the row keeps its updated_at.
            return Ok(existing);
        }

        let mut active: ActiveModel = existing.into();

        if let Some(quantity) = input.quantity() {
            active.quantity = Set(quantity);
        }
        if let Some(product_id) = input.product_id() {
            active.product_id = Set(Some(product_id));
        }
        if let Some(category_id) = input.category_id() {
            active.category_id = Set(Some(category_id));
        }
        active.updated_at = Set(now_timestamp());

        Ok(active.update(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::init_db;

    async fn repo_with(quantities: &[i32]) -> SeaOrmInventoryRepository {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");
        let repo = SeaOrmInventoryRepository::new(db);
        for q in quantities {
            repo.create(CreateInventoryInput {
                quantity: Some(*q),
                ..Default::default()
            })
            .await
            .expect("Failed to create inventory");
        }
        repo
    }

    #[tokio::test]
    async fn quantity_defaults_to_zero() {
        let repo = repo_with(&[]).await;
        let row = repo
            .create(CreateInventoryInput::default())
            .await
            .expect("Failed to create inventory");
        assert_eq!(row.quantity, 0);
        assert_eq!(row.product_id, None);
    }

    #[tokio::test]
    async fn find_below_is_strict() {
        let repo = repo_with(&[0, 4, 5, 6, -1]).await;
        let low: Vec<i32> = repo
            .find_below(5)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.quantity)
            .collect();
        assert_eq!(low, vec![0, 4, -1]);
    }

    #[tokio::test]
    async fn update_skips_zero_fields() {
        let repo = repo_with(&[7]).await;
        let updated = repo
            .update(
                1,
                UpdateInventoryInput {
                    quantity: Some(0),
                    product_id: None,
                    category_id: Some(0),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.category_id, None);
    }

    #[tokio::test]
    async fn noop_update_keeps_updated_at() {
        let repo = repo_with(&[]).await;
        let stamp = "2020-01-01 00:00:00".to_string();
        ActiveModel {
            quantity: Set(7),
            created_at: Set(stamp.clone()),
            updated_at: Set(stamp.clone()),
            ..Default::default()
        }
        .insert(&repo.db)
        .await
        .expect("Failed to create inventory");

        let returned = repo
            .update(
                1,
                UpdateInventoryInput {
                    quantity: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(returned.updated_at, stamp);
        assert_eq!(repo.find_all().await.unwrap()[0].updated_at, stamp);

        let changed = repo
            .update(
                1,
                UpdateInventoryInput {
                    quantity: Some(3),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(changed.quantity, 3);
        assert_ne!(changed.updated_at, stamp);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = repo_with(&[7]).await;
        let err = repo
            .update(
                42,
                UpdateInventoryInput {
                    quantity: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound));
        assert_eq!(repo.find_all().await.unwrap()[0].quantity, 7);
    }
}
