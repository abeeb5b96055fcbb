//! SeaORM implementation of SaleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{CreateSaleInput, DomainError, SaleFilter, SaleRepository};
use crate::infrastructure::db::now_timestamp;
use crate::models::sale::{ActiveModel, Column, Entity as SaleEntity};
use crate::models::Sale;

/// SeaORM-based implementation of SaleRepository
pub struct SeaOrmSaleRepository {
    db: DatabaseConnection,
}

impl SeaOrmSaleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn condition(filter: SaleFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(period) = filter.period {
        condition = condition
            .add(Column::CreatedAt.gte(period.start))
            .add(Column::CreatedAt.lte(period.end));
    }

    if let Some(product_id) = filter.product_id {
        condition = condition.add(Column::ProductId.eq(product_id));
    }

    if let Some(category_id) = filter.category_id {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }

    condition
}

#[async_trait]
impl SaleRepository for SeaOrmSaleRepository {
    async fn find(&self, filter: SaleFilter) -> Result<Vec<Sale>, DomainError> {
        tracing::debug!(?filter, "Querying sales");

        Ok(SaleEntity::find()
            .filter(condition(filter))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create(&self, input: CreateSaleInput) -> Result<Sale, DomainError> {
        let now = now_timestamp();

        // total_price is stored as given, never derived from the product price.
        let sale = ActiveModel {
            total_price: Set(input.total_price),
            quantity: Set(input.quantity.unwrap_or(0)),
            product_id: Set(input.product_id),
            category_id: Set(input.category_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(sale.insert(&self.db).await?)
    }
}
