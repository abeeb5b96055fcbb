//! SeaORM implementation of RevenueRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{CreateRevenueInput, DomainError, RevenueFilter, RevenueRepository};
use crate::infrastructure::db::now_timestamp;
use crate::models::revenue::{ActiveModel, Column, Entity as RevenueEntity};
use crate::models::Revenue;

pub struct SeaOrmRevenueRepository {
    db: DatabaseConnection,
}

impl SeaOrmRevenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevenueRepository for SeaOrmRevenueRepository {
    async fn find(&self, filter: RevenueFilter) -> Result<Vec<Revenue>, DomainError> {
        let mut condition = Condition::all();

        if let Some(period) = filter.period {
            condition = condition
                .add(Column::CreatedAt.gte(period.start))
                .add(Column::CreatedAt.lte(period.end));
        }

        if let Some(category_id) = filter.category_id {
            condition = condition.add(Column::CategoryId.eq(category_id));
        }

        Ok(RevenueEntity::find()
            .filter(condition)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn create(&self, input: CreateRevenueInput) -> Result<Revenue, DomainError> {
        let now = now_timestamp();

        let revenue = ActiveModel {
            revenue_sales: Set(input.revenue_sales),
            revenue_other_activities: Set(input.revenue_other_activities),
            revenue: Set(input.revenue),
            sale_id: Set(input.sale_id),
            category_id: Set(input.category_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(revenue.insert(&self.db).await?)
    }
}
