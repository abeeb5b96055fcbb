use crate::infrastructure::db::now_timestamp;
use crate::models::{category, inventory, product, revenue, sale};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

/// Insert a small demo catalogue. Safe to run on every start.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = now_timestamp();

    // 1. Categories
    let categories = [
        ("Beverages", "Soft drinks, juices and water"),
        ("Snacks", "Chips, biscuits and sweets"),
    ];

    for (name, description) in categories {
        let row = category::ActiveModel {
            name: Set(Some(name.to_owned())),
            description: Set(Some(description.to_owned())),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        category::Entity::insert(row)
            .on_conflict(OnConflict::column(category::Column::Name).do_nothing().to_owned())
            .exec_without_returning(db)
            .await?;
    }

    let beverages = category_id(db, "Beverages").await?;
    let snacks = category_id(db, "Snacks").await?;

    // 2. Products
    let products = [
        ("Cola 330ml", "Canned cola", 150, beverages),
        ("Mineral Water 1L", "Still water", 90, beverages),
        ("Salted Chips", "Potato chips, 150g", 220, snacks),
    ];

    for (name, description, price, category) in products {
        let row = product::ActiveModel {
            name: Set(Some(name.to_owned())),
            description: Set(Some(description.to_owned())),
            price: Set(Some(price)),
            category_id: Set(Some(category)),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        product::Entity::insert(row)
            .on_conflict(OnConflict::column(product::Column::Name).do_nothing().to_owned())
            .exec_without_returning(db)
            .await?;
    }

    // 3. Stock, sales and revenue only go into empty tables
    if inventory::Entity::find().count(db).await? > 0 {
        tracing::debug!("Inventory already present, skipping stock/sales seed");
        return Ok(());
    }

    let seeded = product::Entity::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?;

    // Last product lands below the low-stock threshold
    let stock_levels = [40, 12, 3];

    for (item, quantity) in seeded.iter().zip(stock_levels) {
        inventory::ActiveModel {
            quantity: Set(quantity),
            product_id: Set(Some(item.id)),
            category_id: Set(item.category_id),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let units = 2;
        let total = item.price.unwrap_or(0) * units;
        let recorded = sale::ActiveModel {
            total_price: Set(Some(total)),
            quantity: Set(units),
            product_id: Set(Some(item.id)),
            category_id: Set(item.category_id),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let other = 50;
        revenue::ActiveModel {
            revenue_sales: Set(Some(total)),
            revenue_other_activities: Set(Some(other)),
            revenue: Set(Some(total + other)),
            sale_id: Set(Some(recorded.id)),
            category_id: Set(item.category_id),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn category_id(db: &DatabaseConnection, name: &str) -> Result<i32, DbErr> {
    category::Entity::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await?
        .map(|c| c.id)
        .ok_or_else(|| DbErr::RecordNotFound(format!("category {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::init_db;

    #[tokio::test]
    async fn seeding_twice_does_not_duplicate() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");

        seed_demo_data(&db).await.expect("first seed");
        seed_demo_data(&db).await.expect("second seed");

        assert_eq!(category::Entity::find().count(&db).await.unwrap(), 2);
        assert_eq!(product::Entity::find().count(&db).await.unwrap(), 3);
        assert_eq!(inventory::Entity::find().count(&db).await.unwrap(), 3);
        assert_eq!(sale::Entity::find().count(&db).await.unwrap(), 3);
        assert_eq!(revenue::Entity::find().count(&db).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn seeded_revenue_adds_up() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");
        seed_demo_data(&db).await.expect("seed");

        for row in revenue::Entity::find().all(&db).await.unwrap() {
            assert_eq!(
                row.revenue,
                Some(row.revenue_sales.unwrap() + row.revenue_other_activities.unwrap())
            );
        }
    }
}
