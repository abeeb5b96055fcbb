use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// Layout of every stored `created_at` / `updated_at` value.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) UNIQUE,
            description VARCHAR(500),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) UNIQUE,
            description VARCHAR(500),
            price INTEGER,
            category_id INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (category_id) REFERENCES category(id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS inventory (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            quantity INTEGER NOT NULL DEFAULT 0,
            product_id INTEGER,
            category_id INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (product_id) REFERENCES product(id),
            FOREIGN KEY (category_id) REFERENCES category(id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sale (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            total_price INTEGER,
            quantity INTEGER NOT NULL DEFAULT 0,
            product_id INTEGER,
            category_id INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (product_id) REFERENCES product(id),
            FOREIGN KEY (category_id) REFERENCES category(id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            "revenueSales" INTEGER,
            "revenueOtherActivities" INTEGER,
            revenue INTEGER,
            sale_id INTEGER,
            category_id INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (sale_id) REFERENCES sale(id),
            FOREIGN KEY (category_id) REFERENCES category(id)
        )
        "#,
        // Filter columns
        "CREATE INDEX IF NOT EXISTS idx_product_category_id ON product(category_id)",
        "CREATE INDEX IF NOT EXISTS idx_inventory_quantity ON inventory(quantity)",
        "CREATE INDEX IF NOT EXISTS idx_sale_created_at ON sale(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_sale_product_id ON sale(product_id)",
        "CREATE INDEX IF NOT EXISTS idx_sale_category_id ON sale(category_id)",
        "CREATE INDEX IF NOT EXISTS idx_revenue_created_at ON revenue(created_at)",
        "CREATE INDEX IF NOT EXISTS idx_revenue_category_id ON revenue(category_id)",
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_owned(),
        ))
        .await?;
    }

    tracing::debug!("Schema ready ({} statements)", statements.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = init_db("sqlite::memory:").await.expect("Failed to init DB");
        run_migrations(&db).await.expect("Second run should be a no-op");
    }

    #[test]
    fn timestamps_sort_as_text() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), "2023-01-01 00:00:00".len());
        assert!(ts.as_str() > "2023-01-01");
    }
}
