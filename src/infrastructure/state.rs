//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{
    CategoryRepository, InventoryRepository, ProductRepository, RevenueRepository, SaleRepository,
};
use crate::infrastructure::{
    SeaOrmCategoryRepository, SeaOrmInventoryRepository, SeaOrmProductRepository,
    SeaOrmRevenueRepository, SeaOrmSaleRepository,
};

/// Application state shared across all handlers.
///
/// Built once per process around the pooled connection; handlers never
/// reach for a global.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub product_repo: Arc<dyn ProductRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub inventory_repo: Arc<dyn InventoryRepository>,
    pub sale_repo: Arc<dyn SaleRepository>,
    pub revenue_repo: Arc<dyn RevenueRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            product_repo: Arc::new(SeaOrmProductRepository::new(db.clone())),
            category_repo: Arc::new(SeaOrmCategoryRepository::new(db.clone())),
            inventory_repo: Arc::new(SeaOrmInventoryRepository::new(db.clone())),
            sale_repo: Arc::new(SeaOrmSaleRepository::new(db.clone())),
            revenue_repo: Arc::new(SeaOrmRevenueRepository::new(db.clone())),
            db,
        }
    }
}

impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
