//! Repository implementations using SeaORM

pub mod category_repository;
pub mod inventory_repository;
pub mod product_repository;
pub mod revenue_repository;
pub mod sale_repository;

pub use category_repository::SeaOrmCategoryRepository;
pub use inventory_repository::SeaOrmInventoryRepository;
pub use product_repository::SeaOrmProductRepository;
pub use revenue_repository::SeaOrmRevenueRepository;
pub use sale_repository::SeaOrmSaleRepository;
