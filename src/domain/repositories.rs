//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{Category, Inventory, Product, Revenue, Sale};

/// Inventory rows strictly below this quantity are reported as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Inclusive bounds on `created_at`.
///
/// Bounds are compared as text against the stored `YYYY-MM-DD HH:MM:SS`
/// timestamps, so a bare date as `end` excludes rows later that same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Filter criteria for sale queries. Unset fields do not constrain the result.
#[derive(Debug, Default, Clone)]
pub struct SaleFilter {
    pub period: Option<DateRange>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Filter criteria for revenue queries. Unset fields do not constrain the result.
#[derive(Debug, Default, Clone)]
pub struct RevenueFilter {
    pub period: Option<DateRange>,
    pub category_id: Option<i32>,
}

/// Input for creating a product
#[derive(Debug, Default, Clone)]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub category_id: Option<i32>,
}

/// Input for creating a category
#[derive(Debug, Default, Clone)]
pub struct CreateCategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Input for creating an inventory row
#[derive(Debug, Default, Clone)]
pub struct CreateInventoryInput {
    pub quantity: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Input for updating an inventory row.
///
/// A field equal to zero counts as not supplied, so `quantity: Some(0)`
/// leaves the stored quantity untouched.
#[derive(Debug, Default, Clone)]
pub struct UpdateInventoryInput {
    pub quantity: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
}

impl UpdateInventoryInput {
    pub fn quantity(&self) -> Option<i32> {
        non_zero(self.quantity)
    }

    pub fn product_id(&self) -> Option<i32> {
        non_zero(self.product_id)
    }

    pub fn category_id(&self) -> Option<i32> {
        non_zero(self.category_id)
    }
}

fn non_zero(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}

/// Input for recording a sale
#[derive(Debug, Default, Clone)]
pub struct CreateSaleInput {
    pub total_price: Option<i32>,
    pub quantity: Option<i32>,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Input for recording revenue
#[derive(Debug, Default, Clone)]
pub struct CreateRevenueInput {
    pub revenue_sales: Option<i32>,
    pub revenue_other_activities: Option<i32>,
    pub revenue: Option<i32>,
    pub sale_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Repository trait for Product entity
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find all products
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Create a new product
    async fn create(&self, input: CreateProductInput) -> Result<Product, DomainError>;
}

/// Repository trait for Category entity
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    async fn create(&self, input: CreateCategoryInput) -> Result<Category, DomainError>;
}

/// Repository trait for Inventory entity
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Find all inventory rows
    async fn find_all(&self) -> Result<Vec<Inventory>, DomainError>;

    /// Find rows whose quantity is strictly below `threshold`
    async fn find_below(&self, threshold: i32) -> Result<Vec<Inventory>, DomainError>;

    /// Create a new inventory row
    async fn create(&self, input: CreateInventoryInput) -> Result<Inventory, DomainError>;

    /// Update an inventory row; `DomainError::NotFound` when the id is unknown
    async fn update(&self, id: i32, input: UpdateInventoryInput) -> Result<Inventory, DomainError>;
}

/// Repository trait for Sale entity
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Find all sales matching the filter
    async fn find(&self, filter: SaleFilter) -> Result<Vec<Sale>, DomainError>;

    /// Record a new sale
    async fn create(&self, input: CreateSaleInput) -> Result<Sale, DomainError>;
}

/// Repository trait for Revenue entity
#[async_trait]
pub trait RevenueRepository: Send + Sync {
    /// Find all revenue rows matching the filter
    async fn find(&self, filter: RevenueFilter) -> Result<Vec<Revenue>, DomainError>;

    /// Record a new revenue row
    async fn create(&self, input: CreateRevenueInput) -> Result<Revenue, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fields_count_as_absent() {
        let input = UpdateInventoryInput {
            quantity: Some(0),
            product_id: Some(0),
            category_id: Some(2),
        };
        assert_eq!(input.quantity(), None);
        assert_eq!(input.product_id(), None);
        assert_eq!(input.category_id(), Some(2));
    }

    #[test]
    fn negative_quantity_is_passed_through() {
        let input = UpdateInventoryInput {
            quantity: Some(-3),
            ..Default::default()
        };
        assert_eq!(input.quantity(), Some(-3));
    }
}
