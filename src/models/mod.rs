pub mod category;
pub mod inventory;
pub mod product;
pub mod revenue;
pub mod sale;

pub use category::Category;
pub use inventory::Inventory;
pub use product::Product;
pub use revenue::Revenue;
pub use sale::Sale;
