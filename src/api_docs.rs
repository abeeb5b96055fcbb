use crate::api;
use crate::models::{Category, Inventory, Product, Revenue, Sale};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::product::create_product,
        api::product::list_products,
        api::category::create_category,
        api::category::list_categories,
        api::sales::create_sale,
        api::sales::get_sales_range,
        api::sales::get_sales_product,
        api::sales::get_sales_category,
        api::sales::get_sales,
        api::revenue::create_revenue,
        api::revenue::get_revenue_period,
        api::revenue::get_revenue_category,
        api::revenue::get_revenue,
        api::inventory::get_inventory,
        api::inventory::create_inventory,
        api::inventory::update_inventory,
        api::inventory::low_stock_inventory,
    ),
    components(schemas(Product, Category, Inventory, Sale, Revenue)),
    tags(
        (name = "shopledger", description = "Inventory and sales API")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/post/product",
            "/sales/{start_date}/{end_date}",
            "/sales/product/{type_product}",
            "/revenue/{start_date}/{end_date}/{type_category}",
            "/inventory/{inventory_id}",
            "/inventory/low/stocks",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
