use poem_openapi::Object;

use business::domain::product::margin::ProductMargin;
use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (cannot be blank)
    pub name: String,
    /// Sell price in currency units (must not be zero)
    #[oai(validator(minimum(value = "0")))]
    pub sell_price: i32,
    /// Purchase price in currency units
    pub purchase_price: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Identifier of the product to replace
    pub id: i32,
    /// Product name
    pub name: String,
    /// Sell price in currency units
    #[oai(validator(minimum(value = "0")))]
    pub sell_price: i32,
    /// Purchase price in currency units
    pub purchase_price: i32,
}

/// Full product representation, purchase price included.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Sell price
    pub sell_price: i32,
    /// Purchase price
    pub purchase_price: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sell_price: product.sell_price,
            purchase_price: product.purchase_price,
        }
    }
}

/// Catalog listing entry. The purchase price is never exposed here.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    /// Product unique identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Sell price
    pub sell_price: i32,
}

impl From<Product> for ProductSummaryResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sell_price: product.sell_price,
        }
    }
}

/// Margin of one product.
#[derive(Debug, Clone, Object)]
pub struct ProductMarginResponse {
    /// Product unique identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Sell price minus purchase price; negative when sold below cost
    pub margin: i64,
}

impl From<ProductMargin> for ProductMarginResponse {
    fn from(margin: ProductMargin) -> Self {
        Self {
            id: margin.product_id,
            name: margin.name,
            margin: margin.margin,
        }
    }
}
