use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub sell_price: i32,
    pub purchase_price: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.name, self.sell_price, self.purchase_price)
    }
}
