use super::errors::ProductError;

/// Sell price that may never be persisted through product creation.
pub const FREE_PRICE: i32 = 0;

/// A catalog product as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub sell_price: i32,
    pub purchase_price: i32,
}

pub struct NewProductProps {
    pub name: String,
    pub sell_price: i32,
    pub purchase_price: i32,
}

/// A product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub sell_price: i32,
    pub purchase_price: i32,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.sell_price == FREE_PRICE {
            return Err(ProductError::FreeProduct);
        }

        Ok(Self {
            name: props.name,
            sell_price: props.sell_price,
            purchase_price: props.purchase_price,
        })
    }

    /// Attaches the id handed out by the repository.
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            sell_price: self.sell_price,
            purchase_price: self.purchase_price,
        }
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i32, name: String, sell_price: i32, purchase_price: i32) -> Self {
        Self {
            id,
            name,
            sell_price,
            purchase_price,
        }
    }
}
