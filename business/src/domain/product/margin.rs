use super::errors::ProductError;
use super::model::Product;

/// Margin of a single product in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductMargin {
    pub product_id: i32,
    pub name: String,
    pub margin: i64,
}

/// Sell price minus purchase price.
///
/// Negative when the product is sold below its cost; that is allowed.
/// Computed in `i64` so no pair of `i32` prices can overflow.
pub fn margin_of(product: &Product) -> i64 {
    i64::from(product.sell_price) - i64::from(product.purchase_price)
}

/// Builds the margin report for `products`, preserving their order.
///
/// Business rules:
/// - One entry per product, keyed by product id
/// - An empty catalog has no report -> EmptyStore
pub fn compute_margins(products: &[Product]) -> Result<Vec<ProductMargin>, ProductError> {
    if products.is_empty() {
        return Err(ProductError::EmptyStore);
    }

    Ok(products
        .iter()
        .map(|product| ProductMargin {
            product_id: product.id,
            name: product.name.clone(),
            margin: margin_of(product),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: i32, sell_price: i32, purchase_price: i32) -> Product {
        Product::from_repository(id, format!("product-{id}"), sell_price, purchase_price)
    }

    #[test]
    fn should_return_positive_margin_when_sold_above_cost() {
        assert_eq!(margin_of(&product(1, 100, 60)), 40);
    }

    #[test]
    fn should_return_negative_margin_when_sold_below_cost() {
        assert_eq!(margin_of(&product(1, 50, 70)), -20);
    }

    #[test]
    fn should_not_overflow_when_prices_are_extreme() {
        assert_eq!(
            margin_of(&product(1, i32::MAX, i32::MIN)),
            i64::from(i32::MAX) - i64::from(i32::MIN)
        );
    }

    #[test]
    fn should_fail_with_empty_store_when_no_products() {
        let result = compute_margins(&[]);

        assert!(matches!(result.unwrap_err(), ProductError::EmptyStore));
    }

    #[test]
    fn should_keep_source_order_when_computing_margins() {
        let products = vec![product(3, 10, 1), product(1, 20, 2), product(2, 30, 3)];

        let margins = compute_margins(&products).unwrap();

        let ids: Vec<i32> = margins.iter().map(|m| m.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(margins[0].margin, 9);
        assert_eq!(margins[1].name, "product-1");
    }

    proptest! {
        #[test]
        fn margin_plus_purchase_price_is_sell_price(sell in any::<i32>(), purchase in any::<i32>()) {
            let margin = margin_of(&product(1, sell, purchase));
            prop_assert_eq!(margin + i64::from(purchase), i64::from(sell));
        }

        #[test]
        fn report_has_one_entry_per_product(prices in prop::collection::vec((1..10_000i32, 0..10_000i32), 1..20)) {
            let products: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, (sell, purchase))| product(i as i32, *sell, *purchase))
                .collect();

            let margins = compute_margins(&products).unwrap();

            prop_assert_eq!(margins.len(), products.len());
            for (entry, product) in margins.iter().zip(&products) {
                prop_assert_eq!(entry.product_id, product.id);
                prop_assert_eq!(entry.margin, margin_of(product));
            }
        }
    }
}
