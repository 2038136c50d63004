//! Inventory aggregates computed over a snapshot of the store.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

/// Aggregate figures for a set of products
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMetrics {
    /// Sum of the known stock quantities
    pub total_stock: i64,
    /// Sum of price times quantity over products where both are known
    pub total_value: f64,
    /// Mean unit price of priced, stocked products; 0.0 when there are none
    pub avg_price: f64,
}

/// Global metrics plus a per-category breakdown
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    #[serde(flatten)]
    pub totals: InventoryMetrics,
    /// Keyed by category name; products without a category are left out
    pub by_category: BTreeMap<String, InventoryMetrics>,
}

/// Fold a set of products into aggregate metrics in a single pass.
pub fn aggregate<'a>(products: impl IntoIterator<Item = &'a Product>) -> InventoryMetrics {
    let mut total_stock: i64 = 0;
    let mut total_value = 0.0;
    let mut price_sum = 0.0;
    let mut priced_count: u32 = 0;

    for product in products {
        let quantity = product.quantity_in_stock;
        if let Some(quantity) = quantity {
            total_stock += i64::from(quantity);
        }
        if let (Some(price), Some(quantity)) = (product.unit_price, quantity) {
            total_value += price * f64::from(quantity);
            // Only stocked products count toward the average price
            if quantity > 0 {
                price_sum += price;
                priced_count += 1;
            }
        }
    }

    let avg_price = if priced_count == 0 {
        0.0
    } else {
        price_sum / f64::from(priced_count)
    };

    InventoryMetrics {
        total_stock,
        total_value,
        avg_price,
    }
}

/// Group products by category and aggregate each group on its own.
pub fn aggregate_by_category(products: &[Product]) -> BTreeMap<String, InventoryMetrics> {
    let mut groups: BTreeMap<&str, Vec<&Product>> = BTreeMap::new();
    for product in products {
        if let Some(category) = product.category.as_deref() {
            groups.entry(category).or_default().push(product);
        }
    }

    groups
        .into_iter()
        .map(|(category, members)| (category.to_string(), aggregate(members)))
        .collect()
}

/// Build the full report: global totals plus the per-category breakdown.
pub fn report(products: &[Product]) -> InventoryReport {
    InventoryReport {
        totals: aggregate(products),
        by_category: aggregate_by_category(products),
    }
}
