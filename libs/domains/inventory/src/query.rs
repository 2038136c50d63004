//! Product query engine: filter, then sort, then paginate.
//!
//! The engine is a pure function over a snapshot of the store. Optional
//! fields follow one rule throughout: a product with a missing value never
//! matches a filter on that field, and sorts after every present value
//! regardless of direction.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Deserialize;
use strum::EnumString;
use utoipa::IntoParams;

use crate::models::Product;

/// Query parameters for listing products
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Case-insensitive substring match on the product name
    pub name: Option<String>,
    /// Exact-match category filter; repeat the parameter for a set of categories
    #[serde(default)]
    pub category: Vec<String>,
    /// true keeps stocked products, false keeps zero-stock products
    pub in_stock: Option<bool>,
    /// Primary sort key: name, category, unitPrice, quantityInStock or expirationDate
    pub sort_by: Option<String>,
    /// Secondary sort key, used to break primary ties
    pub sort_by2: Option<String>,
    /// Primary sort direction: "desc" descends, anything else ascends
    #[serde(default = "default_order")]
    pub order: String,
    /// Secondary sort direction
    #[serde(default = "default_order")]
    pub order2: String,
    /// Zero-based page index
    #[serde(default)]
    pub page: usize,
    /// Page size
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_order() -> String {
    "asc".to_string()
}

fn default_size() -> usize {
    10
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            name: None,
            category: Vec::new(),
            in_stock: None,
            sort_by: None,
            sort_by2: None,
            order: default_order(),
            order2: default_order(),
            page: 0,
            size: default_size(),
        }
    }
}

/// Sort keys recognized on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SortKey {
    Name,
    Category,
    UnitPrice,
    QuantityInStock,
    ExpirationDate,
    Id,
}

impl SortKey {
    /// Parse a wire value; absent or unrecognized keys fall back to Id,
    /// which keeps the result order fully deterministic.
    fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::from_str(value).ok())
            .unwrap_or(SortKey::Id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only the case-insensitive literal "desc" descends
    fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Run the query against a snapshot of products.
///
/// Filters are conjunctive. Sorting is stable over the ID-ordered input,
/// and pagination windows past the end yield an empty page.
pub fn apply(mut products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    if let Some(name) = query.name.as_deref().filter(|name| !name.is_empty()) {
        let needle = name.to_lowercase();
        products.retain(|p| p.name.to_lowercase().contains(&needle));
    }

    if !query.category.is_empty() {
        products.retain(|p| {
            p.category
                .as_ref()
                .is_some_and(|category| query.category.contains(category))
        });
    }

    if let Some(in_stock) = query.in_stock {
        // A missing quantity matches neither branch
        products.retain(|p| {
            p.quantity_in_stock
                .is_some_and(|quantity| if in_stock { quantity > 0 } else { quantity == 0 })
        });
    }

    let primary_key = SortKey::parse(query.sort_by.as_deref());
    let primary_direction = SortDirection::parse(&query.order);
    let secondary = query
        .sort_by2
        .as_deref()
        .map(|raw| (SortKey::parse(Some(raw)), SortDirection::parse(&query.order2)));

    products.sort_by(|a, b| {
        let ordering = compare(primary_key, primary_direction, a, b);
        match (ordering, secondary) {
            (Ordering::Equal, Some((key, direction))) => compare(key, direction, a, b),
            _ => ordering,
        }
    });

    products
        .into_iter()
        .skip(query.page.saturating_mul(query.size))
        .take(query.size)
        .collect()
}

fn compare(key: SortKey, direction: SortDirection, a: &Product, b: &Product) -> Ordering {
    match key {
        // The ID anchor is always ascending; direction does not apply
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => direction.apply(compare_ci(&a.name, &b.name)),
        SortKey::Category => compare_nulls_last(
            a.category.as_deref(),
            b.category.as_deref(),
            direction,
            |x, y| compare_ci(x, y),
        ),
        SortKey::UnitPrice => compare_nulls_last(
            a.unit_price.as_ref(),
            b.unit_price.as_ref(),
            direction,
            f64::total_cmp,
        ),
        SortKey::QuantityInStock => compare_nulls_last(
            a.quantity_in_stock.as_ref(),
            b.quantity_in_stock.as_ref(),
            direction,
            Ord::cmp,
        ),
        SortKey::ExpirationDate => compare_nulls_last(
            a.expiration_date.as_ref(),
            b.expiration_date.as_ref(),
            direction,
            Ord::cmp,
        ),
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Missing values sort after present ones under both directions; the
/// direction only reorders present-to-present comparisons.
fn compare_nulls_last<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => direction.apply(cmp(x, y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductInput;

    fn product(
        name: &str,
        category: Option<&str>,
        unit_price: Option<f64>,
        quantity: Option<i32>,
    ) -> Product {
        Product::new(ProductInput {
            name: Some(name.to_string()),
            category: category.map(str::to_string),
            unit_price,
            quantity_in_stock: quantity,
            expiration_date: None,
        })
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let products = vec![
            product("Sparkling Water", None, None, None),
            product("Bread", None, None, None),
            product("watermelon", None, None, None),
        ];

        let query = ProductQuery {
            name: Some("WATER".to_string()),
            size: 50,
            ..Default::default()
        };
        let result = apply(products, &query);
        assert_eq!(names(&result), ["Sparkling Water", "watermelon"]);
    }

    #[test]
    fn empty_name_filter_is_ignored() {
        let products = vec![
            product("Water", None, None, None),
            product("Bread", None, None, None),
        ];

        let query = ProductQuery {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply(products, &query).len(), 2);
    }

    #[test]
    fn category_filter_is_an_exact_match_set() {
        let products = vec![
            product("Water", Some("Drink"), None, None),
            product("Bread", Some("Food"), None, None),
            product("Soap", Some("Hygiene"), None, None),
            product("Mystery", None, None, None),
        ];

        let query = ProductQuery {
            category: vec!["Drink".to_string(), "Food".to_string()],
            ..Default::default()
        };
        let result = apply(products, &query);
        // Case-sensitive match, and a null category never matches
        assert_eq!(names(&result), ["Water", "Bread"]);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let products = vec![product("Water", Some("Drink"), None, None)];

        let query = ProductQuery {
            category: vec!["drink".to_string()],
            ..Default::default()
        };
        assert!(apply(products, &query).is_empty());
    }

    #[test]
    fn in_stock_true_keeps_only_positive_quantities() {
        let products = vec![
            product("Stocked", None, None, Some(10)),
            product("Empty", None, None, Some(0)),
            product("Unknown", None, None, None),
        ];

        let query = ProductQuery {
            in_stock: Some(true),
            ..Default::default()
        };
        assert_eq!(names(&apply(products, &query)), ["Stocked"]);
    }

    #[test]
    fn in_stock_false_keeps_only_zero_quantities() {
        let products = vec![
            product("Stocked", None, None, Some(10)),
            product("Empty", None, None, Some(0)),
            product("Unknown", None, None, None),
        ];

        let query = ProductQuery {
            in_stock: Some(false),
            ..Default::default()
        };
        // A missing quantity is excluded from both branches
        assert_eq!(names(&apply(products, &query)), ["Empty"]);
    }

    #[test]
    fn sorts_by_unit_price_with_nulls_last_in_both_directions() {
        let build = || {
            vec![
                product("Mid", None, Some(5.0), None),
                product("Unpriced", None, None, None),
                product("Cheap", None, Some(1.5), None),
                product("Dear", None, Some(9.0), None),
            ]
        };

        let ascending = ProductQuery {
            sort_by: Some("unitPrice".to_string()),
            ..Default::default()
        };
        assert_eq!(
            names(&apply(build(), &ascending)),
            ["Cheap", "Mid", "Dear", "Unpriced"]
        );

        let descending = ProductQuery {
            sort_by: Some("unitPrice".to_string()),
            order: "DESC".to_string(),
            ..Default::default()
        };
        assert_eq!(
            names(&apply(build(), &descending)),
            ["Dear", "Mid", "Cheap", "Unpriced"]
        );
    }

    #[test]
    fn sorts_names_case_insensitively() {
        let products = vec![
            product("banana", None, None, None),
            product("Apple", None, None, None),
            product("cherry", None, None, None),
        ];

        let query = ProductQuery {
            sort_by: Some("name".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&apply(products, &query)), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn unrecognized_sort_key_falls_back_to_id_order() {
        let products = vec![
            product("First", None, None, None),
            product("Second", None, None, None),
            product("Third", None, None, None),
        ];
        let mut expected: Vec<Product> = products.clone();
        expected.sort_by_key(|p| p.id);

        let query = ProductQuery {
            sort_by: Some("price".to_string()),
            order: "desc".to_string(),
            ..Default::default()
        };
        let result = apply(products, &query);
        assert_eq!(
            result.iter().map(|p| p.id).collect::<Vec<_>>(),
            expected.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn secondary_key_breaks_primary_ties() {
        let products = vec![
            product("B", Some("Drink"), Some(2.0), None),
            product("A", Some("Drink"), Some(9.0), None),
            product("C", Some("Food"), Some(1.0), None),
        ];

        let query = ProductQuery {
            sort_by: Some("category".to_string()),
            sort_by2: Some("unitPrice".to_string()),
            order2: "desc".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&apply(products, &query)), ["A", "B", "C"]);
    }

    #[test]
    fn paginates_with_zero_based_windows() {
        let products: Vec<Product> = (0..5)
            .map(|i| product(&format!("P{i}"), None, None, None))
            .collect();

        let page = |page: usize, size: usize| ProductQuery {
            page,
            size,
            ..Default::default()
        };

        assert_eq!(names(&apply(products.clone(), &page(0, 2))), ["P0", "P1"]);
        assert_eq!(names(&apply(products.clone(), &page(1, 2))), ["P2", "P3"]);
        assert_eq!(names(&apply(products.clone(), &page(2, 2))), ["P4"]);
        assert!(apply(products.clone(), &page(3, 2)).is_empty());
        assert!(apply(products, &page(0, 0)).is_empty());
    }

    #[test]
    fn filters_compose_before_sort_and_pagination() {
        let products = vec![
            product("Water", Some("Drink"), Some(1.0), Some(10)),
            product("Juice", Some("Drink"), Some(3.0), Some(5)),
            product("Wine", Some("Drink"), Some(12.0), Some(0)),
            product("Bread", Some("Food"), Some(2.0), Some(7)),
        ];

        let query = ProductQuery {
            category: vec!["Drink".to_string()],
            in_stock: Some(true),
            sort_by: Some("unitPrice".to_string()),
            order: "desc".to_string(),
            size: 1,
            ..Default::default()
        };
        assert_eq!(names(&apply(products, &query)), ["Juice"]);
    }
}
