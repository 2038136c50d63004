use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - an inventory item tracked by the store
///
/// All optional fields serialize as explicit JSON nulls; an absent value
/// means "unknown", never zero, and the query and metrics layers treat it
/// that way.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Free-form category label
    pub category: Option<String>,
    /// Price per unit
    pub unit_price: Option<f64>,
    /// Units currently in stock
    pub quantity_in_stock: Option<i32>,
    /// Expiration date, if the product expires
    pub expiration_date: Option<NaiveDate>,
    /// Creation date, stamped once by the store
    pub created_at: NaiveDate,
    /// Date of the last mutation
    pub updated_at: NaiveDate,
}

/// DTO for creating or replacing a product
///
/// The same payload serves POST and PUT: an update replaces every mutable
/// field, so an absent field clears the stored value. `name` is optional
/// on the wire so a missing or null name surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity_in_stock: Option<i32>,
    pub expiration_date: Option<NaiveDate>,
}

impl Product {
    /// Create a new product from input, assigning the ID and stamping both dates
    pub fn new(input: ProductInput) -> Self {
        let today = Utc::now().date_naive();
        Self {
            id: Uuid::now_v7(),
            name: input.name.unwrap_or_default(),
            category: input.category,
            unit_price: input.unit_price,
            quantity_in_stock: input.quantity_in_stock,
            expiration_date: input.expiration_date,
            created_at: today,
            updated_at: today,
        }
    }

    /// Replace all mutable fields from the input and restamp `updated_at`
    ///
    /// `id` and `created_at` never change.
    pub fn apply_input(&mut self, input: ProductInput) {
        self.name = input.name.unwrap_or_default();
        self.category = input.category;
        self.unit_price = input.unit_price;
        self.quantity_in_stock = input.quantity_in_stock;
        self.expiration_date = input.expiration_date;
        self.updated_at = Utc::now().date_naive();
    }

    /// Set the stock quantity and restamp `updated_at`
    pub fn set_stock(&mut self, quantity: i32) {
        self.quantity_in_stock = Some(quantity);
        self.updated_at = Utc::now().date_naive();
    }
}
