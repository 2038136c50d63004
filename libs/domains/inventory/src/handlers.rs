//! HTTP handlers for the Inventory API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_extra::extract::Query;
use axum_helpers::{
    errors::responses::{InvalidUuidResponse, ValidationErrorResponse},
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::metrics::{InventoryMetrics, InventoryReport};
use crate::models::{Product, ProductInput};
use crate::query::ProductQuery;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        inventory_metrics,
        get_product,
        update_product,
        delete_product,
        mark_in_stock,
        mark_out_of_stock,
    ),
    components(
        schemas(Product, ProductInput, InventoryMetrics, InventoryReport),
        responses(ValidationErrorResponse, InvalidUuidResponse)
    ),
    tags(
        (name = "Products", description = "Product inventory endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/metrics", get(inventory_metrics))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/instock", put(mark_in_stock))
        .route("/{id}/outofstock", post(mark_out_of_stock))
        .with_state(shared_service)
}

/// List products with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Page of products matching the query", body = Vec<Product>)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = ValidationErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Aggregate inventory metrics
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Products",
    responses(
        (status = 200, description = "Totals with a per-category breakdown", body = InventoryReport)
    )
)]
async fn inventory_metrics<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<InventoryReport>> {
    let report = service.inventory_report().await?;
    Ok(Json(report))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = InvalidUuidResponse),
        (status = 404, description = "Product not found")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, description = "Product not found")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = InvalidUuidResponse),
        (status = 404, description = "Product not found")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Restock query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct StockQuantity {
    /// Stock level to set
    #[serde(default = "default_restock_quantity")]
    pub quantity: i32,
}

fn default_restock_quantity() -> i32 {
    10
}

/// Mark a product as in stock
#[utoipa::path(
    put,
    path = "/{id}/instock",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID"),
        StockQuantity
    ),
    responses(
        (status = 200, description = "Stock quantity set", body = Product),
        (status = 400, response = InvalidUuidResponse),
        (status = 404, description = "Product not found")
    )
)]
async fn mark_in_stock<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    Query(query): Query<StockQuantity>,
) -> ProductResult<Json<Product>> {
    let product = service.set_stock(id, query.quantity).await?;
    Ok(Json(product))
}

/// Mark a product as out of stock
#[utoipa::path(
    post,
    path = "/{id}/outofstock",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Stock quantity zeroed", body = Product),
        (status = 400, response = InvalidUuidResponse),
        (status = 404, description = "Product not found")
    )
)]
async fn mark_out_of_stock<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.clear_stock(id).await?;
    Ok(Json(product))
}
