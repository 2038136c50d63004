//! Inventory Domain
//!
//! This module provides a complete domain implementation for managing a product inventory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! Listing and metrics pull a snapshot from the repository and run it
//! through the pure [`query`] and [`metrics`] modules.
//!
//! # Usage
//!
//! ```rust
//! use domain_inventory::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! // Create a repository and service
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use metrics::{InventoryMetrics, InventoryReport};
pub use models::{Product, ProductInput};
pub use query::ProductQuery;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
