//! Products API routes
//!
//! This module wires up the inventory domain to HTTP routes.

use axum::Router;
use domain_inventory::{handlers, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    // Clones of the repository share the same underlying store
    let service = ProductService::new(state.repository.clone());

    // Return the domain's router
    handlers::router(service)
}
