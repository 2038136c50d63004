//! Reusable OpenAPI response types for consistent API documentation.

use std::collections::BTreeMap;

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "name": "Name is required"
    })
)]
pub struct ValidationErrorResponse(pub BTreeMap<String, String>);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "error": "BadRequest",
        "message": "Invalid UUID: not-a-uuid"
    })
)]
pub struct InvalidUuidResponse(pub ErrorResponse);
