pub mod handlers;
pub mod responses;
pub mod validation;

pub use validation::field_errors;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned by the router fallback and the extractors when a request is
/// malformed before it reaches a domain handler:
/// - `error`: Machine-readable error identifier (e.g., "NotFound")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// Domain validation failures use a different shape, a flat
/// field-to-message map built by [`field_errors`].
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Invalid UUID: not-a-uuid"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
