use axum::http::{HeaderValue, Method};
use core_config::env_or_default;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Origin of the local frontend dev server, allowed when no override is set.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

/// Creates the CORS layer from the `CORS_ALLOWED_ORIGIN` environment variable.
///
/// The variable holds comma-separated origins and defaults to
/// [`DEFAULT_ALLOWED_ORIGIN`] when unset:
/// - Development: `CORS_ALLOWED_ORIGIN=http://localhost:8080,http://localhost:5173`
/// - Production: `CORS_ALLOWED_ORIGIN=https://inventory.example.com`
///
/// The layer allows the API's methods (GET, POST, PUT, DELETE, OPTIONS),
/// the Content-Type and Accept headers, and caches preflight results for
/// one hour.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is set to an empty string or
/// contains a value that is not a valid header value.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let origins_str = env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN);

    let allowed_origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!("CORS configured with allowed origins: {}", origins_str);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600)))
}
