use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173,http://localhost:8080";

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:3000,http://localhost:5173,http://localhost:8080")
///
/// Configuration:
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: content-type, authorization
pub fn init_cors() -> Cors {
    let allowed_origins =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());

    Cors::new()
        .allow_origins(parse_origins(&allowed_origins))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
