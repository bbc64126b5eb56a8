//! Centralized configuration (environment variables + defaults).

/// Socket address the API server binds to.
pub fn bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
