// ABOUTME: CORS middleware configuration for the RepCoach HTTP API
// ABOUTME: Allows browser clients on configured origins to call the JSON endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RepCoach Contributors

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::environment::ServerConfig;

/// Configure CORS for the HTTP API
///
/// Origins come from `CORS_ALLOWED_ORIGINS`: `*` (or an empty value) allows any
/// origin, otherwise a comma-separated list is matched exactly. Preflight
/// `OPTIONS` requests are answered by the layer itself.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,http://localhost:5173"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allowed = config.cors.allowed_origins.trim();
    let allow_origin = if allowed.is_empty() || allowed == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_list_builds_layer() {
        let mut config = ServerConfig::default();
        config.cors.allowed_origins = "https://app.example.com, ,http://localhost:5173".into();
        let _layer = setup_cors(&config);

        config.cors.allowed_origins = String::new();
        let _layer = setup_cors(&config);
    }
}
