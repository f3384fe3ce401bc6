use std::time::Duration;

use anyhow::{Result, ensure};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build a CORS layer from config.
///
/// # Errors
/// Returns an error if `allow_credentials` is combined with a wildcard origin,
/// method or header; browsers reject that combination.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");
    let has_wildcard_method = cfg.allowed_methods.iter().any(|m| m == "*");
    let has_wildcard_header = cfg.allowed_headers.iter().any(|h| h == "*");

    ensure!(
        !(cfg.allow_credentials
            && (has_wildcard_origin || has_wildcard_method || has_wildcard_header)),
        "CORS misconfiguration: '*' in allowed_origins, allowed_methods or allowed_headers \
         cannot be combined with allow_credentials=true"
    );

    if has_wildcard_origin {
        warn!("CORS is configured with allowed_origins=['*']; any website may call the calculator API");
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if has_wildcard_method {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if has_wildcard_header {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_builds() {
        assert!(build_cors_layer(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn wildcard_with_credentials_is_rejected() {
        let cfg = CorsConfig {
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(build_cors_layer(&cfg).is_err());
    }

    #[test]
    fn explicit_origins_with_credentials_are_allowed() {
        let cfg = CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_owned()],
            allowed_headers: vec!["content-type".to_owned()],
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(build_cors_layer(&cfg).is_ok());
    }
}
