use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Build a CORS layer for the list API with the given allowed origins.
///
/// An origin is allowed when it starts with one of the configured entries, so
/// `http://localhost` also admits `http://localhost:3000`.
/// Pass "*" in the origins list to allow all origins.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }
            origin.to_str().is_ok_and(|origin_str| {
                cors_origins
                    .iter()
                    .any(|allowed| origin_str.starts_with(allowed.as_str()))
            })
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(Any)
}

/// Split and trim a raw list of origins, dropping empty entries.
#[must_use]
pub fn normalize_origins(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origins_contain_localhost() {
        assert!(DEFAULT_CORS_ORIGINS.split(',').any(|o| o == "http://localhost"));
    }

    #[test]
    fn test_normalize_origins_trims_and_drops_empty() {
        let raw = vec![" http://a ".to_string(), String::new(), "http://b".to_string()];
        assert_eq!(normalize_origins(&raw), vec!["http://a", "http://b"]);
    }

    #[test]
    fn test_build_cors_layer_wildcard() {
        // Builder should accept the wildcard without panicking
        let _layer = build_cors_layer(vec!["*".to_string()]);
    }
}
