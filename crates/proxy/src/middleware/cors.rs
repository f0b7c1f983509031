//! Cross-origin resource sharing policy.
//!
//! Two policies, selected by `CORS_ALLOWED_ORIGINS`:
//!
//! - **Permissive** (`*`): any origin, method and header; no credentials.
//!   Suitable for local development.
//! - **Allow-list**: only the configured frontend origins, methods
//!   `GET`/`POST`/`OPTIONS`, headers `Content-Type`/`Authorization`, and
//!   credentialed requests enabled.

use axum::http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer for the configured policy.
#[must_use]
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::Permissive => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowList(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
                .allow_credentials(true)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{
            Request, StatusCode,
            header::{
                ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_METHODS,
                ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
            },
        },
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;

    fn app(config: &CorsConfig) -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(config))
    }

    fn strict() -> CorsConfig {
        CorsConfig::AllowList(vec![
            "http://localhost:5173".to_string(),
            "https://shop.example.com".to_string(),
        ])
    }

    #[tokio::test]
    async fn test_permissive_allows_any_origin() {
        let response = app(&CorsConfig::Permissive)
            .oneshot(
                Request::get("/")
                    .header(ORIGIN, "https://anywhere.example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(
            response
                .headers()
                .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_allow_list_echoes_listed_origin_with_credentials() {
        let response = app(&strict())
            .oneshot(
                Request::get("/")
                    .header(ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_allow_list_ignores_unlisted_origin() {
        let response = app(&strict())
            .oneshot(
                Request::get("/")
                    .header(ORIGIN, "https://evil.example.net")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_allow_list_preflight() {
        let response = app(&strict())
            .oneshot(
                Request::options("/")
                    .header(ORIGIN, "https://shop.example.com")
                    .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://shop.example.com"
        );
        let methods = response.headers()[ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("GET"));
        assert!(methods.contains("POST"));
        assert!(methods.contains("OPTIONS"));
        assert!(!methods.contains("DELETE"));
    }
}
