//! Router assembly shared by `main` and tests

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use game::{GameConfig, domain::repository::GameRepository, game_router};
use kernel::web::fallback_not_found;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Full application router over any game repository
pub fn build_app<R>(repo: R, game_config: GameConfig, allowed_origins: Vec<HeaderValue>) -> Router
where
    R: GameRepository + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    game_router(repo, game_config)
        .fallback(fallback_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use game::InMemoryGameRepository;
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(
            InMemoryGameRepository::new(),
            GameConfig::default(),
            vec![HeaderValue::from_static("http://localhost:3000")],
        )
    }

    #[tokio::test]
    async fn test_games_route_is_mounted() {
        let response = app()
            .oneshot(Request::builder().uri("/api/games").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/allthegames")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/games")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
    }
}
