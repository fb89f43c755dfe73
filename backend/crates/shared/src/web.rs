//! Router-wide HTTP helpers

use http::{Method, Uri};

use crate::error::app_error::AppError;

/// Fallback for unmatched routes and for methods a known path does not serve.
pub async fn fallback_not_found(method: Method, uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {} {}", method, uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_fallback_is_404_problem() {
        let err = fallback_not_found(Method::DELETE, Uri::from_static("/api/allthegames")).await;
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "No route for DELETE /api/allthegames");

        let response = err.into_response();
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    }
}
