//! HTTP server: SSR'd page plus a small JSON API.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::app::App;
use crate::content::{self, Portfolio};

/// Build version injected by build.rs
pub const VERSION: &str = env!("PORTFOLIO_VERSION");
/// Short git SHA injected by build.rs
pub const GIT_SHA: &str = env!("PORTFOLIO_GIT_SHA");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
}

pub async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: VERSION,
        git_sha: GIT_SHA,
    })
}

/// Content document as JSON, for clients that render their own views.
pub async fn portfolio_handler() -> Result<Json<&'static Portfolio>, (StatusCode, String)> {
    content::embedded().map(Json).map_err(|e| {
        tracing::error!("Portfolio content unavailable: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}

/// JSON routes, independent of the Dioxus renderer.
pub fn api_routes() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/portfolio", get(portfolio_handler))
}

/// Full application: Dioxus page + API + middleware.
pub fn router() -> Router {
    dioxus::server::router(App)
        .merge(api_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_build_metadata() {
        let Json(health) = health_handler().await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, VERSION);
        assert!(!health.git_sha.is_empty());
    }

    #[tokio::test]
    async fn portfolio_handler_serves_embedded_content() {
        let Json(portfolio) = portfolio_handler()
            .await
            .expect("embedded content should be served");
        assert_eq!(portfolio, content::embedded().unwrap());
    }

    #[test]
    fn health_serializes_flat() {
        let json = serde_json::to_value(Health {
            status: "ok",
            version: "1.2.3",
            git_sha: "abc1234",
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "version": "1.2.3", "git_sha": "abc1234"})
        );
    }
}
