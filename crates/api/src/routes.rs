//! Route table.

use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// With `cors_permissive` every origin is allowed; otherwise no CORS
/// headers are emitted.
pub fn create_router(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/protocols", get(handlers::list_protocols))
        .route("/api/yields", get(handlers::list_yields))
        .route("/api/historical-yields", get(handlers::historical_yields))
        .route("/api/projected-returns", get(handlers::projected_returns))
        .route("/api/optimal-strategy", post(handlers::optimal_strategy))
        .route("/api/impermanent-loss", post(handlers::impermanent_loss))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use defi_yield_data::StaticCatalog;
    use defi_yield_domain::value_objects::{Allocation, ImpermanentLossResult, Strategy};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(StaticCatalog::builtin().with_seed(11)), true)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_protocols() {
        let (status, body) = get_json("/api/protocols").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(body[0]["logoUrl"], "https://cryptologos.cc/logos/aave-aave-logo.png");
    }

    #[tokio::test]
    async fn test_yields_filtered() {
        let (status, body) = get_json("/api/yields?protocols=aave&assetType=stablecoin").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["protocolId"], "aave");
        assert_eq!(rows[0]["riskLevel"], "low");
    }

    #[tokio::test]
    async fn test_yields_require_protocols() {
        let (status, body) = get_json("/api/yields").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_bad_timeframe_is_rejected() {
        let (status, _) = get_json("/api/yields?protocols=aave&timeframe=2w").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_historical_yields() {
        let (status, body) = get_json("/api/historical-yields?protocols=curve&timeframe=30d").await;
        assert_eq!(status, StatusCode::OK);
        let series = body.as_array().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0]["data"].as_array().unwrap().len(), 30);
        assert!(series[0]["data"][0].get("yield").is_some());
    }

    #[tokio::test]
    async fn test_historical_yields_default_quarter() {
        let (_, body) = get_json("/api/historical-yields?protocols=aave").await;
        assert_eq!(body[0]["data"].as_array().unwrap().len(), 90);
    }

    #[tokio::test]
    async fn test_projected_returns() {
        let (status, body) =
            get_json("/api/projected-returns?protocols=aave,curve&scenario=bear").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r["scenario"] == "bear"));
    }

    #[tokio::test]
    async fn test_optimal_strategy() {
        let (status, bytes) = post_json(
            "/api/optimal-strategy",
            r#"{"protocols":["aave","compound","curve"],"investmentAmount":10000,
                "timeHorizon":12,"riskTolerance":"low","assetType":"stablecoin"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let strategy: Strategy = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(strategy.allocations.len(), 5);
        assert_eq!(Allocation::total_percentage(&strategy.allocations), dec!(100));
        assert!(strategy.projected_value > dec!(10000));
        assert!(strategy.insights.contains("conservative"));
    }

    #[tokio::test]
    async fn test_optimal_strategy_rejects_bad_input() {
        let (status, _) = post_json(
            "/api/optimal-strategy",
            r#"{"protocols":["aave"],"investmentAmount":0,"timeHorizon":12,"riskTolerance":"low"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            "/api/optimal-strategy",
            r#"{"protocols":["aave"],"investmentAmount":100,"timeHorizon":12,"riskTolerance":"reckless"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            "/api/optimal-strategy",
            r#"{"protocols":[],"investmentAmount":100,"timeHorizon":12,"riskTolerance":"low"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_impermanent_loss() {
        let (status, bytes) = post_json(
            "/api/impermanent-loss",
            r#"{"token1Amount":1,"token2Amount":1000,"priceChangeRatio":-0.5}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let result: ImpermanentLossResult = serde_json::from_slice(&bytes).unwrap();
        assert!((result.impermanent_loss_percent - dec!(5.72)).abs() < dec!(0.01));
        assert_eq!(result.price_change_percent, dec!(-50));
        assert!(result.impermanent_loss <= Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_impermanent_loss_rejects_collapse() {
        let (status, _) = post_json(
            "/api/impermanent-loss",
            r#"{"token1Amount":1,"token2Amount":1000,"priceChangeRatio":-1}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_out_of_range_amounts_are_unprocessable() {
        let (status, bytes) = post_json(
            "/api/impermanent-loss",
            r#"{"token1Amount":"1000000000000000","token2Amount":"1000000000000000","priceChangeRatio":0.5}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 422);

        let (status, _) = post_json(
            "/api/optimal-strategy",
            r#"{"protocols":["aave"],"investmentAmount":"70000000000000000000000000000",
                "timeHorizon":120,"riskTolerance":"low"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get_json("/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }
}
