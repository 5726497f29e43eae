//! HTTP handlers. Each one parses its input, calls the provider or the
//! engines, and returns JSON.

use crate::error::{ApiError, ApiResult};
use crate::models::{
    HealthResponse, ImpermanentLossRequest, OptimalStrategyRequest, ProjectionParams, YieldParams,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::Uri,
};
use defi_yield_domain::entities::{HistoricalYield, ProjectedReturn, Protocol, YieldOpportunity};
use defi_yield_domain::enums::Timeframe;
use defi_yield_domain::metrics::compute_impermanent_loss;
use defi_yield_domain::value_objects::{ImpermanentLossResult, Strategy};
use defi_yield_optimization::calculate_optimal_strategy;
use tracing::{debug, info};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

pub async fn list_protocols(State(state): State<AppState>) -> ApiResult<Json<Vec<Protocol>>> {
    let protocols = state.provider.protocols().await?;
    debug!(count = protocols.len(), "Listed protocols");
    Ok(Json(protocols))
}

pub async fn list_yields(
    State(state): State<AppState>,
    Query(params): Query<YieldParams>,
) -> ApiResult<Json<Vec<YieldOpportunity>>> {
    let query = params.to_query(Timeframe::Week)?;
    let yields = state.provider.yields(&query).await?;
    info!(protocols = ?query.protocol_ids, count = yields.len(), "Served yields");
    Ok(Json(yields))
}

pub async fn historical_yields(
    State(state): State<AppState>,
    Query(params): Query<YieldParams>,
) -> ApiResult<Json<Vec<HistoricalYield>>> {
    let query = params.to_query(Timeframe::Quarter)?;
    let history = state.provider.historical_yields(&query).await?;
    info!(
        timeframe = query.timeframe.as_str(),
        series = history.len(),
        "Served historical yields"
    );
    Ok(Json(history))
}

pub async fn projected_returns(
    State(state): State<AppState>,
    Query(params): Query<ProjectionParams>,
) -> ApiResult<Json<Vec<ProjectedReturn>>> {
    let ids = params.protocol_ids()?;
    let scenario = params.scenario()?;
    let projections = state
        .provider
        .projected_returns(&ids, scenario, params.asset_type()?)
        .await?;
    info!(scenario = scenario.as_str(), count = projections.len(), "Served projections");
    Ok(Json(projections))
}

pub async fn optimal_strategy(
    State(state): State<AppState>,
    Json(request): Json<OptimalStrategyRequest>,
) -> ApiResult<Json<Strategy>> {
    let tolerance = request.tolerance()?;
    let opportunities = state.provider.yields(&request.query()?).await?;
    let strategy = calculate_optimal_strategy(
        &opportunities,
        request.investment_amount,
        request.time_horizon,
        tolerance,
    )?;
    Ok(Json(strategy))
}

pub async fn impermanent_loss(
    Json(request): Json<ImpermanentLossRequest>,
) -> ApiResult<Json<ImpermanentLossResult>> {
    let result = compute_impermanent_loss(
        request.token1_amount,
        request.token2_amount,
        request.price_change_ratio,
    )?;
    debug!(
        ratio = %request.price_change_ratio,
        loss_pct = %result.impermanent_loss_percent,
        "Computed impermanent loss"
    );
    Ok(Json(result))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
