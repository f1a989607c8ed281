use crate::infra::AppState;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use leadboard::error::AppError;
use leadboard::leads::directory::LeadDirectory;
use leadboard::leads::router::lead_router;
use leadboard::leads::views::{DashboardParams, DashboardSnapshot};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn app_router<D>(directory: Arc<D>) -> Router
where
    D: LeadDirectory + 'static,
{
    let dashboard = Router::new()
        .route("/api/v1/dashboard", get(dashboard_endpoint::<D>))
        .with_state(directory.clone());

    lead_router(directory)
        .merge(dashboard)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// One full dashboard render pass: counts, shares, and geometry for every
/// chart, derived from the directory's latest snapshot. Drawing parameters
/// default to the reference layout and are tunable per request.
pub(crate) async fn dashboard_endpoint<D>(
    State(directory): State<Arc<D>>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardSnapshot>, AppError>
where
    D: LeadDirectory + 'static,
{
    let leads = directory.fetch_leads()?;
    let snapshot = DashboardSnapshot::build(&leads, params)?;
    Ok(Json(snapshot))
}
