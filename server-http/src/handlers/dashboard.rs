use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use fraudwatch::Timeframe;
use shared_http::api::{
    DashboardQuery, DashboardResponse, HourlyResponse, ListTransactionsResponse, StatsResponse,
};
use tracing::info;

/// GET /api/dashboard?timeframe=24h
///
/// The timeframe is validated and echoed back; the data is the same
/// snapshot whichever window is asked for.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let timeframe = match query.timeframe.as_deref() {
        Some(raw) => raw.parse::<Timeframe>()?,
        None => state.default_timeframe,
    };
    info!("GET_DASHBOARD: timeframe={}", timeframe);

    Ok(Json(DashboardResponse::new(timeframe, state.snapshot())))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        stats: state.snapshot().stats,
    })
}

/// GET /api/hourly
pub async fn get_hourly(State(state): State<AppState>) -> Json<HourlyResponse> {
    Json(HourlyResponse {
        points: state.snapshot().hourly_data,
    })
}

/// GET /api/transactions
pub async fn list_transactions(State(state): State<AppState>) -> Json<ListTransactionsResponse> {
    let transactions = state.snapshot().suspicious_transactions;
    info!("LIST_TRANSACTIONS: count={}", transactions.len());
    Json(ListTransactionsResponse::new(transactions))
}
