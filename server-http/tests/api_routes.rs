//! Snapshot API route tests, driven through the router without a socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server_http::{build_router, trim_trailing_slash, AppState};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

fn app() -> NormalizePath<Router> {
    trim_trailing_slash(build_router(AppState::seeded(42)))
}

async fn get_json(app: NormalizePath<Router>, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "OK");
}

#[tokio::test]
async fn test_dashboard_endpoint_defaults_to_24h() {
    let (status, json) = get_json(app(), "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timeframe"], "24h");
    assert_eq!(json["alertCount"].as_i64(), Some(342));
    assert_eq!(json["stats"]["total"]["value"].as_i64(), Some(15782));
    assert_eq!(json["hourlyData"].as_array().unwrap().len(), 24);
    assert_eq!(json["hourlyData"][0]["time"], "0:00");
    assert_eq!(json["hourlyData"][23]["time"], "23:00");
    assert_eq!(json["suspiciousTransactions"].as_array().unwrap().len(), 5);
    assert!(json["generatedAt"].is_string());
}

#[tokio::test]
async fn test_dashboard_timeframe_does_not_change_data() {
    let (_, day) = get_json(app(), "/api/dashboard?timeframe=24h").await;
    let (status, month) = get_json(app(), "/api/dashboard?timeframe=30d").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(month["timeframe"], "30d");
    assert_eq!(day["stats"], month["stats"]);
    assert_eq!(day["hourlyData"], month["hourlyData"]);
    assert_eq!(day["suspiciousTransactions"], month["suspiciousTransactions"]);
}

#[tokio::test]
async fn test_dashboard_rejects_unknown_timeframe() {
    let (status, json) = get_json(app(), "/api/dashboard?timeframe=1y").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("1y"));
}

#[tokio::test]
async fn test_transactions_endpoint() {
    let (status, json) = get_json(app(), "/api/transactions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 5);

    let rows = json["transactions"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    for row in rows {
        let score = row["riskScore"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&score));
        assert_eq!(row["fraudProbability"], row["riskScore"]);
        assert_eq!(row["riskPercent"].as_u64().unwrap(), (score * 100.0).round() as u64);
    }
    assert_eq!(rows[0]["sender"], "User745");
    assert_eq!(rows[0]["riskPercent"], 92);
}

#[tokio::test]
async fn test_transaction_fields_match_dashboard_casing() {
    let (_, listed) = get_json(app(), "/api/transactions").await;
    let (_, dashboard) = get_json(app(), "/api/dashboard").await;

    let row = &listed["transactions"][0];
    assert!(row.get("risk_score").is_none());
    assert!(row.get("fraud_probability").is_none());
    assert_eq!(row["riskScore"], dashboard["suspiciousTransactions"][0]["riskScore"]);
}

#[tokio::test]
async fn test_hourly_and_stats_endpoints() {
    let (status, hourly) = get_json(app(), "/api/hourly").await;
    assert_eq!(status, StatusCode::OK);
    let points = hourly["points"].as_array().unwrap();
    assert_eq!(points.len(), 24);
    for point in points {
        let risk = point["riskScore"].as_u64().unwrap();
        assert!((60..=100).contains(&risk));
    }

    let (status, stats) = get_json(app(), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["stats"]["suspicious"]["change"], 15.8);
    assert_eq!(stats["stats"]["amount"]["value"].as_i64(), Some(9845672));
}

#[tokio::test]
async fn test_integral_stat_values_have_no_fraction() {
    let response = app()
        .oneshot(Request::builder().uri("/api/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains(r#""value":15782,"#));
    assert!(text.contains(r#""value":9845672,"#));
    assert!(!text.contains("15782.0"));
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed_before_routing() {
    let (status, json) = get_json(app(), "/api/stats/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stats"]["suspicious"]["value"].as_i64(), Some(342));

    let (status, json) = get_json(app(), "/api/dashboard/?timeframe=7d").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["timeframe"], "7d");
}

#[tokio::test]
async fn test_seeded_state_serves_identical_series() {
    let (_, first) = get_json(app(), "/api/hourly").await;
    let (_, second) = get_json(app(), "/api/hourly").await;
    assert_eq!(first, second);
}
