use serde::Deserialize;

/// Query string accepted by GET /api/dashboard
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub timeframe: Option<String>,
}
