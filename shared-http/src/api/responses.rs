use chrono::{DateTime, Utc};
use fraudwatch::format::risk_percent;
use fraudwatch::{
    DashboardSnapshot, FlaggedTransaction, HourlyPoint, StatValue, SummaryStats, Timeframe,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response body for GET /api/dashboard
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Echo of the requested window. Does not filter the data.
    pub timeframe: Timeframe,
    pub generated_at: DateTime<Utc>,
    pub alert_count: StatValue,
    pub stats: SummaryStats,
    pub hourly_data: Vec<HourlyPoint>,
    pub suspicious_transactions: Vec<FlaggedTransaction>,
}

impl DashboardResponse {
    pub fn new(timeframe: Timeframe, snapshot: DashboardSnapshot) -> Self {
        Self {
            timeframe,
            generated_at: Utc::now(),
            alert_count: snapshot.alert_count(),
            stats: snapshot.stats,
            hourly_data: snapshot.hourly_data,
            suspicious_transactions: snapshot.suspicious_transactions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: SummaryStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HourlyResponse {
    pub points: Vec<HourlyPoint>,
}

/// One row of GET /api/transactions, cased like the dashboard rows.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: u32,
    pub time: String,
    pub amount: u64,
    pub sender: String,
    pub recipient: String,
    pub risk_score: f64,
    /// Same value as `risk_score`, under the name older clients read.
    pub fraud_probability: f64,
    pub risk_percent: u32,
    pub flags: Vec<String>,
}

impl From<FlaggedTransaction> for TransactionResponse {
    fn from(tx: FlaggedTransaction) -> Self {
        Self {
            id: tx.id,
            time: tx.time,
            amount: tx.amount,
            sender: tx.sender,
            recipient: tx.recipient,
            risk_score: tx.risk_score,
            fraud_probability: tx.risk_score,
            risk_percent: risk_percent(tx.risk_score),
            flags: tx.flags,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListTransactionsResponse {
    pub count: usize,
    pub transactions: Vec<TransactionResponse>,
}

impl ListTransactionsResponse {
    pub fn new(transactions: Vec<FlaggedTransaction>) -> Self {
        let transactions: Vec<TransactionResponse> =
            transactions.into_iter().map(TransactionResponse::from).collect();
        Self {
            count: transactions.len(),
            transactions,
        }
    }
}
