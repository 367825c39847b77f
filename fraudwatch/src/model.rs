use serde::{Deserialize, Serialize, Serializer};

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Value shown on a stat card. Anything that is not a number is displayed verbatim.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

// Whole numbers go out as JSON integers so `15782` does not become `15782.0`.
impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            StatValue::Number(n) => serializer.serialize_f64(*n),
            StatValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<u64> for StatValue {
    fn from(value: u64) -> Self {
        StatValue::Number(value as f64)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub value: StatValue,
    /// Signed period-over-period change, in percent.
    pub change: f64,
}

impl SummaryStat {
    pub fn new(value: impl Into<StatValue>, change: f64) -> Self {
        Self {
            value: value.into(),
            change,
        }
    }

    /// Numeric value, if the stat carries one.
    pub fn number(&self) -> Option<f64> {
        match self.value {
            StatValue::Number(n) => Some(n),
            StatValue::Text(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total: SummaryStat,
    pub suspicious: SummaryStat,
    pub amount: SummaryStat,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    pub time: String,
    pub transactions: u32,
    pub suspicious_count: u32,
    pub risk_score: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedTransaction {
    pub id: u32,
    pub time: String,
    pub amount: u64,
    pub sender: String,
    pub recipient: String,
    pub risk_score: f64,
    pub flags: Vec<String>,
}

impl FlaggedTransaction {
    pub fn new(
        id: u32,
        time: impl Into<String>,
        amount: u64,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        risk_score: f64,
        flags: &[&str],
    ) -> Self {
        Self {
            id,
            time: time.into(),
            amount,
            sender: sender.into(),
            recipient: recipient.into(),
            risk_score,
            flags: flags.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Everything the dashboard displays, built in one go and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: SummaryStats,
    pub hourly_data: Vec<HourlyPoint>,
    pub suspicious_transactions: Vec<FlaggedTransaction>,
}

impl DashboardSnapshot {
    /// Alert count shown in the header badge.
    pub fn alert_count(&self) -> StatValue {
        self.stats.suspicious.value.clone()
    }
}
