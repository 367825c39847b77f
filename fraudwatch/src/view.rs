//! Framework-independent model of the dashboard screen.
//!
//! [`DashboardView`] owns one snapshot and derives everything the UI draws
//! from it. The selected timeframe is carried for the header control only;
//! no derivation reads it.

use serde::Serialize;
use shared::config::DisplayConfig;
use strum::IntoEnumIterator;

use crate::chart::{ChartGeometry, SeriesPoint, Viewport, YDomain};
use crate::format::{self, ChangeTone};
use crate::model::{DashboardSnapshot, FlaggedTransaction, SummaryStat};
use crate::timeframe::Timeframe;

pub const TITLE: &str = "Fraud Detection Monitor";
pub const SUBTITLE: &str = "High-risk transaction analysis";
pub const TABLE_TITLE: &str = "High Risk Transactions";

pub const VOLUME_STROKE: &str = "#dc2626";
pub const RISK_STROKE: &str = "#ea580c";
pub const LINE_WIDTH: f64 = 2.0;
pub const RISK_AXIS: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatIcon {
    TrendingUp,
    AlertTriangle,
    AlertCircle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AccentColor {
    #[default]
    Blue,
    Red,
    Orange,
}

impl AccentColor {
    pub fn icon_class(self) -> &'static str {
        match self {
            AccentColor::Blue => "text-blue-500",
            AccentColor::Red => "text-red-500",
            AccentColor::Orange => "text-orange-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeframeOption {
    pub value: Timeframe,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub options: Vec<TimeframeOption>,
    pub alert_badge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCardModel {
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_class: &'static str,
    pub icon: StatIcon,
    pub color: AccentColor,
}

impl StatCardModel {
    pub fn new(
        title: impl Into<String>,
        stat: &SummaryStat,
        icon: StatIcon,
        color: AccentColor,
    ) -> Self {
        Self {
            title: title.into(),
            value: format::stat_value(&stat.value),
            change: format::change_label(stat.change),
            change_class: ChangeTone::for_change(stat.change).css_class(),
            icon,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: &'static str,
    /// Series key shown in the tooltip.
    pub series: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub geometry: ChartGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: u32,
    pub time: String,
    pub amount: String,
    pub sender: String,
    pub recipient: String,
    pub risk_badge: String,
    pub flags: Vec<String>,
}

impl TransactionRow {
    fn from_transaction(tx: &FlaggedTransaction, currency_symbol: &str) -> Self {
        Self {
            id: tx.id,
            time: tx.time.clone(),
            amount: format::currency(tx.amount, currency_symbol),
            sender: tx.sender.clone(),
            recipient: tx.recipient.clone(),
            risk_badge: format::risk_badge(tx.risk_score),
            flags: tx.flags.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTable {
    pub title: &'static str,
    pub badge: String,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    snapshot: DashboardSnapshot,
    display: DisplayConfig,
    timeframe: Timeframe,
}

impl DashboardView {
    pub fn new(snapshot: DashboardSnapshot, display: DisplayConfig) -> Self {
        Self {
            snapshot,
            display,
            timeframe: Timeframe::default(),
        }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Updates the header control. Displayed data is unaffected.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    pub fn header(&self) -> HeaderModel {
        HeaderModel {
            title: TITLE,
            subtitle: SUBTITLE,
            options: Timeframe::iter()
                .map(|value| TimeframeOption {
                    value,
                    label: value.label(),
                    selected: value == self.timeframe,
                })
                .collect(),
            alert_badge: format::alert_badge(&self.snapshot.alert_count()),
        }
    }

    pub fn stat_cards(&self) -> Vec<StatCardModel> {
        let stats = &self.snapshot.stats;
        vec![
            StatCardModel::new(
                "Total Transactions",
                &stats.total,
                StatIcon::TrendingUp,
                AccentColor::default(),
            ),
            StatCardModel::new(
                "High Risk Transactions",
                &stats.suspicious,
                StatIcon::AlertTriangle,
                AccentColor::Red,
            ),
            StatCardModel::new(
                format!("Total Amount Flagged ({})", self.display.currency_symbol),
                &stats.amount,
                StatIcon::AlertCircle,
                AccentColor::Orange,
            ),
        ]
    }

    pub fn volume_chart(&self, viewport: Viewport) -> ChartModel {
        let series: Vec<SeriesPoint> = self
            .snapshot
            .hourly_data
            .iter()
            .map(|p| SeriesPoint::new(&p.time, f64::from(p.suspicious_count)))
            .collect();
        ChartModel {
            title: "Suspicious Transaction Volume",
            series: "suspiciousCount",
            stroke: VOLUME_STROKE,
            stroke_width: LINE_WIDTH,
            geometry: ChartGeometry::layout(&series, YDomain::Auto, viewport),
        }
    }

    pub fn risk_chart(&self, viewport: Viewport) -> ChartModel {
        let series: Vec<SeriesPoint> = self
            .snapshot
            .hourly_data
            .iter()
            .map(|p| SeriesPoint::new(&p.time, f64::from(p.risk_score)))
            .collect();
        ChartModel {
            title: "Risk Score Trend",
            series: "riskScore",
            stroke: RISK_STROKE,
            stroke_width: LINE_WIDTH,
            geometry: ChartGeometry::layout(
                &series,
                YDomain::Fixed(RISK_AXIS.0, RISK_AXIS.1),
                viewport,
            ),
        }
    }

    pub fn table(&self) -> TransactionTable {
        let rows: Vec<TransactionRow> = self
            .snapshot
            .suspicious_transactions
            .iter()
            .map(|tx| TransactionRow::from_transaction(tx, &self.display.currency_symbol))
            .collect();
        TransactionTable {
            title: TABLE_TITLE,
            badge: format!("Showing {} suspicious transactions", rows.len()),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn view() -> DashboardView {
        DashboardView::new(sample::seeded_snapshot(11), DisplayConfig::default())
    }

    #[test]
    fn test_header() {
        let header = view().header();
        assert_eq!(header.title, "Fraud Detection Monitor");
        assert_eq!(header.alert_badge, "342 Alerts");

        let values: Vec<_> = header.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["24h", "7d", "30d"]);
        assert!(header.options[0].selected);
        assert!(!header.options[1].selected);
    }

    #[test]
    fn test_stat_cards() {
        let cards = view().stat_cards();
        assert_eq!(cards.len(), 3);

        assert_eq!(cards[0].value, "15,782");
        assert_eq!(cards[0].change, "+12.3%");
        assert_eq!(cards[0].change_class, "text-green-500");
        assert_eq!(cards[0].color.icon_class(), "text-blue-500");

        assert_eq!(cards[1].value, "342");
        assert_eq!(cards[1].icon, StatIcon::AlertTriangle);

        assert_eq!(cards[2].title, "Total Amount Flagged (₹)");
        assert_eq!(cards[2].value, "9,845,672");
        assert_eq!(cards[2].color, AccentColor::Orange);
    }

    #[test]
    fn test_stat_card_negative_change() {
        let card = StatCardModel::new(
            "Declines",
            &SummaryStat::new(42u64, -4.0),
            StatIcon::AlertCircle,
            AccentColor::Red,
        );
        assert_eq!(card.value, "42");
        assert_eq!(card.change, "-4%");
        assert!(!card.change.starts_with('+'));
        assert_eq!(card.change_class, "text-red-500");
    }

    #[test]
    fn test_table_rows_match_transactions() {
        let view = view();
        let table = view.table();
        assert_eq!(table.rows.len(), view.snapshot().suspicious_transactions.len());
        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.badge, "Showing 5 suspicious transactions");

        for (row, tx) in table.rows.iter().zip(&view.snapshot().suspicious_transactions) {
            assert_eq!(row.risk_badge, format!("{}%", (tx.risk_score * 100.0).round()));
        }
        assert_eq!(table.rows[0].amount, "₹52,999");
        assert_eq!(table.rows[0].risk_badge, "92%");
    }

    #[test]
    fn test_table_uses_configured_currency() {
        let view = DashboardView::new(
            sample::seeded_snapshot(1),
            DisplayConfig {
                currency_symbol: "$".to_string(),
            },
        );
        assert_eq!(view.table().rows[2].amount, "$149,999");
        assert_eq!(view.stat_cards()[2].title, "Total Amount Flagged ($)");
    }

    #[test]
    fn test_charts() {
        let view = view();
        let volume = view.volume_chart(Viewport::default());
        assert_eq!(volume.geometry.points.len(), 24);
        assert_eq!(volume.stroke, "#dc2626");
        assert_eq!(volume.geometry.domain.0, 0.0);

        let risk = view.risk_chart(Viewport::default());
        assert_eq!(risk.geometry.domain, (0.0, 100.0));
        assert_eq!(risk.stroke, "#ea580c");
        for (point, hour) in risk.geometry.points.iter().zip(&view.snapshot().hourly_data) {
            assert_eq!(point.value, f64::from(hour.risk_score));
            assert_eq!(point.label, hour.time);
        }
    }

    #[test]
    fn test_selecting_timeframe_changes_nothing_rendered() {
        let mut view = view();
        let cards = view.stat_cards();
        let volume = view.volume_chart(Viewport::default());
        let risk = view.risk_chart(Viewport::default());
        let table = view.table();
        let alerts = view.header().alert_badge;

        for tf in [Timeframe::Last7Days, Timeframe::Last30Days, Timeframe::Last24Hours] {
            view.select_timeframe(tf);
            assert_eq!(view.timeframe(), tf);
            assert_eq!(view.stat_cards(), cards);
            assert_eq!(view.volume_chart(Viewport::default()), volume);
            assert_eq!(view.risk_chart(Viewport::default()), risk);
            assert_eq!(view.table(), table);
            assert_eq!(view.header().alert_badge, alerts);
        }

        view.select_timeframe(Timeframe::Last7Days);
        let header = view.header();
        assert!(header.options[1].selected);
    }
}
