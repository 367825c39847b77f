//! Mock data behind the dashboard.
//!
//! Summary stats and flagged transactions are fixed. The hourly series is
//! random noise regenerated for every snapshot.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::debug;

use crate::model::{DashboardSnapshot, FlaggedTransaction, HourlyPoint, SummaryStat, SummaryStats};

pub const HOURS_PER_DAY: u32 = 24;

pub const TRANSACTIONS_RANGE: Range<u32> = 300..800;
pub const SUSPICIOUS_COUNT_RANGE: Range<u32> = 10..40;
pub const HOURLY_RISK_SCORE_RANGE: Range<u32> = 60..100;

/// Snapshot backed by the thread-local RNG.
pub fn snapshot() -> DashboardSnapshot {
    snapshot_with(&mut rand::rng())
}

/// Snapshot backed by a seeded RNG, identical for identical seeds.
pub fn seeded_snapshot(seed: u64) -> DashboardSnapshot {
    snapshot_with(&mut StdRng::seed_from_u64(seed))
}

pub fn snapshot_with<R: Rng + ?Sized>(rng: &mut R) -> DashboardSnapshot {
    let snapshot = DashboardSnapshot {
        stats: summary_stats(),
        hourly_data: hourly_series(rng),
        suspicious_transactions: flagged_transactions(),
    };
    debug!(
        hours = snapshot.hourly_data.len(),
        flagged = snapshot.suspicious_transactions.len(),
        "generated dashboard snapshot"
    );
    snapshot
}

pub fn summary_stats() -> SummaryStats {
    SummaryStats {
        total: SummaryStat::new(15_782u64, 12.3),
        suspicious: SummaryStat::new(342u64, 15.8),
        amount: SummaryStat::new(9_845_672u64, 8.4),
    }
}

/// One point per hour, labelled "0:00" through "23:00".
pub fn hourly_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyPoint> {
    let mut points: Vec<HourlyPoint> = (0..HOURS_PER_DAY)
        .rev()
        .map(|hour| HourlyPoint {
            time: format!("{hour}:00"),
            transactions: rng.random_range(TRANSACTIONS_RANGE),
            suspicious_count: rng.random_range(SUSPICIOUS_COUNT_RANGE),
            risk_score: rng.random_range(HOURLY_RISK_SCORE_RANGE),
        })
        .collect();
    // generated newest hour first
    points.reverse();
    points
}

pub fn flagged_transactions() -> Vec<FlaggedTransaction> {
    vec![
        FlaggedTransaction::new(
            1,
            "2024-10-26 09:23:15",
            52_999,
            "User745",
            "User162",
            0.92,
            &["Unusual Amount", "New Recipient"],
        ),
        FlaggedTransaction::new(
            2,
            "2024-10-26 09:15:32",
            25_000,
            "User891",
            "User443",
            0.88,
            &["Multiple Transactions", "Off-hours"],
        ),
        FlaggedTransaction::new(
            3,
            "2024-10-26 08:55:41",
            149_999,
            "User234",
            "User567",
            0.95,
            &["Large Amount", "Location Mismatch"],
        ),
        FlaggedTransaction::new(
            4,
            "2024-10-26 08:45:19",
            74_999,
            "User432",
            "User876",
            0.86,
            &["Velocity Check", "Pattern Match"],
        ),
        FlaggedTransaction::new(
            5,
            "2024-10-26 08:30:27",
            35_000,
            "User654",
            "User321",
            0.89,
            &["Suspicious IP", "Amount Pattern"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hourly_series_has_one_point_per_hour_in_order() {
        let points = hourly_series(&mut StdRng::seed_from_u64(7));
        assert_eq!(points.len(), 24);

        let labels: HashSet<_> = points.iter().map(|p| p.time.as_str()).collect();
        assert_eq!(labels.len(), 24);

        for (hour, point) in points.iter().enumerate() {
            assert_eq!(point.time, format!("{hour}:00"));
        }
        assert_eq!(points.first().unwrap().time, "0:00");
        assert_eq!(points.last().unwrap().time, "23:00");
    }

    #[test]
    fn test_hourly_values_stay_in_range() {
        for seed in 0..50 {
            for point in hourly_series(&mut StdRng::seed_from_u64(seed)) {
                assert!(TRANSACTIONS_RANGE.contains(&point.transactions));
                assert!(SUSPICIOUS_COUNT_RANGE.contains(&point.suspicious_count));
                assert!((60..=100).contains(&point.risk_score));
            }
        }
    }

    #[test]
    fn test_seeded_snapshot_is_deterministic() {
        assert_eq!(seeded_snapshot(99), seeded_snapshot(99));
        assert_ne!(
            seeded_snapshot(1).hourly_data,
            seeded_snapshot(2).hourly_data
        );
    }

    #[test]
    fn test_flagged_transactions_fixture() {
        let rows = flagged_transactions();
        assert_eq!(rows.len(), 5);

        let ids: HashSet<_> = rows.iter().map(|tx| tx.id).collect();
        assert_eq!(ids.len(), rows.len());

        for tx in &rows {
            assert!((0.0..=1.0).contains(&tx.risk_score));
            assert_eq!(tx.flags.len(), 2);
        }
        assert_eq!(rows[2].amount, 149_999);
        assert_eq!(rows[2].flags, ["Large Amount", "Location Mismatch"]);
    }

    #[test]
    fn test_summary_stats_fixture() {
        let stats = summary_stats();
        assert_eq!(stats.total.number(), Some(15_782.0));
        assert_eq!(stats.suspicious.number(), Some(342.0));
        assert_eq!(stats.amount.number(), Some(9_845_672.0));
        assert_eq!(stats.total.change, 12.3);
    }

    #[test]
    fn test_snapshot_uses_fixed_stats_and_rows() {
        let snapshot = snapshot();
        assert_eq!(snapshot.stats, summary_stats());
        assert_eq!(snapshot.suspicious_transactions, flagged_transactions());
        assert_eq!(snapshot.hourly_data.len(), 24);
    }
}
