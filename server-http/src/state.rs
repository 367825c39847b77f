use fraudwatch::{sample, DashboardSnapshot, Timeframe};
use shared::config::{Config, DisplayConfig};
use std::sync::Arc;
use tracing::{info, warn};

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub display: DisplayConfig,
    pub default_timeframe: Timeframe,
    seed: Option<u64>,
}

impl AppState {
    pub fn new(config: &Arc<Config>) -> Self {
        let default_timeframe = config
            .default_timeframe
            .parse::<Timeframe>()
            .unwrap_or_else(|e| {
                warn!("{}. Falling back to {}", e, Timeframe::default());
                Timeframe::default()
            });

        match config.seed {
            Some(seed) => info!("Serving seeded snapshots (seed={})", seed),
            None => info!("Serving a fresh random snapshot per request"),
        }

        Self {
            display: config.display.clone(),
            default_timeframe,
            seed: config.seed,
        }
    }

    /// State with fixed sample data, for tests and local demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            display: DisplayConfig::default(),
            default_timeframe: Timeframe::default(),
            seed: Some(seed),
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        match self.seed {
            Some(seed) => sample::seeded_snapshot(seed),
            None => sample::snapshot(),
        }
    }
}
