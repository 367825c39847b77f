use shared::config::{seed_from_env, DisplayConfig};

#[derive(Clone)]
pub struct Config {
    pub display: DisplayConfig,
    /// Fixed seed for the hourly sample series; unset means fresh data per load.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            display: DisplayConfig::from_env(),
            seed: seed_from_env(),
        }
    }
}
