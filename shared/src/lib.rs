// shared/src/lib.rs

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid timeframe: {0} (expected 24h, 7d or 30d)")]
    InvalidTimeframe(String),
    #[error("invalid config value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("internal: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
