use tracing::warn;

use crate::{Error, Result};

pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub allowed_origins: Vec<String>,
    pub display: DisplayConfig,
    pub seed: Option<u64>,
    pub default_timeframe: String,
}

/// Presentation settings shared by the web UI and the snapshot API.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DisplayConfig::DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl DisplayConfig {
    const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

    pub fn from_env() -> Self {
        Self {
            currency_symbol: std::env::var("FRAUDWATCH_CURRENCY_SYMBOL")
                .unwrap_or_else(|_| Self::DEFAULT_CURRENCY_SYMBOL.to_string()),
        }
    }
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_HTTP_PORT: u16 = 8080;
    const DEFAULT_TIMEFRAME: &str = "24h";

    pub fn from_env() -> Self {
        let host =
            std::env::var("FRAUDWATCH_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let http_port = std::env::var("FRAUDWATCH_HTTP_PORT")
            .ok()
            .map(|raw| {
                parse_port(&raw).unwrap_or_else(|e| {
                    warn!("{}, using default port {}", e, Self::DEFAULT_HTTP_PORT);
                    Self::DEFAULT_HTTP_PORT
                })
            })
            .unwrap_or(Self::DEFAULT_HTTP_PORT);
        Self {
            host,
            http_port,
            allowed_origins: parse_origins(
                &std::env::var("FRAUDWATCH_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            display: DisplayConfig::from_env(),
            seed: seed_from_env(),
            default_timeframe: std::env::var("FRAUDWATCH_DEFAULT_TIMEFRAME")
                .unwrap_or_else(|_| Self::DEFAULT_TIMEFRAME.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|_| Error::InvalidConfig {
        key: "FRAUDWATCH_HTTP_PORT",
        value: raw.to_string(),
    })
}

/// Reads `FRAUDWATCH_SEED`. An unparsable value is logged and ignored.
pub fn seed_from_env() -> Option<u64> {
    seed_from(std::env::var("FRAUDWATCH_SEED").ok().as_deref())
}

fn seed_from(raw: Option<&str>) -> Option<u64> {
    parse_seed(raw?)
        .map_err(|e| warn!("{}, falling back to fresh randomness", e))
        .ok()
}

pub fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| Error::InvalidConfig {
        key: "FRAUDWATCH_SEED",
        value: raw.to_string(),
    })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("9090"), Ok(9090));
        assert_eq!(parse_port(" 80 "), Ok(80));
        assert!(matches!(
            parse_port("http"),
            Err(Error::InvalidConfig { key: "FRAUDWATCH_HTTP_PORT", .. })
        ));
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed(" 7\n"), Ok(7));
        assert!(matches!(
            parse_seed("-1"),
            Err(Error::InvalidConfig { key: "FRAUDWATCH_SEED", .. })
        ));
    }

    #[test]
    fn test_seed_from_falls_back_on_invalid_value() {
        assert_eq!(seed_from(Some("1234")), Some(1234));
        assert_eq!(seed_from(Some("not-a-seed")), None);
        assert_eq!(seed_from(None), None);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:8081, http://example.com,"),
            vec!["http://localhost:8081", "http://example.com"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
    }

    #[test]
    fn test_display_config_default() {
        assert_eq!(DisplayConfig::default().currency_symbol, "₹");
    }
}
