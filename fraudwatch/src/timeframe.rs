use serde::{Deserialize, Serialize};
use shared::Error;
use std::str::FromStr;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Reporting window offered by the header selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Timeframe {
    #[default]
    #[strum(to_string = "24h")]
    #[serde(rename = "24h")]
    Last24Hours,
    #[strum(to_string = "7d")]
    #[serde(rename = "7d")]
    Last7Days,
    #[strum(to_string = "30d")]
    #[serde(rename = "30d")]
    Last30Days,
}

impl Timeframe {
    /// Option text shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Last24Hours => "Last 24 Hours",
            Timeframe::Last7Days => "Last 7 Days",
            Timeframe::Last30Days => "Last 30 Days",
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" => Ok(Timeframe::Last24Hours),
            "7d" => Ok(Timeframe::Last7Days),
            "30d" => Ok(Timeframe::Last30Days),
            other => Err(Error::InvalidTimeframe(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_timeframe_round_trips_through_str() {
        for tf in Timeframe::iter() {
            assert_eq!(tf.as_str().parse::<Timeframe>(), Ok(tf));
            assert_eq!(tf.to_string(), tf.as_str());
        }
        assert_eq!(Timeframe::COUNT, 3);
    }

    #[test]
    fn test_timeframe_rejects_unknown_value() {
        assert_eq!(
            "1y".parse::<Timeframe>(),
            Err(Error::InvalidTimeframe("1y".to_string()))
        );
    }

    #[test]
    fn test_timeframe_labels_follow_option_order() {
        let labels: Vec<_> = Timeframe::iter().map(Timeframe::label).collect();
        assert_eq!(labels, ["Last 24 Hours", "Last 7 Days", "Last 30 Days"]);
        assert_eq!(Timeframe::default(), Timeframe::Last24Hours);
    }
}
