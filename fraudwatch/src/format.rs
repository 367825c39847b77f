//! Display formatting for stat cards, amounts and risk badges.

use crate::model::StatValue;

/// Values above this get thousands separators on stat cards.
pub const GROUPING_THRESHOLD: f64 = 999.0;

const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTone {
    Affirmative,
    Warning,
}

impl ChangeTone {
    pub fn for_change(change: f64) -> Self {
        if change >= 0.0 {
            ChangeTone::Affirmative
        } else {
            ChangeTone::Warning
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ChangeTone::Affirmative => "text-green-500",
            ChangeTone::Warning => "text-red-500",
        }
    }
}

/// Formats a number the way an en-US locale would: comma-grouped integer
/// part, at most three fraction digits.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Plain number rendering, no grouping. Integral values print without a
/// fractional part.
pub fn plain_number(value: f64) -> String {
    format!("{value}")
}

pub fn stat_value(value: &StatValue) -> String {
    match value {
        StatValue::Number(n) if *n > GROUPING_THRESHOLD => group_thousands(*n),
        StatValue::Number(n) => plain_number(*n),
        StatValue::Text(text) => text.clone(),
    }
}

/// "+12.3%", "-4%", "0%". Zero gets no sign but still reads as affirmative.
pub fn change_label(change: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{sign}{}%", plain_number(change))
}

pub fn currency(amount: u64, symbol: &str) -> String {
    format!("{symbol}{}", group_thousands(amount as f64))
}

/// Risk score in [0, 1] as a whole percentage.
pub fn risk_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

pub fn risk_badge(score: f64) -> String {
    format!("{}%", risk_percent(score))
}

pub fn alert_badge(count: &StatValue) -> String {
    let count = match count {
        StatValue::Number(n) => plain_number(*n),
        StatValue::Text(text) => text.clone(),
    };
    format!("{count} Alerts")
}
