//! SGD/JPY display formatting and conversion

use serde::{Deserialize, Serialize};

/// SGD per JPY used when no live rate is available
pub const DEFAULT_EXCHANGE_RATE: f64 = 0.0089;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "SGD")]
    Sgd,
    #[serde(rename = "JPY")]
    Jpy,
}

impl Currency {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Sgd => "S$",
            Currency::Jpy => "¥",
        }
    }
}

/// Round half away from zero to a whole number
#[must_use]
pub fn round_amount(amount: f64) -> f64 {
    amount.round()
}

/// Insert thousands separators into a whole number
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an amount for display. Rounds the displayed figure only.
#[must_use]
pub fn format_currency(amount: f64, currency: Currency) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = round_amount(amount) as i64;
    format!("{}{}", currency.symbol(), group_thousands(whole))
}

/// Shorthand for the common SGD case
#[must_use]
pub fn format_sgd(amount: f64) -> String {
    format_currency(amount, Currency::Sgd)
}

/// Whole yen with the ¥ prefix
#[must_use]
pub fn format_yen(yen: i64) -> String {
    format!("{}{}", Currency::Jpy.symbol(), group_thousands(yen))
}

/// Convert SGD to whole yen; `rate` is SGD per JPY
#[must_use]
pub fn convert_to_jpy(sgd_amount: f64, rate: f64) -> i64 {
    if rate <= 0.0 || !rate.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let yen = round_amount(sgd_amount / rate) as i64;
    yen
}

/// Yen bought by one Singapore dollar, for "1 SGD = ¥N" labels
#[must_use]
pub fn yen_per_sgd(rate: f64) -> i64 {
    convert_to_jpy(1.0, rate)
}
