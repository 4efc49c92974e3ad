use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Hkd,
    Usd,
    Jpy,
    Twd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Hkd,
        Currency::Usd,
        Currency::Jpy,
        Currency::Twd,
        Currency::Eur,
        Currency::Gbp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Hkd => "HKD",
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
            Currency::Twd => "TWD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(LedgerError::UnsupportedCurrency(s.to_string()))
    }
}

/// Static rates expressed as units of the reference currency per one unit
/// of each currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    reference: Currency,
    rates: HashMap<Currency, f64>,
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable::new(
            Currency::Hkd,
            [
                (Currency::Hkd, 1.0),
                (Currency::Usd, 7.8),
                (Currency::Jpy, 0.052),
                (Currency::Twd, 0.24),
                (Currency::Eur, 8.4),
                (Currency::Gbp, 9.8),
            ],
        )
    }
}

impl RateTable {
    pub fn new(reference: Currency, rates: impl IntoIterator<Item = (Currency, f64)>) -> Self {
        let mut rates: HashMap<Currency, f64> = rates.into_iter().collect();
        rates.insert(reference, 1.0);
        RateTable { reference, rates }
    }

    pub fn reference(&self) -> Currency {
        self.reference
    }

    pub fn rate(&self, currency: Currency) -> Result<f64, LedgerError> {
        match self.rates.get(&currency) {
            Some(&rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
            Some(&rate) => Err(LedgerError::InvalidExchangeRate(rate)),
            None => Err(LedgerError::UnsupportedCurrency(currency.to_string())),
        }
    }

    /// Units of `to` per one unit of `from`.
    pub fn rate_between(&self, from: Currency, to: Currency) -> Result<f64, LedgerError> {
        if from == to {
            return Ok(1.0);
        }
        Ok(self.rate(from)? / self.rate(to)?)
    }
}
