use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INR_CURRENCY_CODE: &str = "INR";

//--------------------------------------       Paise         ---------------------------------------------------------
/// An amount of Indian rupees, expressed in paise (1/100 INR).
///
/// The gateway expects amounts as decimal strings with two fractional digits, which is what the `Display`
/// implementation produces. `FromStr` accepts whole rupees (`"100"`) as well as one or two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paise(i64);

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in paise: {0}")]
pub struct PaiseConversionError(String);

impl From<i64> for Paise {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Paise {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Display for Paise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Paise {
    type Err = PaiseConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let mut parts = digits.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(PaiseConversionError(format!("'{s}' is not a valid rupee amount")));
        }
        let rupees =
            whole.parse::<i64>().map_err(|e| PaiseConversionError(format!("'{s}' is not a valid rupee amount. {e}")))?;
        let paise = match parts.next() {
            None => 0,
            Some(frac) if frac.is_empty() || frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) => {
                return Err(PaiseConversionError(format!("'{s}' must have one or two decimal places")));
            },
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().unwrap_or_default() * 10,
            Some(frac) => frac.parse::<i64>().unwrap_or_default(),
        };
        let total = rupees
            .checked_mul(100)
            .and_then(|v| v.checked_add(paise))
            .ok_or_else(|| PaiseConversionError(format!("'{s}' is too large")))?;
        Ok(Self(if negative { -total } else { total }))
    }
}
