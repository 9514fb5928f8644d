use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use thiserror::Error;

/// Fixed-point scale: four decimal places per whole unit
const UNITS_PER_WHOLE: i64 = 10_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}: {1:?}")]
    Parse(&'static str, String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Parses a user-supplied decimal string.
    ///
    /// The fractional part is padded or truncated to four digits, so
    /// `"12.5"` and `"12.50000"` both parse to the same value.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let parse_err = |reason| MoneyError::Parse(reason, string.to_string());

        let trimmed = string.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('.');

        let whole = parts.next().unwrap_or("");
        let frac = parts.next().unwrap_or("0");

        if parts.next().is_some() {
            return Err(parse_err("Too many decimal points"));
        }

        if whole.is_empty() && frac.is_empty() {
            return Err(parse_err("Empty amount"));
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(parse_err("Expected only digits around the decimal point"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| parse_err("Amount out of range"))?
        };

        let frac: i64 = format!("{frac:0<4}")[..4]
            .parse()
            .map_err(|_| parse_err("Amount out of range"))?;

        let units = whole
            .checked_mul(UNITS_PER_WHOLE)
            .and_then(|units| units.checked_add(frac))
            .ok_or_else(|| parse_err("Amount out of range"))?;

        return Ok(Self(if negative { -units } else { units }));
    }

    /// Converts a decimal number (e.g. out of a JSON snapshot), rounding to
    /// the fourth decimal place. Non-finite values are rejected.
    pub fn from_f64(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::Parse("Not a finite number", value.to_string()));
        }

        let units = (value * UNITS_PER_WHOLE as f64).round();

        if units >= Self::MAX.0 as f64 || units <= Self::MIN.0 as f64 {
            return Err(MoneyError::Parse("Amount out of range", value.to_string()));
        }

        return Ok(Self(units as i64));
    }

    pub fn to_f64(&self) -> f64 {
        return self.0 as f64 / UNITS_PER_WHOLE as f64;
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow("add", *self, *other));
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MoneyError::Underflow("sub", *self, *other));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn is_zero(&self) -> bool {
        return self.0 == 0;
    }
}

impl fmt::Display for Money {
    /// Formats with at least two decimal places: `100.00`, `0.50`, `1.2345`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let units = self.0.unsigned_abs();

        let whole = units / UNITS_PER_WHOLE as u64;
        let mut frac = format!("{:04}", units % UNITS_PER_WHOLE as u64);

        while frac.len() > 2 && frac.ends_with('0') {
            frac.pop();
        }

        return write!(f, "{sign}{whole}.{frac}");
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return serializer.serialize_f64(self.to_f64());
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        return Self::from_f64(value).map_err(serde::de::Error::custom);
    }
}
