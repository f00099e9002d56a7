/**
 * Balances and amounts are fixed point integers counting ten-thousandths,
 * so repeated deposits and withdrawals never accumulate float error.
 *
 * Parsing takes an optional sign, then digits. Anything past 4 decimals is
 * rounded half away from zero, and values beyond the i64 range saturate, so
 * every well-formed number becomes some amount. Rendering drops trailing
 * zeros but always keeps one decimal, so 500 prints as "500.0" and 12.25 as
 * "12.25".
 */
use std::{fmt::Display, str::FromStr};

use crate::error::AmountError;

const FIXED_POINT_MAGNITUDE: i64 = 10000;
const EXPECTED_PRECISION: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    #[cfg(test)]
    pub const fn from_ten_thousandths(ten_thousandths: i64) -> Self {
        Amount(ten_thousandths)
    }

    pub fn is_positive(self) -> bool {
        self > Amount::ZERO
    }

    pub fn is_negative(self) -> bool {
        self < Amount::ZERO
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match string.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, string.strip_prefix('+').unwrap_or(string)),
        };
        let (units, decimals) = digits.split_once('.').unwrap_or((digits, ""));

        if units.is_empty() && decimals.is_empty() {
            return Err(AmountError::Empty);
        }
        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if !is_digits(units) || !is_digits(decimals) {
            return Err(AmountError::NotANumber(string.to_owned()));
        }

        let (kept, dropped) = decimals.split_at(decimals.len().min(EXPECTED_PRECISION));
        let decimal_multiplier = 10i64.pow((EXPECTED_PRECISION - kept.len()) as u32);
        let mut ten_thousandths = digits_to_i64(kept) * decimal_multiplier;
        if dropped.bytes().next().map_or(false, |digit| digit >= b'5') {
            ten_thousandths += 1;
        }

        let magnitude = digits_to_i64(units)
            .saturating_mul(FIXED_POINT_MAGNITUDE)
            .saturating_add(ten_thousandths);

        Ok(Amount(if negative { -magnitude } else { magnitude }))
    }
}

/// Caller guarantees ASCII digits only.
fn digits_to_i64(digits: &str) -> i64 {
    digits.bytes().fold(0i64, |value, digit| {
        value.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    })
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let scale = FIXED_POINT_MAGNITUDE.unsigned_abs();

        let decimals = format!("{:04}", magnitude % scale);
        let decimals = match decimals.trim_end_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        write!(f, "{}{}.{}", sign, magnitude / scale, decimals)
    }
}
