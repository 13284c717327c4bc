//! Numeric Codec
//!
//! Ledger amounts and counters arrive as decimal strings that can exceed 64-bit range,
//! so everything here stays in `BigDecimal` with a zero scale.

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::constants::SUBUNIT_DECIMALS;

/// Parse a base-10 non-negative integer string
///
/// Lossy by contract: empty strings, signs, decimal points, exponents or any other
/// non-digit character yield zero instead of an error. Callers cannot tell a real
/// zero from a failed parse.
pub fn parse_integer(raw: &str) -> BigDecimal {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return BigDecimal::from(0);
    }

    BigDecimal::from_str(raw).unwrap_or_else(|_| BigDecimal::from(0))
}

/// Convert a subunit amount to whole coins, truncating any fractional part
///
/// The division is done by shifting the scale, so it is exact for any magnitude.
pub fn to_whole_units(subunits: &BigDecimal) -> BigDecimal {
    let (digits, scale) = subunits.as_bigint_and_exponent();
    BigDecimal::new(digits, scale + SUBUNIT_DECIMALS).with_scale(0)
}
