//! Amount parsing.
//!
//! Accepted: an optional `+`/`-` sign, digits with at most one decimal point,
//! and an optional exponent (`1.5e3`). `,` and `_` may be used to group digits
//! in the integer part and are ignored. The result is always a finite
//! `Decimal`; there is no NaN or infinity.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::ParseError;

const GROUP_SEPARATORS: [char; 2] = [',', '_'];

/// Parses the amount token of a query.
///
/// # Errors
///
/// Returns `ParseError::InvalidAmount` if the token is not a number in the
/// accepted format or does not fit in a `Decimal`.
pub fn parse_amount(token: &str) -> Result<Decimal, ParseError> {
    let invalid = || ParseError::InvalidAmount(token.to_string());

    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if !integer
        .chars()
        .all(|c| c.is_ascii_digit() || GROUP_SEPARATORS.contains(&c))
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let digits: String = integer.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }

    let mut normalized = if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    };
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    let value = match exponent {
        None => Decimal::from_str(&normalized).map_err(|_| invalid())?,
        Some(exp) => {
            let (sign, digits) = match exp.as_bytes().first() {
                Some(b'-') => ("-", &exp[1..]),
                Some(b'+') => ("", &exp[1..]),
                _ => ("", exp),
            };
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            Decimal::from_scientific(&format!("{normalized}e{sign}{digits}"))
                .map_err(|_| invalid())?
        }
    };

    Ok(if negative { -value } else { value })
}
