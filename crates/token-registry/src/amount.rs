//! Conversion between human-readable decimal strings and smallest-unit
//! integer amounts.
//!
//! Parsing is exact (pure integer arithmetic) because the result feeds
//! transaction construction. Formatting is display-grade: it rounds to a
//! fixed per-asset-class number of fractional digits.

use num_bigint::BigUint;

use crate::error::AmountError;
use crate::token::TokenSymbol;

/// Parse a user-entered decimal string into smallest units of `symbol`.
///
/// The fractional part is right-padded with zeros to the token's decimals,
/// or truncated (not rounded) when it is longer than the token can
/// represent. Rejects anything that is not a non-negative decimal numeral.
pub fn parse_amount(text: &str, symbol: TokenSymbol) -> Result<BigUint, AmountError> {
    parse_units(text, symbol.decimals())
}

/// Parse a decimal string at an explicit scale.
pub fn parse_units(text: &str, decimals: u8) -> Result<BigUint, AmountError> {
    if text.is_empty() {
        return Err(AmountError::Empty);
    }
    if text.starts_with('-') || text.starts_with('+') {
        return Err(AmountError::Signed(text.to_string()));
    }

    let (whole, frac) = match text.split_once('.') {
        None => (text, ""),
        Some((whole, frac)) => {
            if frac.contains('.') {
                return Err(AmountError::MultipleSeparators(text.to_string()));
            }
            (whole, frac)
        }
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(AmountError::Empty);
    }
    for c in whole.chars().chain(frac.chars()) {
        if !c.is_ascii_digit() {
            return Err(AmountError::InvalidDigit {
                input: text.to_string(),
                found: c,
            });
        }
    }

    let decimals = decimals as usize;
    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    if frac.len() >= decimals {
        // Truncate below the token's resolution; never round user input up.
        digits.push_str(&frac[..decimals]);
    } else {
        digits.push_str(frac);
        digits.extend(std::iter::repeat('0').take(decimals - frac.len()));
    }

    // Every byte is an ASCII digit here.
    let mut value = BigUint::default();
    for b in digits.bytes() {
        value = value * 10u8 + (b - b'0');
    }
    Ok(value)
}

/// Render a smallest-unit amount of `symbol` for display.
///
/// Exact fixed-point arithmetic, rounded half-up to the asset class's
/// fractional resolution: 6 digits for Bitcoin-denominated assets, 2 for
/// stablecoins, 4 for everything else. Display-grade only; use
/// [`format_units`] when the full value matters.
pub fn format_amount(raw: &BigUint, symbol: TokenSymbol) -> String {
    let display = symbol.asset_class().display_decimals();
    let decimals = symbol.decimals() as usize;

    let scaled = if decimals <= display {
        raw * pow10(display - decimals)
    } else {
        let divisor = pow10(decimals - display);
        (raw + &divisor / 2u32) / divisor
    };

    render_fixed(&scaled, display)
}

/// Render a smallest-unit amount at full precision, trailing zeros
/// trimmed. `42` at 6 decimals renders as `"0.000042"`, `1_500_000` as
/// `"1.5"`, zero as `"0.0"`.
pub fn format_units(raw: &BigUint, decimals: u8) -> String {
    let s = raw.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return s;
    }

    if s.len() <= decimals {
        let zeros = decimals - s.len();
        let mut result = String::from("0.");
        result.extend(std::iter::repeat('0').take(zeros));
        result.push_str(&s);
        let trimmed = result.trim_end_matches('0');
        if trimmed.ends_with('.') {
            return format!("{trimmed}0");
        }
        return trimmed.to_string();
    }

    let (integer_part, decimal_part) = s.split_at(s.len() - decimals);
    let trimmed = decimal_part.trim_end_matches('0');
    if trimmed.is_empty() {
        integer_part.to_string()
    } else {
        format!("{integer_part}.{trimmed}")
    }
}

fn pow10(n: usize) -> BigUint {
    BigUint::from(10u8).pow(n as u32)
}

/// Render an integer scaled by 10^digits with exactly `digits` fractional
/// digits, zero-padded.
fn render_fixed(value: &BigUint, digits: usize) -> String {
    let s = value.to_string();
    if digits == 0 {
        return s;
    }
    if s.len() <= digits {
        let mut result = String::from("0.");
        result.extend(std::iter::repeat('0').take(digits - s.len()));
        result.push_str(&s);
        result
    } else {
        let (integer_part, decimal_part) = s.split_at(s.len() - digits);
        format!("{integer_part}.{decimal_part}")
    }
}
