//! Locale-specific amount handling.
//!
//! Source files carry amounts in the Italian convention: comma as decimal
//! separator, optional period grouping, optional currency symbol. The
//! convention is confined to this pair of pure functions so it can be
//! swapped without touching pipeline logic.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.,+-]").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("No digits left after stripping symbols")]
    Empty,
    #[error("More than one decimal comma in {0:?}")]
    MultipleCommas(String),
    #[error("Unparseable amount {0:?}")]
    Unparseable(String),
}

/// Parses a locale-formatted amount into a decimal.
///
/// Currency symbols and whitespace are stripped. When a comma is present it
/// is the decimal separator and any period is grouping to be removed. A
/// period with no comma is taken as a decimal point: files that carry
/// decimals always use the comma convention, so a bare period most plausibly
/// comes from an already-normalized field.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountParseError> {
    let cleaned = STRIP_RE.replace_all(raw, "");
    if cleaned.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let normalized = if cleaned.contains(',') {
        if cleaned.matches(',').count() > 1 {
            return Err(AmountParseError::MultipleCommas(raw.trim().to_string()));
        }
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.into_owned()
    };

    Decimal::from_str(&normalized)
        .map_err(|_| AmountParseError::Unparseable(raw.trim().to_string()))
}

/// Formats a decimal back into the input convention: two fractional digits,
/// comma decimal separator, period grouping every three integer digits.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped},{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_plain_comma_decimal() {
        assert_eq!(parse_amount("100,50").unwrap(), dec("100.50"));
        assert_eq!(parse_amount("50,00").unwrap(), dec("50.00"));
        assert_eq!(parse_amount("0,10").unwrap(), dec("0.10"));
    }

    #[test]
    fn parses_grouped_amount() {
        assert_eq!(parse_amount("1.234,56").unwrap(), dec("1234.56"));
        assert_eq!(parse_amount("1.234.567,89").unwrap(), dec("1234567.89"));
    }

    #[test]
    fn strips_currency_symbols_and_whitespace() {
        assert_eq!(parse_amount("€ 1.234,56").unwrap(), dec("1234.56"));
        assert_eq!(parse_amount("  100,50 EUR ").unwrap(), dec("100.50"));
    }

    #[test]
    fn parses_negative_amounts() {
        assert_eq!(parse_amount("-1.234,56").unwrap(), dec("-1234.56"));
        assert_eq!(parse_amount("-50,00").unwrap(), dec("-50.00"));
    }

    #[test]
    fn bare_period_is_decimal_point() {
        // No comma, so the period is not treated as grouping.
        assert_eq!(parse_amount("1.234").unwrap(), dec("1.234"));
        assert_eq!(parse_amount("1234.56").unwrap(), dec("1234.56"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_amount("abc"), Err(AmountParseError::Empty));
        assert_eq!(parse_amount(""), Err(AmountParseError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountParseError::Empty));
        assert!(matches!(
            parse_amount("1,2,3"),
            Err(AmountParseError::MultipleCommas(_))
        ));
        assert!(matches!(
            parse_amount("12-34"),
            Err(AmountParseError::Unparseable(_))
        ));
    }

    #[test]
    fn formats_two_fraction_digits() {
        assert_eq!(format_amount(dec("100.5")), "100,50");
        assert_eq!(format_amount(dec("0")), "0,00");
        assert_eq!(format_amount(dec("50")), "50,00");
    }

    #[test]
    fn formats_with_grouping() {
        assert_eq!(format_amount(dec("1234.56")), "1.234,56");
        assert_eq!(format_amount(dec("1234567.89")), "1.234.567,89");
        assert_eq!(format_amount(dec("1000000")), "1.000.000,00");
        assert_eq!(format_amount(dec("999")), "999,00");
    }

    #[test]
    fn formats_negative_and_rounds() {
        assert_eq!(format_amount(dec("-1234.567")), "-1.234,57");
        assert_eq!(format_amount(dec("-0.5")), "-0,50");
    }

    #[test]
    fn parse_format_round_trip() {
        for raw in ["1.234,56", "100,50", "0,00", "-9.876,54"] {
            assert_eq!(format_amount(parse_amount(raw).unwrap()), raw);
        }
    }
}
