//! Type-safe price representation using decimal arithmetic.
//!
//! Prices travel over the wire either as JSON numbers (`19.99`) or numeric
//! strings (`"19.99"`). Both are accepted on input; output is always a decimal
//! string so no precision is lost to floating point.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is empty or JSON `null`.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    NotANumber(String),
}

/// A product price.
///
/// ## Examples
///
/// ```
/// use jurassic_core::Price;
///
/// assert!(Price::parse("19.99").is_ok());
/// assert!(Price::parse(" 7 ").is_ok());
/// assert_eq!(Price::parse("19.99abc"), Price::parse("19.99"));
/// assert!(Price::parse("abc").is_err());
/// assert!(Price::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a price from its textual form.
    ///
    /// Leading whitespace is skipped and the longest leading decimal literal
    /// is read (optional sign, digits with an optional fraction, optional
    /// exponent). Anything after it is ignored, so `"19.99abc"` is `19.99`
    /// and `"12,50"` is `12`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Empty`] for blank input and
    /// [`PriceError::NotANumber`] when no digits start the text or the value
    /// does not fit a decimal.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim_start();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let not_a_number = || PriceError::NotANumber(s.trim().to_owned());
        let literal = leading_literal(trimmed).ok_or_else(not_a_number)?;

        let amount = if literal.contains('e') {
            Decimal::from_scientific(&literal)
        } else {
            Decimal::from_str(&literal)
        };

        amount.map(Self).map_err(|_| not_a_number())
    }

    /// Parse a price from an arbitrary JSON value.
    ///
    /// Numbers and numeric strings are accepted; every other JSON type is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Empty`] for `null` or an empty string and
    /// [`PriceError::NotANumber`] for anything that is not numeric.
    pub fn from_json(value: &Value) -> Result<Self, PriceError> {
        match value {
            Value::Null => Err(PriceError::Empty),
            Value::Number(n) => Self::parse(&n.to_string()),
            Value::String(s) => Self::parse(s),
            other => Err(PriceError::NotANumber(other.to_string())),
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

/// Normalized form of the decimal literal at the start of `s`, if any.
///
/// Digits are copied explicitly so separators such as `_` or `,` end the
/// literal instead of being skipped.
fn leading_literal(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut out = String::new();

    match bytes.first() {
        Some(b'-') => {
            out.push('-');
            pos += 1;
        }
        Some(b'+') => pos += 1,
        _ => {}
    }

    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let int_len = digits(pos);
    let int_part = s.get(pos..pos + int_len)?;
    pos += int_len;

    let mut frac_part = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_len = digits(pos + 1);
        frac_part = s.get(pos + 1..pos + 1 + frac_len)?;
        pos += 1 + frac_len;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    out.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(pos + 1), Some(b'+' | b'-')));
        let exp_len = digits(pos + 1 + sign_len);
        if exp_len > 0 {
            out.push('e');
            out.push_str(s.get(pos + 1..pos + 1 + sign_len + exp_len)?);
        }
    }

    Some(out)
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

// SQLx support (with postgres feature): stored as NUMERIC
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_decimal_string() {
        let price = Price::parse("19.99").unwrap();
        assert_eq!(price.amount(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Price::parse("abc"),
            Err(PriceError::NotANumber("abc".to_owned()))
        );
        assert!(Price::parse("NaN").is_err());
        assert!(Price::parse("-").is_err());
        assert!(Price::parse(".").is_err());
        assert!(Price::parse("Infinity").is_err());
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
    }

    #[test]
    fn test_parse_reads_leading_number() {
        assert_eq!(Price::parse("19.99abc").unwrap().amount(), Decimal::new(1999, 2));
        assert_eq!(Price::parse("12,50").unwrap().amount(), Decimal::new(12, 0));
        assert_eq!(Price::parse("1_000").unwrap().amount(), Decimal::new(1, 0));
        assert_eq!(Price::parse("  7 reais").unwrap().amount(), Decimal::new(7, 0));
    }

    #[test]
    fn test_parse_partial_literals() {
        assert_eq!(Price::parse(".5").unwrap().amount(), Decimal::new(5, 1));
        assert_eq!(Price::parse("5.").unwrap().amount(), Decimal::new(5, 0));
        assert_eq!(Price::parse("+3").unwrap().amount(), Decimal::new(3, 0));
        assert_eq!(Price::parse("-2.5").unwrap().amount(), Decimal::new(-25, 1));
        // Dangling exponent marker is not part of the number
        assert_eq!(Price::parse("4e").unwrap().amount(), Decimal::new(4, 0));
        assert_eq!(Price::parse("4e+x").unwrap().amount(), Decimal::new(4, 0));
    }

    #[test]
    fn test_parse_scientific_notation() {
        let price = Price::parse("1.5e2").unwrap();
        assert_eq!(price.amount(), Decimal::new(150, 0));
    }

    #[test]
    fn test_from_json_number_and_string() {
        assert_eq!(
            Price::from_json(&json!(19.99)).unwrap(),
            Price::parse("19.99").unwrap()
        );
        assert_eq!(
            Price::from_json(&json!("5")).unwrap().amount(),
            Decimal::new(5, 0)
        );
        assert_eq!(Price::from_json(&json!(0)).unwrap().amount(), Decimal::ZERO);
    }

    #[test]
    fn test_from_json_rejects_non_numeric_types() {
        assert_eq!(Price::from_json(&Value::Null), Err(PriceError::Empty));
        assert!(matches!(
            Price::from_json(&json!(true)),
            Err(PriceError::NotANumber(_))
        ));
        assert!(matches!(
            Price::from_json(&json!(["1"])),
            Err(PriceError::NotANumber(_))
        ));
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let price = Price::parse("19.90").unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"19.90\"");
    }
}
