use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// High-precision decimal that preserves its lexical form.
///
/// FHIR requires decimals to keep their original precision on a round trip:
/// `1.50` must be written back as `1.50`, never `1.5`. This type stores the
/// literal exactly as it appeared on the wire next to the parsed `Decimal`
/// used for comparisons and arithmetic.
///
/// # Examples
///
/// ```rust
/// use fhir_codec::PreciseDecimal;
/// use rust_decimal::Decimal;
///
/// let precise = PreciseDecimal::parse("12.340").expect("valid literal");
/// assert_eq!(precise.original_string(), "12.340");
/// assert_eq!(precise.value(), Some(Decimal::new(12340, 3)));
///
/// assert!(PreciseDecimal::parse("12.").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PreciseDecimal {
    /// Parsed value, `None` when the literal is valid but outside `Decimal`'s range
    value: Option<Decimal>,
    /// The literal text, reproduced verbatim on encode
    original_string: Arc<str>,
}

/// Equality is numeric, so `10.0 == 10.00`.
impl PartialEq for PreciseDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PreciseDecimal {}

impl PartialOrd for PreciseDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// `None` (out of range) sorts before every in-range value.
impl Ord for PreciseDecimal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl PreciseDecimal {
    /// Creates a `PreciseDecimal` from an already parsed value and its text.
    pub fn from_parts(value: Option<Decimal>, original_string: String) -> Self {
        Self {
            value,
            original_string: Arc::from(original_string.as_str()),
        }
    }

    /// Parses a FHIR decimal literal (JSON number grammar).
    ///
    /// Returns `None` when `s` is not a decimal literal at all. A literal that
    /// is well formed but too large for `Decimal` is kept with `value() == None`.
    pub fn parse(s: &str) -> Option<Self> {
        if !is_decimal_literal(s) {
            return None;
        }
        Some(Self {
            value: Self::parse_decimal_string(s),
            original_string: Arc::from(s),
        })
    }

    fn parse_decimal_string(s: &str) -> Option<Decimal> {
        if s.contains(['e', 'E']) {
            Decimal::from_scientific(&s.replace('E', "e")).ok()
        } else {
            s.parse::<Decimal>().ok()
        }
    }

    /// Returns the parsed decimal value if it fits in a `Decimal`.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Returns the literal text, including trailing zeros and exponent.
    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// The literal as a JSON number.
    pub fn to_json_number(&self) -> Option<serde_json::Number> {
        serde_json::Number::from_str(&self.original_string).ok()
    }
}

/// Checks `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let start = i;
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let start = i;
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
        if i == start {
            return false;
        }
    }
    i == bytes.len()
}

impl From<Decimal> for PreciseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            value: Some(value),
            original_string: Arc::from(value.to_string()),
        }
    }
}

impl std::fmt::Display for PreciseDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original_string)
    }
}

/// Serializes as a JSON number carrying the original literal.
impl Serialize for PreciseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_json_number() {
            Some(number) => number.serialize(serializer),
            None => Err(serde::ser::Error::custom(format!(
                "invalid decimal literal '{}'",
                self.original_string
            ))),
        }
    }
}

/// Accepts a JSON number or a string holding a decimal literal.
impl<'de> Deserialize<'de> for PreciseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json_value = serde_json::Value::deserialize(deserializer)?;
        let text = match &json_value {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            other => {
                return Err(de::Error::custom(format!(
                    "expected a decimal, found {}",
                    other
                )));
            }
        };
        PreciseDecimal::parse(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid decimal literal '{}'", text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn keeps_trailing_zeros() {
        let precise = PreciseDecimal::parse("1.50").expect("valid");
        assert_eq!(precise.original_string(), "1.50");
        assert_eq!(precise.value(), Some(dec!(1.5)));
        assert_eq!(precise, PreciseDecimal::from(dec!(1.5)));
    }

    #[test]
    fn accepts_scientific_notation() {
        let precise = PreciseDecimal::parse("1.23E2").expect("valid");
        assert_eq!(precise.value(), Some(dec!(123)));
        assert_eq!(precise.original_string(), "1.23E2");
    }

    #[test]
    fn rejects_non_literals() {
        for text in ["", "-", "01", "1.", ".5", "1e", "abc", "1.0.0", " 1", "+1", "NaN"] {
            assert!(PreciseDecimal::parse(text).is_none(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn out_of_range_literals_keep_their_text() {
        let precise = PreciseDecimal::parse("1e400").expect("lexically valid");
        assert_eq!(precise.value(), None);
        assert_eq!(precise.original_string(), "1e400");
    }

    #[test]
    fn serializes_original_literal() {
        let precise = PreciseDecimal::parse("185.00").expect("valid");
        assert_eq!(serde_json::to_string(&precise).expect("serializes"), "185.00");
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let from_number: PreciseDecimal = serde_json::from_str("0.010").expect("number");
        assert_eq!(from_number.original_string(), "0.010");
        let from_string: PreciseDecimal = serde_json::from_str("\"185\"").expect("string");
        assert_eq!(from_string.value(), Some(dec!(185)));
        assert!(serde_json::from_str::<PreciseDecimal>("true").is_err());
    }

    #[test]
    fn orders_numerically() {
        let small = PreciseDecimal::parse("2.5").expect("valid");
        let large = PreciseDecimal::parse("10").expect("valid");
        assert!(small < large);
    }
}
