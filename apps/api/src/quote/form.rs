//! Raw form values and the defaulting rules applied to them.
//!
//! The form submits whatever the user typed: numbers, numeric strings, empty
//! strings, or junk. Nothing here fails — each value either parses or falls
//! back to its documented default.

use serde::{Deserialize, Serialize};

/// A single form field as submitted, either a JSON number or the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    /// True for empty or whitespace-only text. A submitted number is never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FormValue::Number(_) => false,
            FormValue::Text(s) => s.trim().is_empty(),
        }
    }

    /// Parses the value as a number. Returns `None` for blank or non-numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormValue::Number(n) => Some(*n),
            FormValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// The value as the user typed it, for echoing back in quotes.
    pub fn display(&self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s.trim().to_string(),
        }
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        FormValue::Number(n)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

/// Returns the field only if it was filled in.
pub fn present(value: Option<&FormValue>) -> Option<&FormValue> {
    value.filter(|v| !v.is_blank())
}

/// Sticker quantity: whole part of the input, or 1 when absent, non-numeric or below 1.
pub fn resolve_quantity(value: Option<&FormValue>) -> u64 {
    value
        .and_then(FormValue::as_number)
        .filter(|n| n.is_finite())
        .map(f64::trunc)
        .filter(|n| *n >= 1.0)
        // Saturates at u64::MAX for absurdly large inputs.
        .map(|n| n as u64)
        .unwrap_or(1)
}

/// VAT rate from a percentage field (`15` → `0.15`).
///
/// Falls back to `default_rate` when the field is absent, non-numeric, or
/// outside 0–100%.
pub fn resolve_vat_rate(percent: Option<&FormValue>, default_rate: f64) -> f64 {
    percent
        .and_then(FormValue::as_number)
        .map(|p| p / 100.0)
        .filter(|rate| (0.0..=1.0).contains(rate))
        .unwrap_or(default_rate)
}

/// Vinyl cost per m². Falls back to `default_cost` unless a positive finite number was given.
pub fn resolve_vinyl_cost(value: Option<&FormValue>, default_cost: f64) -> f64 {
    value
        .and_then(FormValue::as_number)
        .filter(|c| c.is_finite() && *c > 0.0)
        .unwrap_or(default_cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_numbers_and_text() {
        let values: Vec<FormValue> = serde_json::from_str(r#"[12.5, "40", ""]"#).unwrap();
        assert_eq!(values[0], FormValue::Number(12.5));
        assert_eq!(values[1], FormValue::Text("40".to_string()));
        assert!(values[2].is_blank());
    }

    #[test]
    fn test_as_number_rejects_junk() {
        assert_eq!(FormValue::from(" 15 ").as_number(), Some(15.0));
        assert_eq!(FormValue::from("abc").as_number(), None);
        assert_eq!(FormValue::from("").as_number(), None);
    }

    #[test]
    fn test_display_echoes_input() {
        assert_eq!(FormValue::from(100.0).display(), "100");
        assert_eq!(FormValue::from(12.5).display(), "12.5");
        assert_eq!(FormValue::from(" 75 ").display(), "75");
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        assert_eq!(resolve_quantity(None), 1);
        assert_eq!(resolve_quantity(Some(&FormValue::from("x"))), 1);
        assert_eq!(resolve_quantity(Some(&FormValue::from(0.0))), 1);
        assert_eq!(resolve_quantity(Some(&FormValue::from(-4.0))), 1);
        assert_eq!(resolve_quantity(Some(&FormValue::from("15"))), 15);
        assert_eq!(resolve_quantity(Some(&FormValue::from(2.7))), 2);
        assert_eq!(
            resolve_quantity(Some(&FormValue::from("1e12"))),
            1_000_000_000_000
        );
    }

    #[test]
    fn test_vat_rate_from_percent() {
        assert_eq!(resolve_vat_rate(Some(&FormValue::from("15")), 0.2), 0.15);
        assert_eq!(resolve_vat_rate(Some(&FormValue::from(0.0)), 0.15), 0.0);
        assert_eq!(resolve_vat_rate(None, 0.15), 0.15);
        assert_eq!(resolve_vat_rate(Some(&FormValue::from("n/a")), 0.15), 0.15);
        assert_eq!(resolve_vat_rate(Some(&FormValue::from(250.0)), 0.15), 0.15);
    }

    #[test]
    fn test_vinyl_cost_defaults() {
        assert_eq!(resolve_vinyl_cost(Some(&FormValue::from("500")), 420.0), 500.0);
        assert_eq!(resolve_vinyl_cost(Some(&FormValue::from("")), 420.0), 420.0);
        assert_eq!(resolve_vinyl_cost(Some(&FormValue::from(0.0)), 420.0), 420.0);
        assert_eq!(resolve_vinyl_cost(None, 420.0), 420.0);
    }
}
