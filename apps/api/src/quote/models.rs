use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::LayoutResult;
use crate::quote::form::FormValue;

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Vinyl finish. Required before any quote is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Gloss,
    #[serde(alias = "matt")]
    Matte,
}

impl Material {
    /// Label printed on the customer quote.
    pub fn label(self) -> &'static str {
        match self {
            Material::Gloss => "Gloss",
            Material::Matte => "MATT",
        }
    }
}

/// One sticker row from the form, exactly as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StickerInput {
    pub width: Option<FormValue>,
    pub height: Option<FormValue>,
    pub quantity: Option<FormValue>,
}

/// A validated sticker request, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickerSpec {
    pub width_mm: f64,
    pub height_mm: f64,
    pub quantity: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

/// A priced sticker line. All money figures are already rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// 1-based position of the row in the form.
    pub index: usize,
    /// Dimensions as typed, e.g. `100x150`.
    pub dimensions: String,
    pub spec: StickerSpec,
    pub layout: LayoutResult,
    pub rows: u64,
    pub total_stickers: u64,
    pub line_total_excl_vat: f64,
    /// Only present when the quote includes VAT.
    pub line_total_incl_vat: Option<f64>,
}

/// A sticker row that could not be priced. Excluded from totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedLine {
    pub index: usize,
    pub dimensions: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteLine {
    Priced(OrderLine),
    Rejected(RejectedLine),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub total_excl_vat: f64,
    /// Only present when the quote includes VAT.
    pub total_incl_vat: Option<f64>,
    pub below_minimum_order: bool,
}

/// One calculation result — the on-screen form and the copyable text share these figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub material: Material,
    pub vat_rate: f64,
    pub include_vat: bool,
    pub rounded_corners: bool,
    pub lines: Vec<QuoteLine>,
    /// `None` when nothing could be priced.
    pub totals: Option<QuoteTotals>,
    pub notices: Vec<String>,
    /// Customer-facing text. `None` when there are no totals.
    pub text: Option<String>,
}

impl Quote {
    pub fn priced_lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.iter().filter_map(|line| match line {
            QuoteLine::Priced(order) => Some(order),
            QuoteLine::Rejected(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_accepts_matt_spelling() {
        let m: Material = serde_json::from_str(r#""matt""#).unwrap();
        assert_eq!(m, Material::Matte);
        let g: Material = serde_json::from_str(r#""gloss""#).unwrap();
        assert_eq!(g.label(), "Gloss");
        assert_eq!(Material::Matte.label(), "MATT");
    }

    #[test]
    fn test_quote_line_is_tagged_by_status() {
        let line = QuoteLine::Rejected(RejectedLine {
            index: 2,
            dimensions: "0x10".to_string(),
            reason: "Invalid dimensions".to_string(),
        });
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["index"], 2);
    }
}
