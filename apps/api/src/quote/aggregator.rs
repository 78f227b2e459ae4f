//! Quote Aggregator — folds priced sticker lines into order totals.
//!
//! # Order rules
//! - No material → the whole quote is refused before any line is priced
//! - Lines missing width or height are skipped; their row number still counts
//! - Unpriceable lines are listed with their reason and excluded from totals
//! - Totals exist only when something was priced (total excl VAT > 0)
//! - Under the minimum order amount → mandatory notice

use chrono::Utc;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::pricing::{compute_layout, round_cents, PricingConstants};
use crate::quote::form::{present, resolve_quantity};
use crate::quote::format::{render_quote_text, MINIMUM_ORDER_NOTICE, ROUNDED_CORNERS_NOTICE};
use crate::quote::models::{
    Material, OrderLine, Quote, QuoteLine, QuoteTotals, RejectedLine, StickerInput, StickerSpec,
};

/// Rejection reason for a line whose sticker count cannot be represented.
pub const QUANTITY_TOO_LARGE: &str = "Quantity too large";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Quote not generated. Reason: no Material specified.")]
    NoMaterialSelected,
}

/// Order-wide settings for one calculation.
#[derive(Debug, Clone, Copy)]
pub struct QuoteOptions {
    pub material: Option<Material>,
    /// Fraction, e.g. `0.15`.
    pub vat_rate: f64,
    pub include_vat: bool,
    pub rounded_corners: bool,
    pub constants: PricingConstants,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Prices every sticker line and assembles the quote, including its text rendering.
pub fn build_quote(options: &QuoteOptions, stickers: &[StickerInput]) -> Result<Quote, QuoteError> {
    let material = options.material.ok_or(QuoteError::NoMaterialSelected)?;

    let lines: Vec<QuoteLine> = stickers
        .iter()
        .enumerate()
        .filter_map(|(i, input)| price_line(i + 1, input, options))
        .collect();

    let running_total: f64 = lines
        .iter()
        .filter_map(|line| match line {
            QuoteLine::Priced(order) => Some(order.line_total_excl_vat),
            QuoteLine::Rejected(_) => None,
        })
        .sum();
    let total_excl_vat = round_cents(running_total);

    let mut notices = Vec::new();
    let totals = if total_excl_vat > 0.0 {
        let below_minimum_order = total_excl_vat < options.constants.min_order_amount;
        if below_minimum_order {
            notices.push(MINIMUM_ORDER_NOTICE.to_string());
        }
        if options.rounded_corners {
            notices.push(ROUNDED_CORNERS_NOTICE.to_string());
        }
        Some(QuoteTotals {
            total_excl_vat,
            total_incl_vat: options
                .include_vat
                .then(|| apply_vat(total_excl_vat, options.vat_rate)),
            below_minimum_order,
        })
    } else {
        None
    };

    let mut quote = Quote {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        material,
        vat_rate: options.vat_rate,
        include_vat: options.include_vat,
        rounded_corners: options.rounded_corners,
        lines,
        totals,
        notices,
        text: None,
    };

    if quote.totals.is_some() {
        quote.text = Some(render_quote_text(&quote));
    }

    Ok(quote)
}

/// Number of full rows needed for `quantity` stickers, and how many stickers those rows yield.
///
/// `stickers_per_row` must be at least 1. Returns `None` when the sticker count overflows.
pub fn rows_for_quantity(quantity: u64, stickers_per_row: u32) -> Option<(u64, u64)> {
    let per_row = u64::from(stickers_per_row);
    let rows = quantity.div_ceil(per_row);
    rows.checked_mul(per_row).map(|total| (rows, total))
}

/// Adds VAT and rounds to cents.
pub fn apply_vat(amount_excl_vat: f64, vat_rate: f64) -> f64 {
    round_cents(amount_excl_vat * (1.0 + vat_rate))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Prices one form row. Returns `None` when width or height was left empty.
fn price_line(index: usize, input: &StickerInput, options: &QuoteOptions) -> Option<QuoteLine> {
    let width = present(input.width.as_ref())?;
    let height = present(input.height.as_ref())?;
    let dimensions = format!("{}x{}", width.display(), height.display());

    let width_mm = width.as_number().unwrap_or(f64::NAN);
    let height_mm = height.as_number().unwrap_or(f64::NAN);

    let layout = match compute_layout(width_mm, height_mm, &options.constants) {
        Ok(layout) => layout,
        Err(e) => {
            warn!("Sticker {index} ({dimensions}mm) not priced: {e}");
            return Some(QuoteLine::Rejected(RejectedLine {
                index,
                dimensions,
                reason: e.to_string(),
            }));
        }
    };

    let quantity = resolve_quantity(input.quantity.as_ref());
    let Some((rows, total_stickers)) = rows_for_quantity(quantity, layout.stickers_per_row) else {
        warn!("Sticker {index} ({dimensions}mm) not priced: quantity {quantity} too large");
        return Some(QuoteLine::Rejected(RejectedLine {
            index,
            dimensions,
            reason: QUANTITY_TOO_LARGE.to_string(),
        }));
    };
    let line_total_excl_vat = round_cents(layout.price_per_sticker * total_stickers as f64);

    Some(QuoteLine::Priced(OrderLine {
        index,
        dimensions,
        spec: StickerSpec {
            width_mm,
            height_mm,
            quantity,
        },
        layout,
        rows,
        total_stickers,
        line_total_excl_vat,
        line_total_incl_vat: options
            .include_vat
            .then(|| apply_vat(line_total_excl_vat, options.vat_rate)),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
