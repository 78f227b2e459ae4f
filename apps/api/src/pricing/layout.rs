//! Sticker layout pricing — how many stickers fit across the vinyl roll, and
//! what each one costs.
//!
//! A "row" is one pass across the fixed-width roll. Its cost is the vinyl area
//! it consumes (roll width × sticker length along the roll), shared between the
//! stickers that fit across it. Both orientations are priced and the cheaper
//! one wins.
//!
//! # Rounding rules
//! - Stickers per row: round UP when the fractional part is ≥ 0.95, otherwise floor.
//!   An almost-whole extra sticker is allowed to squeeze in.
//! - Per-sticker price: floored at `min_price_per_sticker`, then rounded to cents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::money::round_cents;

// ────────────────────────────────────────────────────────────────────────────
// Policy constants
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_VINYL_COST_PER_SQM: f64 = 420.00;
pub const ROLL_WIDTH_MM: f64 = 650.0;
pub const BLEED_MM: f64 = 1.0;
pub const MIN_PRICE_PER_STICKER: f64 = 0.20;
pub const MIN_ORDER_AMOUNT: f64 = 100.00;

/// Fractional stickers-per-row at or above this count as a whole sticker.
const ROUND_UP_THRESHOLD: f64 = 0.95;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Pricing inputs for one calculation run.
///
/// Only the vinyl cost is user-overridable; the rest are fixed policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConstants {
    pub vinyl_cost_per_sqm: f64,
    pub roll_width_mm: f64,
    pub bleed_mm: f64,
    pub min_price_per_sticker: f64,
    pub min_order_amount: f64,
}

impl PricingConstants {
    pub fn with_vinyl_cost(vinyl_cost_per_sqm: f64) -> Self {
        Self {
            vinyl_cost_per_sqm,
            ..Self::default()
        }
    }
}

impl Default for PricingConstants {
    fn default() -> Self {
        Self {
            vinyl_cost_per_sqm: DEFAULT_VINYL_COST_PER_SQM,
            roll_width_mm: ROLL_WIDTH_MM,
            bleed_mm: BLEED_MM,
            min_price_per_sticker: MIN_PRICE_PER_STICKER,
            min_order_amount: MIN_ORDER_AMOUNT,
        }
    }
}

/// Which sticker dimension runs across the roll width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Width across the roll, height along it.
    Horizontal,
    /// Height across the roll, width along it.
    Vertical,
}

/// Cheapest layout found for one sticker size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Rounded to cents and never below the minimum unit price.
    pub price_per_sticker: f64,
    pub stickers_per_row: u32,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Invalid dimensions")]
    InvalidDimensions,

    #[error("Too large for the vinyl roll")]
    ExceedsRollWidth,
}

/// Price of a single orientation before the minimum-price floor.
#[derive(Debug, Clone, Copy)]
struct OrientationQuote {
    stickers_per_row: u32,
    price_per_sticker: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Computes the cheapest per-sticker price for a `width` × `height` (mm) sticker.
///
/// Both orientations are priced; the vertical one only wins when it is strictly
/// cheaper. The reported row count always comes from the winning orientation.
pub fn compute_layout(
    width: f64,
    height: f64,
    constants: &PricingConstants,
) -> Result<LayoutResult, LayoutError> {
    if !is_positive_dimension(width) || !is_positive_dimension(height) {
        return Err(LayoutError::InvalidDimensions);
    }

    let horizontal = price_orientation(width, height, constants);
    let vertical = price_orientation(height, width, constants);

    let (orientation, chosen) = if vertical.price_per_sticker < horizontal.price_per_sticker {
        (Orientation::Vertical, vertical)
    } else {
        (Orientation::Horizontal, horizontal)
    };

    if chosen.stickers_per_row == 0 {
        return Err(LayoutError::ExceedsRollWidth);
    }

    let floored = chosen
        .price_per_sticker
        .max(constants.min_price_per_sticker);

    Ok(LayoutResult {
        price_per_sticker: round_cents(floored),
        stickers_per_row: chosen.stickers_per_row,
        orientation,
    })
}

/// Rounds a raw stickers-per-row figure: up from a fractional part of 0.95, down otherwise.
pub fn round_stickers_per_row(raw: f64) -> u32 {
    let whole = raw.floor();
    let rounded = if raw - whole >= ROUND_UP_THRESHOLD {
        raw.ceil()
    } else {
        whole
    };
    rounded as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn is_positive_dimension(mm: f64) -> bool {
    mm.is_finite() && mm > 0.0
}

/// Prices one orientation: `across_mm` spans the roll, `along_mm` runs down it.
fn price_orientation(
    across_mm: f64,
    along_mm: f64,
    constants: &PricingConstants,
) -> OrientationQuote {
    let raw_per_row = constants.roll_width_mm / (across_mm + constants.bleed_mm);
    let stickers_per_row = round_stickers_per_row(raw_per_row);

    let roll_width_m = constants.roll_width_mm / 1000.0;
    let along_m = along_mm / 1000.0;
    let row_area_sqm = roll_width_m * along_m;
    let row_cost = row_area_sqm * constants.vinyl_cost_per_sqm;

    let price_per_sticker = if stickers_per_row > 0 {
        row_cost / stickers_per_row as f64
    } else {
        f64::INFINITY
    };

    OrientationQuote {
        stickers_per_row,
        price_per_sticker,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
