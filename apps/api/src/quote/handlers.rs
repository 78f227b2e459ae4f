//! Axum route handlers for the Quote API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::pricing::{compute_layout, LayoutResult, PricingConstants};
use crate::quote::aggregator::{build_quote, QuoteOptions};
use crate::quote::form::{resolve_vat_rate, resolve_vinyl_cost, FormValue};
use crate::quote::holder::{latest_quote, store_latest_quote};
use crate::quote::models::{Material, Quote, StickerInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CalculateRequest {
    /// `gloss`, `matte` / `matt`, or `unspecified`.
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub stickers: Vec<StickerInput>,
    /// Vinyl cost per m². Empty uses the configured default.
    #[serde(default)]
    pub vinyl_cost: Option<FormValue>,
    /// VAT as a percentage, e.g. `15`.
    #[serde(default)]
    pub vat_rate_percent: Option<FormValue>,
    #[serde(default)]
    pub include_vat: bool,
    #[serde(default)]
    pub rounded_corners: bool,
}

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub width: FormValue,
    pub height: FormValue,
    #[serde(default)]
    pub vinyl_cost: Option<FormValue>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quotes
///
/// Prices every sticker row and returns the full quote. When something was
/// priced, the quote text replaces the cached copy for the copy action.
pub async fn handle_calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<Quote>, AppError> {
    let material = parse_material(request.material.as_deref())?;

    let vinyl_cost = resolve_vinyl_cost(request.vinyl_cost.as_ref(), state.config.default_vinyl_cost);
    let options = QuoteOptions {
        material,
        vat_rate: resolve_vat_rate(
            request.vat_rate_percent.as_ref(),
            state.config.default_vat_rate,
        ),
        include_vat: request.include_vat,
        rounded_corners: request.rounded_corners,
        constants: PricingConstants::with_vinyl_cost(vinyl_cost),
    };

    let quote = build_quote(&options, &request.stickers)?;

    match (&quote.text, &quote.totals) {
        (Some(text), Some(totals)) => {
            store_latest_quote(state.cache.as_ref(), text).await?;
            info!(
                "Quote {} generated: {} of {} lines priced, R{:.2} excl VAT",
                quote.id,
                quote.priced_lines().count(),
                quote.lines.len(),
                totals.total_excl_vat
            );
        }
        _ => info!("Quote {} has nothing priced; cached quote kept", quote.id),
    }

    Ok(Json(quote))
}

/// GET /api/v1/quotes/latest
///
/// Copy action: returns the last generated quote as plain text.
pub async fn handle_latest_quote(State(state): State<AppState>) -> Result<String, AppError> {
    latest_quote(state.cache.as_ref()).await
}

/// POST /api/v1/layout
///
/// Prices a single sticker size without building a quote.
pub async fn handle_layout_preview(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<LayoutResult>, AppError> {
    let vinyl_cost = resolve_vinyl_cost(request.vinyl_cost.as_ref(), state.config.default_vinyl_cost);
    let layout = compute_layout(
        request.width.as_number().unwrap_or(f64::NAN),
        request.height.as_number().unwrap_or(f64::NAN),
        &PricingConstants::with_vinyl_cost(vinyl_cost),
    )?;
    Ok(Json(layout))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Maps the material dropdown value. Empty and `unspecified` mean "not chosen".
fn parse_material(raw: Option<&str>) -> Result<Option<Material>, AppError> {
    let value = raw.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    match value.as_str() {
        "" | "unspecified" => Ok(None),
        "gloss" => Ok(Some(Material::Gloss)),
        "matte" | "matt" => Ok(Some(Material::Matte)),
        other => Err(AppError::Validation(format!("Unknown material '{other}'"))),
    }
}
