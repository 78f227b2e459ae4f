// Pricing Engine
// Implements: per-sticker vinyl price, dual-orientation layout selection, cent rounding.
// Pure arithmetic only — no I/O, no shared state.

pub mod layout;
pub mod money;

// Re-export the public API consumed by the quote aggregator and handlers.
pub use layout::{compute_layout, LayoutError, LayoutResult, PricingConstants};
pub use money::round_cents;
