// Quote Aggregator
// Implements: form value defaulting, order totals with VAT and minimum order, quote text,
// and the cached "last quote" slot behind the copy action.

pub mod aggregator;
pub mod form;
pub mod format;
pub mod handlers;
pub mod holder;
pub mod models;
