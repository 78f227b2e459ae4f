//! The "last quote" slot read by the copy action.

use crate::cache::{LocalCache, QUOTE_KEY};
use crate::errors::AppError;

/// Replaces the cached quote text.
pub async fn store_latest_quote(cache: &dyn LocalCache, text: &str) -> Result<(), AppError> {
    cache.set(QUOTE_KEY, text.to_string()).await?;
    Ok(())
}

/// Returns the most recently cached quote text.
pub async fn latest_quote(cache: &dyn LocalCache) -> Result<String, AppError> {
    cache
        .get(QUOTE_KEY)
        .await?
        .filter(|text| !text.is_empty())
        .ok_or(AppError::NoQuoteAvailable)
}
