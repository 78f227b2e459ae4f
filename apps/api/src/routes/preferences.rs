use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::cache::DARK_MODE_KEY;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
}

/// GET /api/v1/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
) -> Result<Json<Preferences>, AppError> {
    let dark_mode = state.cache.get(DARK_MODE_KEY).await?.as_deref() == Some("true");
    Ok(Json(Preferences { dark_mode }))
}

/// PUT /api/v1/preferences
pub async fn handle_put_preferences(
    State(state): State<AppState>,
    Json(prefs): Json<Preferences>,
) -> Result<Json<Preferences>, AppError> {
    state
        .cache
        .set(DARK_MODE_KEY, prefs.dark_mode.to_string())
        .await?;
    Ok(Json(prefs))
}
