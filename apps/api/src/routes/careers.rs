use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::career::Career;
use crate::state::AppState;

/// GET /api/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Career>>, AppError> {
    Ok(Json(state.careers.list_careers().await?))
}

/// GET /api/careers/:career_id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
) -> Result<Json<Career>, AppError> {
    let career = state
        .careers
        .find_career(&career_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Career not found".to_string()))?;
    Ok(Json(career))
}
