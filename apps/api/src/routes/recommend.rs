use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{Recommendation, StudentProfile};
use crate::state::AppState;

/// POST /api/recommend
///
/// Validates the profile, loads the whole catalogue and returns the top three matches.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<StudentProfile>, JsonRejection>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let Json(profile) = payload?;
    profile.validate()?;

    let careers = state.careers.list_careers().await?;
    let recommendations = state.matcher.match_careers(&profile, &careers);

    info!(
        "Scored {} careers; returning {} recommendations",
        careers.len(),
        recommendations.len()
    );
    Ok(Json(recommendations))
}
