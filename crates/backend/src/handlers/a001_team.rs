use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a001_team::aggregate::{CreateTeamDto, Team, TeamUpdateDto};

use crate::domain::a001_team;
use crate::shared::app_state::AppState;
use crate::shared::error::ApiError;

/// GET /api/teams
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    a001_team::service::list_all(&state.db).await.map(Json)
}

/// GET /api/teams/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    a001_team::service::get_by_id(&state.db, &id).await.map(Json)
}

/// POST /api/teams
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateTeamDto>,
) -> Result<Json<Team>, ApiError> {
    a001_team::service::create(&state.db, dto).await.map(Json)
}

/// POST /api/teams/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<TeamUpdateDto>,
) -> Result<Json<Team>, ApiError> {
    match a001_team::service::update(&state.db, &id, dto).await {
        Ok(team) => Ok(Json(team)),
        Err(e) => {
            tracing::warn!("team {} update rejected: {}", id, e);
            Err(e)
        }
    }
}
