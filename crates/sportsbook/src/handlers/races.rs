//! Race listing and lookup handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use sportsbook_core::race::{ListRacesFilter, Race};

use crate::{handlers::AppError, state::AppState};

/// Request body for `POST /v1/list-races`. An absent filter lists everything.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListRacesRequest {
    pub filter: Option<ListRacesFilter>,
}

#[derive(Debug, Serialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

#[derive(Debug, Serialize)]
pub struct GetRaceResponse {
    pub race: Race,
}

/// List races (POST /v1/list-races).
pub async fn list_races(
    State(state): State<AppState>,
    Json(request): Json<ListRacesRequest>,
) -> Result<Json<ListRacesResponse>, AppError> {
    let races = state.race_repo.list_races(request.filter.as_ref()).await?;

    tracing::debug!(count = races.len(), "Listed races");

    Ok(Json(ListRacesResponse { races }))
}

/// Get a single race by ID (GET /v1/races/{id}).
pub async fn get_race(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match state.race_repo.get_race_by_id(&id).await? {
        Some(race) => Ok(Json(GetRaceResponse { race }).into_response()),
        None => {
            tracing::debug!(%id, "Race not found");
            Ok((StatusCode::NOT_FOUND, format!("Race {id} not found")).into_response())
        }
    }
}
