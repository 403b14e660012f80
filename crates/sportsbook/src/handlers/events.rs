//! Event listing handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use sportsbook_core::event::{Event, ListEventsFilter};

use crate::{handlers::AppError, state::AppState};

/// Request body for `POST /v1/list-events`. An absent filter lists everything.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListEventsRequest {
    pub filter: Option<ListEventsFilter>,
}

#[derive(Debug, Serialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

/// List events (POST /v1/list-events).
pub async fn list_events(
    State(state): State<AppState>,
    Json(request): Json<ListEventsRequest>,
) -> Result<Json<ListEventsResponse>, AppError> {
    let events = state
        .event_repo
        .list_events(request.filter.as_ref())
        .await?;

    tracing::debug!(count = events.len(), "Listed events");

    Ok(Json(ListEventsResponse { events }))
}
