//! Author endpoints (read-only)

use axum::extract::{Path, State};

use super::parse_id;
use crate::{error::AppResult, views::Outcome, AppState};

pub async fn list(State(state): State<AppState>) -> AppResult<Outcome> {
    state.services.authors.list().await
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Outcome> {
    state.services.authors.detail(parse_id(&id)?).await
}
