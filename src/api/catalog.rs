//! Catalog home page

use axum::extract::State;

use crate::{error::AppResult, views::Outcome, AppState};

pub async fn index(State(state): State<AppState>) -> AppResult<Outcome> {
    state.services.catalog.index().await
}
