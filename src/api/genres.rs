//! Genre endpoints

use std::collections::HashMap;

use axum::extract::{Path, State};
use serde::Deserialize;

use super::{parse_id, FormBody};
use crate::{error::AppResult, views::Outcome, AppState};

/// Body of the delete confirmation form
#[derive(Debug, Deserialize)]
pub struct DeleteGenreForm {
    #[serde(default)]
    pub genreid: String,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Outcome> {
    state.services.genres.list().await
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Outcome> {
    state.services.genres.detail(parse_id(&id)?).await
}

pub async fn create_form(State(state): State<AppState>) -> Outcome {
    state.services.genres.create_form()
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(input): FormBody<HashMap<String, String>>,
) -> AppResult<Outcome> {
    state.services.genres.create(&input).await
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Outcome> {
    state.services.genres.update_form(parse_id(&id)?).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(input): FormBody<HashMap<String, String>>,
) -> AppResult<Outcome> {
    state.services.genres.update(parse_id(&id)?, &input).await
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Outcome> {
    state.services.genres.delete_form(parse_id(&id)?).await
}

pub async fn delete(
    State(state): State<AppState>,
    FormBody(body): FormBody<DeleteGenreForm>,
) -> AppResult<Outcome> {
    state.services.genres.delete(parse_id(&body.genreid)?).await
}
