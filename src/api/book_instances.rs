//! Book instance endpoints

use std::collections::HashMap;

use axum::extract::{Path, State};
use serde::Deserialize;

use super::{parse_id, FormBody};
use crate::{error::AppResult, views::Outcome, AppState};

/// Body of the delete confirmation form
#[derive(Debug, Deserialize)]
pub struct DeleteBookInstanceForm {
    #[serde(default)]
    pub bookinstanceid: String,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Outcome> {
    state.services.book_instances.list().await
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Outcome> {
    state.services.book_instances.detail(parse_id(&id)?).await
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Outcome> {
    state.services.book_instances.create_form().await
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(input): FormBody<HashMap<String, String>>,
) -> AppResult<Outcome> {
    state.services.book_instances.create(&input).await
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Outcome> {
    state.services.book_instances.update_form(parse_id(&id)?).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(input): FormBody<HashMap<String, String>>,
) -> AppResult<Outcome> {
    state
        .services
        .book_instances
        .update(parse_id(&id)?, &input)
        .await
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Outcome> {
    state.services.book_instances.delete_form(parse_id(&id)?).await
}

pub async fn delete(
    State(state): State<AppState>,
    FormBody(body): FormBody<DeleteBookInstanceForm>,
) -> AppResult<Outcome> {
    state
        .services
        .book_instances
        .delete(parse_id(&body.bookinstanceid)?)
        .await
}
