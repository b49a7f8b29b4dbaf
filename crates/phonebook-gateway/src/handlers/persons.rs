use crate::error::{AppError, Result};
use crate::model::PersonPayload;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use phonebook_core::Person;
use tracing::{debug, warn};

pub async fn list_persons_handler(State(state): State<AppState>) -> Result<Json<Vec<Person>>> {
    let persons = state.store().list().await?;
    Ok(Json(persons))
}

pub async fn get_person_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Person>> {
    state
        .store()
        .get(&id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// A body that is absent or not a JSON object counts as missing content.
pub async fn create_person_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PersonPayload>, JsonRejection>,
) -> Result<Json<Person>> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "unreadable create body");
        AppError::MissingField
    })?;
    debug!(body = ?payload, "create person");

    let person = payload.into_complete().ok_or(AppError::MissingField)?;
    let created = state.store().create(person).await?;

    Ok(Json(created))
}

pub async fn update_person_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: std::result::Result<Json<PersonPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>)> {
    let payload = payload.map(|Json(payload)| payload).unwrap_or_else(|rejection| {
        warn!(%rejection, "unreadable update body");
        PersonPayload::default()
    });

    state
        .store()
        .update(&id, payload.into_new_person())
        .await?
        .map(|updated| (StatusCode::ACCEPTED, Json(updated)))
        .ok_or(AppError::NotFound)
}

pub async fn delete_person_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.store().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
