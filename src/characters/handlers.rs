use super::errors::ApiError;
use super::memory::CharacterStorage;
use super::protocol::{ENDPOINT_CHARACTER, ENDPOINT_CHARACTERS};
use super::types::{Character, CharacterPayload};

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json, Router, extract::Path, http::StatusCode, routing::get};
use std::sync::Arc;

/// Builds the characters API around an explicitly constructed store.
pub fn router(storage: Arc<CharacterStorage>) -> Router {
    Router::new()
        .route(
            ENDPOINT_CHARACTERS,
            get(handle_list_characters).post(handle_create_character),
        )
        .route(
            ENDPOINT_CHARACTER,
            get(handle_get_character)
                .put(handle_update_character)
                .delete(handle_delete_character),
        )
        .layer(Extension(storage))
}

pub async fn handle_create_character(
    Extension(storage): Extension<Arc<CharacterStorage>>,
    payload: Result<Json<CharacterPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let Json(payload) = payload?;
    let character = Character::from_payload(payload.id.clone(), payload)?;

    let created = storage.create(character)?;
    tracing::info!("Created character {} ({})", created.id, created.character_name);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn handle_list_characters(
    Extension(storage): Extension<Arc<CharacterStorage>>,
) -> Json<Vec<Character>> {
    let characters = storage.list_all();
    tracing::debug!("Listing {} characters", characters.len());
    Json(characters)
}

pub async fn handle_get_character(
    Extension(storage): Extension<Arc<CharacterStorage>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    storage.get(&id).map(Json).ok_or(ApiError::NotFound(id))
}

pub async fn handle_update_character(
    Extension(storage): Extension<Arc<CharacterStorage>>,
    Path(id): Path<String>,
    payload: Result<Json<CharacterPayload>, JsonRejection>,
) -> Result<Json<Character>, ApiError> {
    let Json(payload) = payload?;
    // The path id wins over anything in the body.
    let character = Character::from_payload(Some(id.clone()), payload)?;

    match storage.update(&id, character) {
        Some(updated) => {
            tracing::info!("Replaced character {}", updated.id);
            Ok(Json(updated))
        }
        None => Err(ApiError::NotFound(id)),
    }
}

pub async fn handle_delete_character(
    Extension(storage): Extension<Arc<CharacterStorage>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if storage.delete(&id) {
        tracing::info!("Deleted character {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}
