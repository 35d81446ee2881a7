use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::housing::RotationStrategy;
use crate::models::{ChoreDraft, House};
use crate::web::auth::current_user;
use crate::web::AppState;

#[derive(Deserialize)]
pub struct ChoreQuery {
    house: Option<House>,
}

#[derive(Deserialize, Default)]
pub struct RotateRequest {
    #[serde(default)]
    strategy: RotationStrategy,
}

pub async fn list_houses(state: web::Data<AppState>, session: Session) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.house_summaries()?))
}

pub async fn list_chores(
    query: web::Query<ChoreQuery>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.list_chores(query.house)?))
}

pub async fn create_chore(
    draft: web::Json<ChoreDraft>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    let chore = state.store.create_chore(draft.into_inner())?;
    Ok(HttpResponse::Created().json(chore))
}

pub async fn delete_chore(
    id: web::Path<u32>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    state.store.delete_chore(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn complete_chore(
    id: web::Path<u32>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.complete_chore(id.into_inner())?))
}

/// The body is optional; an empty one means round-robin. A body that is
/// present must parse.
pub async fn rotate_chores(
    house: web::Path<House>,
    body: web::Bytes,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    let request = parse_rotate_request(&body)?;

    let summary = state
        .store
        .rotate_chores(house.into_inner(), request.strategy, &mut rand::thread_rng())?;
    Ok(HttpResponse::Ok().json(summary))
}

fn parse_rotate_request(body: &[u8]) -> Result<RotateRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RotateRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
}
