use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::models::PlayerDraft;
use crate::store::PlayerFilter;
use crate::web::auth::current_user;
use crate::web::AppState;

pub async fn list_players(
    filter: web::Query<PlayerFilter>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.list_players(&filter)?))
}

pub async fn get_player(
    id: web::Path<u32>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.get_player(id.into_inner())?))
}

pub async fn create_player(
    draft: web::Json<PlayerDraft>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    let player = state.store.create_player(draft.into_inner())?;
    Ok(HttpResponse::Created().json(player))
}

pub async fn update_player(
    id: web::Path<u32>,
    draft: web::Json<PlayerDraft>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    let player = state.store.update_player(id.into_inner(), draft.into_inner())?;
    Ok(HttpResponse::Ok().json(player))
}

pub async fn delete_player(
    id: web::Path<u32>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    state.store.delete_player(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
