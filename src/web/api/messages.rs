use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::Result;
use crate::models::MessageDraft;
use crate::web::auth::current_user;
use crate::web::AppState;

#[derive(Deserialize)]
pub struct ChannelQuery {
    channel: Option<String>,
}

pub async fn list_messages(
    query: web::Query<ChannelQuery>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    let messages = state.store.list_messages(query.channel.as_deref())?;
    Ok(HttpResponse::Ok().json(messages))
}

// The sender is always the signed-in user.
pub async fn post_message(
    draft: web::Json<MessageDraft>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    let sender = current_user(&session)?;
    let message = state.store.post_message(&sender, draft.into_inner())?;
    Ok(HttpResponse::Created().json(message))
}
