use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{OrderDraft, OrderLine};
use crate::web::auth::current_user;
use crate::web::AppState;

#[derive(Deserialize)]
pub struct BudgetRequest {
    lines: Vec<OrderLine>,
}

pub async fn list_items(state: web::Data<AppState>, session: Session) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.catalog()))
}

/// Live budget check for the order form; never stores anything.
pub async fn check_budget(
    req: web::Json<BudgetRequest>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.check_budget(&req.lines)?))
}

pub async fn list_orders(state: web::Data<AppState>, session: Session) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.list_orders()?))
}

pub async fn submit_order(
    draft: web::Json<OrderDraft>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    let order = state.store.submit_order(draft.into_inner())?;
    Ok(HttpResponse::Created().json(order))
}
