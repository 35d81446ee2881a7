use actix_session::Session;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::web::auth::current_user;
use crate::web::AppState;

const ROSTER_FILE_NAME: &str = "roster.csv";

pub async fn overview(state: web::Data<AppState>, session: Session) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.overview()?))
}

pub async fn export_roster(state: web::Data<AppState>, session: Session) -> Result<HttpResponse> {
    current_user(&session)?;
    let csv = state.store.export_roster()?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(ROSTER_FILE_NAME.to_string())],
        })
        .body(csv))
}

pub async fn import_roster(
    body: web::Bytes,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.import_roster(&body)?))
}
