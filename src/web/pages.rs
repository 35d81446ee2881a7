use actix_web::http::header;
use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::AppState;
use crate::config::PageVariant;

const FULL_PAGE: &str = include_str!("../../templates/dashboard.html");
const SIMPLIFIED_PAGE: &str = include_str!("../../templates/dashboard_simplified.html");

pub fn page_html(variant: PageVariant) -> &'static str {
    match variant {
        PageVariant::Full => FULL_PAGE,
        PageVariant::Simplified => SIMPLIFIED_PAGE,
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    system: String,
    timestamp: String,
}

// Health endpoint
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        system: state.system_name.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

// The dashboard, for any path nothing else claimed
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .body(page_html(state.page))
}
