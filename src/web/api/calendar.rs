use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;
use crate::models::EventDraft;
use crate::web::auth::current_user;
use crate::web::AppState;

#[derive(Deserialize)]
pub struct Window {
    from: NaiveDate,
    to: NaiveDate,
}

pub async fn list_events(state: web::Data<AppState>, session: Session) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.list_events()?))
}

pub async fn create_event(
    draft: web::Json<EventDraft>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    let event = state.store.create_event(draft.into_inner())?;
    Ok(HttpResponse::Created().json(event))
}

pub async fn delete_event(
    id: web::Path<u32>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    state.store.delete_event(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn event_occurrences(
    id: web::Path<u32>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.event_occurrences(id.into_inner())?))
}

// GET /api/calendar?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn calendar_window(
    window: web::Query<Window>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    current_user(&session)?;
    Ok(HttpResponse::Ok().json(state.store.calendar(window.from, window.to)?))
}

#[cfg(test)]
mod tests {
    use crate::web::test_support::{login, state, test_app};
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_first_week_of_march() {
        let app = test_app!(state());
        let cookie = login!(&app);

        let req = test::TestRequest::get()
            .uri("/api/calendar?from=2025-03-03&to=2025-03-09")
            .cookie(cookie)
            .to_request();
        let week: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        let dates: Vec<&str> = week.iter().map(|o| o["date"].as_str().unwrap()).collect();
        assert_eq!(
            dates,
            vec![
                "2025-03-03",
                "2025-03-04",
                "2025-03-05",
                "2025-03-06",
                "2025-03-07",
                "2025-03-08"
            ]
        );
        assert_eq!(week[5]["title"], "U19 league match");
        assert_eq!(week[0]["endTime"], "12:00");
    }

    #[actix_web::test]
    async fn test_reversed_window_is_400() {
        let app = test_app!(state());
        let cookie = login!(&app);

        let req = test::TestRequest::get()
            .uri("/api/calendar?from=2025-03-09&to=2025-03-03")
            .cookie(cookie)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }

    #[actix_web::test]
    async fn test_new_recurring_event_expands() {
        let app = test_app!(state());
        let cookie = login!(&app);

        let req = test::TestRequest::post()
            .uri("/api/events")
            .cookie(cookie.clone())
            .set_json(json!({
                "title": "Recovery session",
                "type": "training",
                "date": "2025-03-03",
                "time": "08:00",
                "duration": 45,
                "attendance": "optional",
                "recurrence": {"type": "weekly", "interval": 1, "selectedDays": [1, 3]}
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let event: Value = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/events/{}/occurrences", event["id"]))
            .cookie(cookie)
            .to_request();
        let occurrences: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(occurrences.len(), 100);
        assert_eq!(occurrences[1]["date"], "2025-03-05");
    }

    #[actix_web::test]
    async fn test_delete_missing_event_is_404() {
        let app = test_app!(state());
        let cookie = login!(&app);

        let req = test::TestRequest::delete()
            .uri("/api/events/999")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Event with ID 999 not found");
    }
}
