//! JSON API used by the dashboard page.
//!
//! Every route except `POST /api/login` needs a signed-in session.

pub mod admin;
pub mod calendar;
pub mod food;
pub mod housing;
pub mod messages;
pub mod players;

use actix_web::{web, HttpResponse, Scope};
use serde_json::json;

use super::auth;

pub fn scope() -> Scope {
    web::scope("/api")
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::post().to(auth::logout))
        .route("/session", web::get().to(auth::whoami))
        .service(
            web::resource("/players")
                .route(web::get().to(players::list_players))
                .route(web::post().to(players::create_player)),
        )
        .service(
            web::resource("/players/{id}")
                .route(web::get().to(players::get_player))
                .route(web::put().to(players::update_player))
                .route(web::delete().to(players::delete_player)),
        )
        .route("/houses", web::get().to(housing::list_houses))
        .route("/houses/{house}/rotate", web::post().to(housing::rotate_chores))
        .service(
            web::resource("/chores")
                .route(web::get().to(housing::list_chores))
                .route(web::post().to(housing::create_chore)),
        )
        .route("/chores/{id}", web::delete().to(housing::delete_chore))
        .route("/chores/{id}/complete", web::post().to(housing::complete_chore))
        .service(
            web::resource("/events")
                .route(web::get().to(calendar::list_events))
                .route(web::post().to(calendar::create_event)),
        )
        .route("/events/{id}", web::delete().to(calendar::delete_event))
        .route("/events/{id}/occurrences", web::get().to(calendar::event_occurrences))
        .route("/calendar", web::get().to(calendar::calendar_window))
        .route("/grocery/items", web::get().to(food::list_items))
        .route("/grocery/check", web::post().to(food::check_budget))
        .service(
            web::resource("/food-orders")
                .route(web::get().to(food::list_orders))
                .route(web::post().to(food::submit_order)),
        )
        .service(
            web::resource("/messages")
                .route(web::get().to(messages::list_messages))
                .route(web::post().to(messages::post_message)),
        )
        .route("/admin/overview", web::get().to(admin::overview))
        .service(
            web::resource("/admin/roster.csv")
                .route(web::get().to(admin::export_roster))
                .route(web::post().to(admin::import_roster)),
        )
        .default_service(web::to(api_not_found))
}

async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Unknown API endpoint" }))
}

#[cfg(test)]
mod tests {
    use crate::web::test_support::{state, test_app};
    use actix_web::test;

    #[actix_web::test]
    async fn test_unknown_api_path_is_json_404() {
        let app = test_app!(state());
        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unknown API endpoint");
    }
}
