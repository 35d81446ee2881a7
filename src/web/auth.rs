use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::AppState;
use crate::error::{AppError, Result};

const USER_KEY: &str = "user";

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub email: String,
    pub role: &'static str,
}

/// The signed-in email, or 401.
pub fn current_user(session: &Session) -> Result<String> {
    session
        .get::<String>(USER_KEY)
        .map_err(|e| AppError::Session(e.to_string()))?
        .ok_or_else(|| AppError::unauthenticated("Please sign in"))
}

// Login endpoint
pub async fn login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse> {
    let email = req.email.trim().to_lowercase();
    if email != state.admin_email.to_lowercase() || req.password != state.admin_password {
        warn!(email = %email, "failed login attempt");
        return Err(AppError::unauthenticated("Invalid email or password"));
    }

    session.renew();
    session
        .insert(USER_KEY, &email)
        .map_err(|e| AppError::Session(e.to_string()))?;
    info!(email = %email, "signed in");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "user": SessionUser { email, role: "admin" },
    })))
}

pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().json(json!({ "success": true }))
}

pub async fn whoami(session: Session) -> Result<HttpResponse> {
    let email = current_user(&session)?;
    Ok(HttpResponse::Ok().json(SessionUser {
        email,
        role: "admin",
    }))
}

#[cfg(test)]
mod tests {
    use crate::web::test_support::{login, state, test_app};
    use actix_web::test;
    use serde_json::json;

    #[actix_web::test]
    async fn test_wrong_password_is_401() {
        let app = test_app!(state());
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"email": "admin@fckoln.de", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid email or password");
    }

    #[actix_web::test]
    async fn test_api_requires_session() {
        let app = test_app!(state());
        let req = test::TestRequest::get().uri("/api/players").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_login_then_session() {
        let app = test_app!(state());
        let cookie = login!(&app);

        let req = test::TestRequest::get()
            .uri("/api/session")
            .cookie(cookie)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["email"], "admin@fckoln.de");
    }

    #[actix_web::test]
    async fn test_email_is_case_insensitive() {
        let app = test_app!(state());
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({"email": " Admin@FCKoln.de ", "password": "admin123"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
