pub mod api;
pub mod assets;
pub mod auth;
pub mod pages;

use std::path::PathBuf;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::config::{Config, PageVariant};
use crate::error::AppError;
use crate::store::Store;

/// Shared by every worker.
pub struct AppState {
    pub store: Store,
    pub admin_email: String,
    pub admin_password: String,
    pub system_name: String,
    pub page: PageVariant,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: Store::seeded(config.budget_cap_cents),
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
            system_name: config.system_name.clone(),
            page: config.page,
            assets_dir: config.assets_dir.clone(),
        }
    }
}

/// Signed session cookie holding the signed-in email. Plain HTTP is allowed
/// because the server is usually reached without TLS.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .build()
}

/// Route table: health, assets, the JSON API, and the page for everything else.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid query: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid path: {}", err)).into()
    }))
    .route("/health", web::get().to(pages::health))
    .route("/attached_assets/{tail:.*}", web::get().to(assets::serve_asset))
    .service(api::scope())
    .default_service(web::to(pages::index));
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::from_config(&config));
    // Sessions do not survive a restart, matching the in-memory data.
    let key = Key::generate();

    info!(
        host = %config.host,
        port = config.port,
        page = ?config.page,
        assets = %config.assets_dir.display(),
        "starting web server"
    );
    info!("Access the site at http://localhost:{}", config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(session_middleware(key.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
