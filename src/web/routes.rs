use actix_files::Files;
use actix_web::{
    dev::{fn_service, ServiceRequest},
    web,
};
use log::warn;

use crate::web::{guard, handlers};
use crate::AppState;

/// Name of the page served for client-side routes.
pub const ENTRY_FILE: &str = "index.html";

pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let public_dir = state.public_dir.clone();
    let entry = public_dir.join(ENTRY_FILE);
    let fallback =
        fn_service(move |req: ServiceRequest| handlers::spa_fallback(req, entry.clone()));

    // The chat handler spends the rate-limit quota itself, after body
    // extraction. Health stays outside the limiter so liveness never depends
    // on how much a client has chatted.
    let api = web::scope("/api")
        .route("/chat", web::post().to(handlers::chat))
        .route("/health", web::get().to(handlers::health))
        .default_service(web::to(handlers::api_not_found));

    let mut root = web::scope("").service(api);
    // actix-files falls back to the working directory when its root is missing.
    if public_dir.is_dir() {
        root = root.service(
            Files::new("/", public_dir)
                .index_file(ENTRY_FILE)
                .default_handler(fallback),
        );
    } else {
        warn!("Static directory {} not found; only the API is served", public_dir.display());
        root = root.default_service(fallback);
    }

    cfg.app_data(state).app_data(guard::json_config()).service(
        root.wrap(guard::cors()).wrap(guard::security_headers()),
    );
}
