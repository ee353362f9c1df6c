use actix_files::NamedFile;
use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    web, HttpRequest, HttpResponse,
};
use log::{debug, error, info};
use std::path::PathBuf;

use crate::model::{recent_history, CompletionRequest};
use crate::web::error::ApiError;
use crate::web::guard;
use crate::web::models::{ChatRequest, ChatResponse, HealthResponse};
use crate::AppState;

pub const HEALTH_MESSAGE: &str = "Rafiki wa Vijana yuko tayari! 🦁";

// Health check endpoint
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        message: HEALTH_MESSAGE,
    })
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    // Only bodies that made it through the JSON extractor reach the limiter.
    let quota = guard::check_quota(&data, &http_req)?;

    let ChatRequest { messages } = req.into_inner();
    if messages.is_empty() {
        return Err(ApiError::InvalidMessages);
    }

    let history = recent_history(&messages);
    if history.len() < messages.len() {
        debug!(
            "Dropping {} older messages from the conversation",
            messages.len() - history.len()
        );
    }
    info!("Chat request with {} messages", history.len());

    let completion = data
        .provider
        .complete(CompletionRequest::for_history(history))
        .await
        .map_err(|e| {
            error!("Error: {}", e);
            ApiError::Upstream(e)
        })?;

    let mut response = HttpResponse::Ok();
    quota.apply(&mut response);
    Ok(response.json(ChatResponse {
        reply: completion.reply_text(),
    }))
}

// Unknown routes under /api
pub async fn api_not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

/// Serves the entry page for any path the static directory cannot answer,
/// so client-side routes resolve.
pub async fn spa_fallback(
    req: ServiceRequest,
    entry: PathBuf,
) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();
    match NamedFile::open_async(entry).await {
        Ok(file) => {
            let res = file.into_response(&req);
            Ok(ServiceResponse::new(req, res))
        }
        // Rendered as a plain 404 so the outer middleware still decorates it.
        Err(e) => Ok(ServiceResponse::from_err(e, req)),
    }
}
