use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use std::time::Duration;
use thiserror::Error;

use crate::model::ProviderError;
use crate::web::models::ErrorBody;

/// Failures surfaced to the browser. The display text is what the client sees.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Ujumbe hauna muundo sahihi.")]
    InvalidMessages,

    #[error("Ujumbe ni mrefu mno.")]
    PayloadTooLarge,

    #[error("Ombi nyingi sana. Tafadhali subiri dakika chache.")]
    RateLimited { retry_after: Duration },

    // Vendor detail stays in the server log.
    #[error("Kuna tatizo la seva. Tafadhali jaribu tena.")]
    Upstream(#[source] ProviderError),

    #[error("Njia hii haipatikani.")]
    NotFound,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidMessages => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let ApiError::RateLimited { retry_after } = self {
            // Round up so clients never retry a moment too early.
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            builder.insert_header((header::RETRY_AFTER, secs.max(1).to_string()));
        }
        builder.json(ErrorBody {
            error: self.to_string(),
        })
    }
}
