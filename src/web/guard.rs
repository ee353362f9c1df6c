//! Request hygiene shared by every route: security headers, CORS, the JSON
//! body cap and the chat rate limit.

use actix_cors::Cors;
use actix_web::{
    error::JsonPayloadError, middleware::DefaultHeaders, web, HttpRequest, HttpResponseBuilder,
};
use log::{debug, warn};
use std::net::{IpAddr, Ipv4Addr};

use crate::ratelimit::Decision;
use crate::web::error::ApiError;
use crate::AppState;

/// Largest accepted JSON body, in bytes.
pub const JSON_LIMIT: usize = 10 * 1024;

const RATE_LIMIT_LIMIT: &str = "X-RateLimit-Limit";
const RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";

/// Fixed header policy; no Content-Security-Policy is sent.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("Strict-Transport-Security", "max-age=15552000; includeSubDomains"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("X-DNS-Prefetch-Control", "off"))
        .add(("X-Download-Options", "noopen"))
        .add(("X-Permitted-Cross-Domain-Policies", "none"))
        .add(("Cross-Origin-Opener-Policy", "same-origin"))
        .add(("Cross-Origin-Resource-Policy", "same-origin"))
        .add(("Origin-Agent-Cluster", "?1"))
        .add(("X-XSS-Protection", "0"))
}

/// Any origin may call the API.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}

/// JSON extractor settings: 10KB cap, localized errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            let api_error = match err {
                JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. } => ApiError::PayloadTooLarge,
                other => {
                    debug!("Rejected chat payload: {}", other);
                    ApiError::InvalidMessages
                }
            };
            api_error.into()
        })
}

fn client_ip(req: &HttpRequest) -> IpAddr {
    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Spends one unit of the caller's sliding-window quota.
///
/// Called by the chat handler once its body has been extracted, so bodies
/// rejected by [`json_config`] never count against the window.
pub fn check_quota(state: &AppState, req: &HttpRequest) -> Result<Quota, ApiError> {
    let ip = client_ip(req);
    match state.limiter.check(ip) {
        Decision::Allowed { remaining } => Ok(Quota {
            limit: state.limiter.capacity(),
            remaining,
        }),
        Decision::Limited { retry_after } => {
            warn!("Rate limit exceeded for {} (retry in {:?})", ip, retry_after);
            Err(ApiError::RateLimited { retry_after })
        }
    }
}

/// What is left of a client's window after an admitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    pub limit: usize,
    pub remaining: usize,
}

impl Quota {
    pub fn apply(&self, builder: &mut HttpResponseBuilder) {
        builder
            .insert_header((RATE_LIMIT_LIMIT, self.limit.to_string()))
            .insert_header((RATE_LIMIT_REMAINING, self.remaining.to_string()));
    }
}
