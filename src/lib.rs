pub mod config;
pub mod model;
pub mod ratelimit;
pub mod web;

use std::{path::PathBuf, sync::Arc};

use model::CompletionProvider;
use ratelimit::SlidingWindowLimiter;

/// Process-wide state handed to every request through `web::Data`.
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub limiter: Arc<SlidingWindowLimiter>,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, public_dir: impl Into<PathBuf>) -> Self {
        Self::with_limiter(provider, SlidingWindowLimiter::default(), public_dir)
    }

    pub fn with_limiter(
        provider: Arc<dyn CompletionProvider>,
        limiter: SlidingWindowLimiter,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            provider,
            limiter: Arc::new(limiter),
            public_dir: public_dir.into(),
        }
    }
}
