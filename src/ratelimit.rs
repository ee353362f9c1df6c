//! Per-client sliding-window request limiter.
//!
//! Each client keeps a log of the instants its accepted requests arrived. A
//! request is admitted while fewer than `capacity` of those fall inside the
//! trailing window. Rejected requests are not recorded.

use dashmap::DashMap;
use log::debug;
use std::{
    collections::VecDeque,
    net::IpAddr,
    sync::Arc,
    time::{Duration, Instant},
};

/// Requests allowed per client inside one window.
pub const MAX_REQUESTS: usize = 30;

pub const WINDOW: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { remaining: usize },
    Limited { retry_after: Duration },
}

pub struct SlidingWindowLimiter {
    capacity: usize,
    window: Duration,
    hits: DashMap<IpAddr, VecDeque<Instant>>,
}

impl Default for SlidingWindowLimiter {
    fn default() -> Self {
        Self::new(MAX_REQUESTS, WINDOW)
    }
}

impl SlidingWindowLimiter {
    pub fn new(capacity: usize, window: Duration) -> Self {
        Self {
            capacity: capacity.max(1),
            window,
            hits: DashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn check(&self, client: IpAddr) -> Decision {
        self.check_at(client, Instant::now())
    }

    pub fn check_at(&self, client: IpAddr, now: Instant) -> Decision {
        let mut log = self.hits.entry(client).or_default();
        self.prune(&mut log, now);

        if log.len() >= self.capacity {
            // The oldest hit leaving the window frees the next slot.
            let oldest = log.front().copied().unwrap_or(now);
            let retry_after = self.window.saturating_sub(now.duration_since(oldest));
            return Decision::Limited { retry_after };
        }

        log.push_back(now);
        Decision::Allowed {
            remaining: self.capacity - log.len(),
        }
    }

    /// Drops clients whose every recorded hit has aged out.
    pub fn purge_expired(&self, now: Instant) {
        let before = self.hits.len();
        self.hits.retain(|_, log| {
            self.prune(log, now);
            !log.is_empty()
        });
        debug!(
            "Rate limiter sweep: {} of {} clients still tracked",
            self.hits.len(),
            before
        );
    }

    pub fn tracked_clients(&self) -> usize {
        self.hits.len()
    }

    fn prune(&self, log: &mut VecDeque<Instant>, now: Instant) {
        while let Some(&oldest) = log.front() {
            if now.duration_since(oldest) >= self.window {
                log.pop_front();
            } else {
                break;
            }
        }
    }
}

/// Sweeps idle clients once per window for as long as the runtime lives.
pub fn spawn_sweeper(limiter: Arc<SlidingWindowLimiter>) {
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(limiter.window());
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            limiter.purge_expired(Instant::now());
        }
    });
}
