use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::config::RateLimitSettings;

/// Outcome of a single rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { limit: u32, remaining: u32, reset_after: Duration },
    Limited { limit: u32, retry_after: Duration },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed { .. })
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    hits: u32,
}

#[derive(Debug)]
struct Table {
    windows: HashMap<String, Window>,
    last_sweep: Instant,
}

/// Fixed-window request counter keyed by client address
///
/// Each key gets `max_requests` hits per `window`. A key's window opens on
/// its first request after the previous window closed. Expired keys are
/// swept inline, at most once per window.
#[derive(Debug)]
pub struct RateLimiter {
    table: Mutex<Table>,
    window: Duration,
    max_requests: u32,
    trust_proxy: bool,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            table: Mutex::new(Table {
                windows: HashMap::new(),
                last_sweep: Instant::now(),
            }),
            window,
            max_requests,
            trust_proxy: false,
        }
    }

    pub fn from_settings(settings: &RateLimitSettings) -> Self {
        Self::new(Duration::from_secs(settings.window_secs), settings.max_requests)
            .with_trust_proxy(settings.trust_proxy)
    }

    /// Key clients by `Forwarded`/`X-Forwarded-For` instead of the socket peer
    pub fn with_trust_proxy(mut self, trust_proxy: bool) -> Self {
        self.trust_proxy = trust_proxy;
        self
    }

    pub fn trust_proxy(&self) -> bool {
        self.trust_proxy
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// Count one request for `key`
    pub async fn check(&self, key: &str) -> Decision {
        self.check_at(key, Instant::now()).await
    }

    pub(crate) async fn check_at(&self, key: &str, now: Instant) -> Decision {
        let mut table = self.table.lock().await;

        if now.saturating_duration_since(table.last_sweep) >= self.window {
            let window = self.window;
            let before = table.windows.len();
            table
                .windows
                .retain(|_, w| now.saturating_duration_since(w.started) < window);
            table.last_sweep = now;
            tracing::debug!("Swept {} expired rate-limit windows", before - table.windows.len());
        }

        let entry = table.windows.entry(key.to_string()).or_insert(Window {
            started: now,
            hits: 0,
        });

        if now.saturating_duration_since(entry.started) >= self.window {
            *entry = Window { started: now, hits: 0 };
        }

        let reset_after = self
            .window
            .saturating_sub(now.saturating_duration_since(entry.started));

        if entry.hits >= self.max_requests {
            return Decision::Limited {
                limit: self.max_requests,
                retry_after: reset_after,
            };
        }

        entry.hits += 1;
        Decision::Allowed {
            limit: self.max_requests,
            remaining: self.max_requests - entry.hits,
            reset_after,
        }
    }

    /// Number of keys currently tracked
    pub async fn tracked_keys(&self) -> usize {
        self.table.lock().await.windows.len()
    }
}
