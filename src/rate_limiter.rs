//! Sliding-window rate limiting.
//!
//! Admission control keyed by an arbitrary string (a user id, a stored
//! provider configuration, ...). Each key keeps the timestamps of its
//! admitted requests; anything older than the window is pruned lazily when
//! the key is touched. Independent of the adapters: callers check the
//! limiter before invoking `chat`/`chat_stream`.
//!
//! ```rust,ignore
//! use llm_gateway::rate_limiter::{RateLimiter, RateLimiterConfig};
//!
//! let limiter = RateLimiter::new(RateLimiterConfig::default());
//! if !limiter.check_limit("user-42") {
//!     let wait = limiter.get_wait_time_ms("user-42");
//!     // reject, or retry after `wait` ms
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

/// Rate limiter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateLimiterConfig {
    /// Requests admitted per key within one window.
    pub max_requests_per_minute: u32,
    /// Window length in milliseconds.
    pub window_size_ms: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests_per_minute: 60,
            window_size_ms: 60_000,
        }
    }
}

impl RateLimiterConfig {
    pub const fn new(max_requests_per_minute: u32, window_size_ms: u64) -> Self {
        Self {
            max_requests_per_minute,
            window_size_ms,
        }
    }
}

/// Partial update for [`RateLimiter::update_config`]; unset fields keep
/// their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimiterConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests_per_minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_size_ms: Option<u64>,
}

/// Millisecond time source.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now_ms(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Sliding-window limiter.
///
/// One mutex guards the record map and is held across prune + append, so
/// `check_limit` is atomic per key on a multi-threaded runtime.
#[derive(Debug)]
pub struct RateLimiter {
    config: RwLock<RateLimiterConfig>,
    records: Mutex<HashMap<String, VecDeque<u64>>>,
    clock: Arc<dyn Clock>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimiterConfig::default())
    }
}

impl RateLimiter {
    pub fn new(config: RateLimiterConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: RateLimiterConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: RwLock::new(config),
            records: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Admit one request for `key` if it is under the limit, recording it.
    /// A rejected request is not recorded.
    pub fn check_limit(&self, key: &str) -> bool {
        let config = self.get_config();
        let now = self.clock.now_ms();
        let mut records = self.lock_records();

        let record = records.entry(key.to_string()).or_default();
        prune(record, now, config.window_size_ms);
        if record.len() >= config.max_requests_per_minute as usize {
            let wait = wait_time(record, now, config.window_size_ms);
            if record.is_empty() {
                records.remove(key);
            }
            tracing::debug!(key, wait_ms = wait, "rate limit reached");
            return false;
        }
        record.push_back(now);
        true
    }

    /// Requests `key` may still make in the current window.
    pub fn get_remaining_requests(&self, key: &str) -> u32 {
        let config = self.get_config();
        let count = self.with_pruned(key, config, |record, _| record.len());
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        config.max_requests_per_minute.saturating_sub(count)
    }

    /// Milliseconds until `key` can be admitted again; 0 when it can be now.
    pub fn get_wait_time_ms(&self, key: &str) -> u64 {
        let config = self.get_config();
        self.with_pruned(key, config, |record, now| {
            if record.len() < config.max_requests_per_minute as usize {
                0
            } else {
                wait_time(record, now, config.window_size_ms)
            }
        })
    }

    /// Forget everything recorded for `key`.
    pub fn reset_limit(&self, key: &str) {
        self.lock_records().remove(key);
    }

    /// Apply a partial update; it affects every key from the next call on.
    pub fn update_config(&self, update: RateLimiterConfigUpdate) {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(max) = update.max_requests_per_minute {
            config.max_requests_per_minute = max;
        }
        if let Some(window) = update.window_size_ms {
            config.window_size_ms = window;
        }
        tracing::debug!(
            max_requests_per_minute = config.max_requests_per_minute,
            window_size_ms = config.window_size_ms,
            "rate limiter config updated"
        );
    }

    pub fn get_config(&self) -> RateLimiterConfig {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Forget every key.
    pub fn clear_all(&self) {
        self.lock_records().clear();
    }

    /// Number of keys that currently hold a record.
    pub fn tracked_keys(&self) -> usize {
        self.lock_records().len()
    }

    fn lock_records(&self) -> MutexGuard<'_, HashMap<String, VecDeque<u64>>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Prune `key`'s record, run `f` on it, and drop the record if it ended
    /// up empty.
    fn with_pruned<T>(
        &self,
        key: &str,
        config: RateLimiterConfig,
        f: impl FnOnce(&VecDeque<u64>, u64) -> T,
    ) -> T {
        let now = self.clock.now_ms();
        let mut records = self.lock_records();
        let Some(record) = records.get_mut(key) else {
            return f(&VecDeque::new(), now);
        };
        prune(record, now, config.window_size_ms);
        let out = f(record, now);
        if record.is_empty() {
            records.remove(key);
        }
        out
    }
}

/// Drop timestamps that have left the window. A request made at `t` counts
/// until `t + window`.
fn prune(record: &mut VecDeque<u64>, now: u64, window_ms: u64) {
    while record
        .front()
        .is_some_and(|&ts| ts.saturating_add(window_ms) <= now)
    {
        record.pop_front();
    }
}

fn wait_time(record: &VecDeque<u64>, now: u64, window_ms: u64) -> u64 {
    record
        .front()
        .map_or(0, |&oldest| oldest.saturating_add(window_ms).saturating_sub(now))
}

/// Process-wide limiter with the default configuration, created on first
/// use. Prefer an owned [`RateLimiter`] where one can be passed around.
pub fn global_rate_limiter() -> &'static RateLimiter {
    static GLOBAL: OnceLock<RateLimiter> = OnceLock::new();
    GLOBAL.get_or_init(RateLimiter::default)
}
