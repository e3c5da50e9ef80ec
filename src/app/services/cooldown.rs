use std::time::{SystemTime, UNIX_EPOCH};

/// Minimum time between two flight plan refreshes.
pub const REFRESH_COOLDOWN_MS: i64 = 20_000;

/// Rate limit for the remote flight plan refresh.
///
/// The timer starts at construction so a fresh widget can't fire a request
/// immediately after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshCooldown {
    last_refresh_ms: i64,
    cooldown_ms: i64,
}

impl RefreshCooldown {
    pub fn starting_at(now_ms: i64) -> Self {
        Self { last_refresh_ms: now_ms, cooldown_ms: REFRESH_COOLDOWN_MS }
    }

    pub fn last_refresh_ms(&self) -> i64 {
        self.last_refresh_ms
    }

    pub fn is_ready(&self, now_ms: i64) -> bool {
        now_ms - self.last_refresh_ms >= self.cooldown_ms
    }

    /// Claim the next refresh slot. Returns `false` while cooling down.
    pub fn try_acquire(&mut self, now_ms: i64) -> bool {
        if !self.is_ready(now_ms) {
            return false;
        }
        self.last_refresh_ms = now_ms;
        true
    }

    /// Whole seconds left until the next refresh, rounded like the hub text.
    pub fn remaining_secs(&self, now_ms: i64) -> i64 {
        let elapsed_secs = ((now_ms - self.last_refresh_ms) as f64 / 1000.0).round() as i64;
        (self.cooldown_ms / 1000 - elapsed_secs).max(0)
    }
}

/// Get current Unix timestamp in milliseconds
pub fn current_timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
