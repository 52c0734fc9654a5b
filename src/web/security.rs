use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Simple in-memory rate limiter, keyed by caller-chosen strings
/// (e.g. "signup:<ip>"). State is per-process.
pub struct RateLimiter {
    hits: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Returns false once `max_hits` requests have landed inside the
    /// sliding window for `key`.
    pub fn check(
        &self,
        key: &str,
        max_hits: usize,
        window: Duration,
    ) -> bool {
        let now = Instant::now();
        let mut hits = self
            .hits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = hits.entry(key.to_string()).or_default();
        entry.retain(|&t| now.duration_since(t) < window);

        if entry.len() >= max_hits {
            return false;
        }

        entry.push(now);

        // Drop keys whose window emptied out.
        hits.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
