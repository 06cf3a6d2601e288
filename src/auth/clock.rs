//! Wall-clock sources for Steam Guard code generation.
//!
//! Steam Guard codes are derived from the current Unix time, so the clock is
//! injectable: production code reads the system clock, tests pin it.

use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

/// Trait for providing the current Unix time in seconds.
pub trait TimeProvider: Send + Sync {
    /// Current Unix time in seconds.
    ///
    /// Read on every call; implementations must not cache.
    fn unix_time(&self) -> i64;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn unix_time(&self) -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }
}

/// A clock pinned to a caller-chosen instant.
///
/// Useful for deterministic tests. The instant can be moved with [`FixedTime::set`].
#[derive(Debug, Default)]
pub struct FixedTime {
    now: AtomicI64,
}

impl FixedTime {
    /// Create a clock pinned at `unix_seconds`.
    pub fn new(unix_seconds: i64) -> Self {
        Self {
            now: AtomicI64::new(unix_seconds),
        }
    }

    /// Move the clock to `unix_seconds`.
    pub fn set(&self, unix_seconds: i64) {
        self.now.store(unix_seconds, Ordering::SeqCst);
    }
}

impl TimeProvider for FixedTime {
    fn unix_time(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemTimeProvider.unix_time() > 1_577_836_800);
    }

    #[test]
    fn test_fixed_time_can_be_moved() {
        let clock = FixedTime::new(30);
        assert_eq!(clock.unix_time(), 30);
        clock.set(59);
        assert_eq!(clock.unix_time(), 59);
    }
}
