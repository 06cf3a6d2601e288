//! Token bucket shared by every outbound Steam request.
//!
//! Permits are produced by a background refill task at a steady cadence and
//! held in a bounded pool:
//!
//! - The pool starts empty, so the first caller waits one refill interval.
//! - Each tick adds one permit while the pool is below capacity; ticks that
//!   find the pool full are dropped, never queued.
//! - [`TokenBucket::acquire`] consumes one permit, waiting for the next tick
//!   when the pool is empty.
//!
//! # Example
//!
//! ```rust,no_run
//! use steam_trade_client::rate_limit::{RateLimitConfig, TokenBucket};
//!
//! # async fn run() -> Result<(), steam_trade_client::SteamError> {
//! let bucket = TokenBucket::new(&RateLimitConfig::default())?;
//! bucket.acquire().await?;
//! // ... issue the request
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::SteamError;
use crate::rate_limit::RateLimitConfig;

/// A token bucket with an owned refill task.
///
/// Clones share the same permit pool and refill task. The refill task stops
/// when [`TokenBucket::shutdown`] is called or the last clone is dropped.
#[derive(Debug, Clone)]
pub struct TokenBucket {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    permits: Arc<Semaphore>,
    requests_per_second: u32,
    capacity: usize,
    refill_interval: Duration,
    refill_task: JoinHandle<()>,
}

impl TokenBucket {
    /// Create a bucket and start its refill task.
    ///
    /// Fails with [`SteamError::Config`] if `requests_per_second` or `burst` is zero.
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &RateLimitConfig) -> Result<Self, SteamError> {
        config.validate()?;

        let capacity = config.burst as usize;
        let refill_interval = config.refill_interval();
        let permits = Arc::new(Semaphore::new(0));
        let refill_task = tokio::spawn(refill(permits.clone(), capacity, refill_interval));

        tracing::debug!(
            capacity,
            interval_ms = refill_interval.as_millis() as u64,
            "token bucket started"
        );

        Ok(Self {
            shared: Arc::new(Shared {
                permits,
                requests_per_second: config.requests_per_second,
                capacity,
                refill_interval,
                refill_task,
            }),
        })
    }

    /// Wait for a permit and consume it.
    ///
    /// There is no timeout; wrap the call in `tokio::time::timeout` if one is
    /// needed. Fails only with [`SteamError::RateLimiterClosed`] once the
    /// bucket has been shut down.
    pub async fn acquire(&self) -> Result<(), SteamError> {
        let permit = self
            .shared
            .permits
            .acquire()
            .await
            .map_err(|_| SteamError::RateLimiterClosed)?;
        permit.forget();
        tracing::trace!(available = self.available(), "permit acquired");
        Ok(())
    }

    /// Take a permit if one is available right now.
    pub fn try_acquire(&self) -> bool {
        match self.shared.permits.try_acquire() {
            Ok(permit) => {
                permit.forget();
                true
            }
            Err(_) => false,
        }
    }

    /// Permits currently held in the pool.
    pub fn available(&self) -> usize {
        self.shared.permits.available_permits()
    }

    /// Maximum number of permits the pool holds (the burst size).
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    /// Time between permit additions.
    pub fn refill_interval(&self) -> Duration {
        self.shared.refill_interval
    }

    /// The limits this bucket was built with, reported as enabled.
    pub fn config(&self) -> RateLimitConfig {
        RateLimitConfig::new(self.shared.requests_per_second, self.shared.capacity as u32)
    }

    /// Stop the refill task and release every waiting caller with
    /// [`SteamError::RateLimiterClosed`].
    pub fn shutdown(&self) {
        self.shared.refill_task.abort();
        self.shared.permits.close();
        tracing::debug!("token bucket shut down");
    }

    /// Whether [`TokenBucket::shutdown`] has been called.
    pub fn is_closed(&self) -> bool {
        self.shared.permits.is_closed()
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.refill_task.abort();
    }
}

async fn refill(permits: Arc<Semaphore>, capacity: usize, period: Duration) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        if permits.is_closed() {
            break;
        }
        // Only this task adds permits, so the check cannot race another producer.
        if permits.available_permits() < capacity {
            permits.add_permits(1);
        }
    }
    tracing::debug!("token bucket refill task stopped");
}
