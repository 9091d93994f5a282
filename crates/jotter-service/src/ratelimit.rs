//! Per-operation token-bucket rate limiting.
//!
//! Each named operation gets its own bucket, created lazily on first use
//! and cached for the lifetime of the limiter. A bucket holds up to
//! `capacity` tokens and is refilled with `refill_tokens` at every whole
//! `period` boundary (classic bandwidth limiting: burst up to capacity,
//! sustained rate of `refill_tokens` per period). Consumption is
//! non-blocking; a call either gets a token immediately or is rejected.
//!
//! Buckets are keyed by operation name alone, not by caller identity, so
//! the quota is a global throttle shared across all users of an operation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::error::{ServiceError, ServiceResult};

/// Default bucket capacity (maximum burst).
pub const DEFAULT_CAPACITY: u32 = 10;

/// Default number of tokens added per refill interval.
pub const DEFAULT_REFILL_TOKENS: u32 = 10;

/// Default refill interval.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(60);

/// Token-bucket policy applied to every operation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    /// Maximum tokens a bucket can hold.
    pub capacity: u32,
    /// Tokens added at each whole period boundary.
    pub refill_tokens: u32,
    /// Length of the refill interval.
    pub period: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            refill_tokens: DEFAULT_REFILL_TOKENS,
            period: DEFAULT_PERIOD,
        }
    }
}

/// A single token bucket with interval-boundary refill.
#[derive(Debug)]
struct TokenBucket {
    tokens: u32,
    last_refill: Instant,
    policy: RateLimitPolicy,
}

impl TokenBucket {
    fn new(policy: RateLimitPolicy, now: Instant) -> Self {
        Self {
            tokens: policy.capacity,
            last_refill: now,
            policy,
        }
    }

    /// Attempts to consume one token at the given instant.
    fn try_consume_at(&mut self, now: Instant) -> bool {
        self.refill(now);
        if self.tokens > 0 {
            self.tokens -= 1;
            true
        } else {
            false
        }
    }

    /// Credits tokens for every whole period elapsed since the last refill.
    /// Partial intervals carry over via `last_refill`.
    fn refill(&mut self, now: Instant) {
        if self.policy.period.is_zero() {
            self.tokens = self.policy.capacity;
            self.last_refill = now;
            return;
        }

        let elapsed = now.saturating_duration_since(self.last_refill);
        let intervals =
            (elapsed.as_nanos() / self.policy.period.as_nanos()).min(u128::from(u32::MAX)) as u32;
        if intervals == 0 {
            return;
        }

        let added = intervals.saturating_mul(self.policy.refill_tokens);
        self.tokens = self.tokens.saturating_add(added).min(self.policy.capacity);
        self.last_refill += self.policy.period * intervals;
    }
}

/// Rate limiter holding one lazily created bucket per operation name.
#[derive(Debug)]
pub struct RateLimiter {
    policy: RateLimitPolicy,
    buckets: Mutex<HashMap<&'static str, Arc<Mutex<TokenBucket>>>>,
}

impl RateLimiter {
    /// Creates a limiter applying the given policy to every bucket.
    #[must_use]
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Attempts to consume one token for the named operation.
    ///
    /// Non-blocking: returns [`ServiceError::RateLimitExceeded`] immediately
    /// when the bucket is empty, never waiting for a refill.
    pub fn check(&self, operation: &'static str) -> ServiceResult<()> {
        self.check_at(operation, Instant::now())
    }

    fn check_at(&self, operation: &'static str, now: Instant) -> ServiceResult<()> {
        let bucket = self.bucket_for(operation, now);
        let mut bucket = bucket.lock().unwrap_or_else(PoisonError::into_inner);

        if bucket.try_consume_at(now) {
            Ok(())
        } else {
            tracing::warn!(operation, "Rate limit exceeded");
            Err(ServiceError::RateLimitExceeded { operation })
        }
    }

    /// Atomic get-or-create: the map lock guards insertion, so at most one
    /// bucket exists per operation name even under racing first use. The
    /// map lock is released before the bucket is consumed from.
    fn bucket_for(&self, operation: &'static str, now: Instant) -> Arc<Mutex<TokenBucket>> {
        let mut buckets = self.buckets.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            buckets
                .entry(operation)
                .or_insert_with(|| Arc::new(Mutex::new(TokenBucket::new(self.policy, now)))),
        )
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitPolicy::default())
    }
}
