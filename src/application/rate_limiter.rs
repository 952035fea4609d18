/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client-side request throttling
//!
//! The limiter only delays outgoing requests; it never fails or retries
//! them. It is built on the `governor` token bucket.

use crate::application::config::RateLimiterConfig;
use crate::error::AppError;
use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket shared by all requests of a client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `period_seconds`, with
    /// up to `burst_size` requests sent back to back
    ///
    /// # Example
    ///
    /// ```ignore
    /// use edgelink_client::application::config::RateLimiterConfig;
    /// use edgelink_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// })?;
    /// ```
    pub fn new(config: &RateLimiterConfig) -> Result<Self, AppError> {
        if config.max_requests == 0 || config.period_seconds == 0 {
            return Err(AppError::InvalidInput(
                "rate limiter needs a non-zero request count and period".to_string(),
            ));
        }
        let burst_size = NonZeroU32::new(config.burst_size).ok_or_else(|| {
            AppError::InvalidInput("rate limiter burst size must be non-zero".to_string())
        })?;

        let replenish = Duration::from_secs(config.period_seconds)
            .checked_div(config.max_requests)
            .filter(|d| !d.is_zero())
            .ok_or_else(|| {
                AppError::InvalidInput("rate limiter period is too short".to_string())
            })?;
        // The whole burst window must fit in u64 nanoseconds.
        let window_fits = u64::try_from(replenish.as_nanos())
            .ok()
            .and_then(|nanos| nanos.checked_mul(u64::from(burst_size.get())))
            .is_some();
        if !window_fits {
            return Err(AppError::InvalidInput(
                "rate limiter period is too long".to_string(),
            ));
        }

        let quota = Quota::with_period(replenish)
            .ok_or_else(|| AppError::InvalidInput("invalid rate limiter period".to_string()))?
            .allow_burst(burst_size);

        Ok(Self {
            limiter: Arc::new(DefaultDirectRateLimiter::direct(quota)),
        })
    }

    /// Waits until the next request may be sent
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a permit if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}
