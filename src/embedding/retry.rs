//! Retry policy for embedding requests: capped exponential backoff with
//! full jitter.

use backoff::backoff::Backoff;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use super::errors::ProviderError;

#[derive(Debug, Clone, PartialEq)]
pub struct BackoffPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub jitter: bool,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            jitter: true,
        }
    }
}

impl BackoffPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Delay ceiling after the `attempt`-th failure (1-based):
    /// `min(base * 2^(attempt - 1), max)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        2u32.checked_pow(exponent)
            .and_then(|factor| self.base_delay.checked_mul(factor))
            .map(|delay| delay.min(self.max_delay))
            .unwrap_or(self.max_delay)
    }

    /// Delay scaled by a jitter sample in [0, 1]; the sample is ignored
    /// when jitter is disabled.
    pub fn jittered_delay(&self, attempt: u32, sample: f64) -> Duration {
        let ceiling = self.delay_for_attempt(attempt);
        if self.jitter {
            ceiling.mul_f64(sample.clamp(0.0, 1.0))
        } else {
            ceiling
        }
    }

    pub fn backoff(&self) -> FullJitterBackoff {
        FullJitterBackoff::new(self.clone(), StdRng::from_os_rng())
    }

    pub fn seeded_backoff(&self, seed: u64) -> FullJitterBackoff {
        FullJitterBackoff::new(self.clone(), StdRng::seed_from_u64(seed))
    }
}

/// Stateful iterator over a [`BackoffPolicy`]'s delays.
///
/// Yields `max_attempts - 1` delays, then `None` to signal that no more
/// attempts are allowed.
#[derive(Debug)]
pub struct FullJitterBackoff {
    policy: BackoffPolicy,
    failures: u32,
    rng: StdRng,
}

impl FullJitterBackoff {
    pub fn new(policy: BackoffPolicy, rng: StdRng) -> Self {
        Self {
            policy,
            failures: 0,
            rng,
        }
    }
}

impl Backoff for FullJitterBackoff {
    fn reset(&mut self) {
        self.failures = 0;
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        self.failures += 1;
        if self.failures >= self.policy.max_attempts {
            return None;
        }
        let sample: f64 = self.rng.random_range(0.0..=1.0);
        Some(self.policy.jittered_delay(self.failures, sample))
    }
}

#[derive(Debug, Error)]
pub enum RetryError {
    #[error("Non-retryable error: {source}")]
    NonRetryable { source: ProviderError },

    #[error("Gave up after {attempts} attempts: {source}")]
    Exhausted { attempts: u32, source: ProviderError },
}

/// Drives an operation through a backoff schedule, counting attempts.
pub struct RetryHandler {
    backoff: FullJitterBackoff,
    attempts: u32,
}

impl RetryHandler {
    pub fn new(backoff: FullJitterBackoff) -> Self {
        Self {
            backoff,
            attempts: 0,
        }
    }

    pub async fn retry<F, Fut, T>(&mut self, mut operation: F) -> Result<T, RetryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        loop {
            self.attempts += 1;

            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) if !error.is_retryable() => {
                    return Err(RetryError::NonRetryable { source: error });
                }
                Err(error) => match self.backoff.next_backoff() {
                    Some(delay) => {
                        tracing::warn!(
                            attempt = self.attempts,
                            error = %error,
                            delay_ms = delay.as_millis() as u64,
                            "Embedding request failed with retryable error, backing off"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        return Err(RetryError::Exhausted {
                            attempts: self.attempts,
                            source: error,
                        });
                    }
                },
            }
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
