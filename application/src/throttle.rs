//! Requests-per-minute throttle for outbound model calls.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Sliding-window limiter: at most `limit` acquisitions start within any
/// `window`. A limit of zero never waits.
pub struct RequestThrottle {
    limit: usize,
    window: Duration,
    starts: Mutex<VecDeque<Instant>>,
}

impl RequestThrottle {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            starts: Mutex::new(VecDeque::with_capacity(limit)),
        }
    }

    pub fn per_minute(max_rpm: u32) -> Self {
        Self::new(max_rpm as usize, Duration::from_secs(60))
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Wait until a request may start. Returns how long the caller waited.
    pub async fn acquire(&self) -> Duration {
        if self.limit == 0 {
            return Duration::ZERO;
        }

        let began = Instant::now();
        loop {
            let wait = {
                let mut starts = self.starts.lock().unwrap_or_else(|e| e.into_inner());
                let now = Instant::now();
                while let Some(&oldest) = starts.front() {
                    if now.duration_since(oldest) >= self.window {
                        starts.pop_front();
                    } else {
                        break;
                    }
                }

                if starts.len() < self.limit {
                    starts.push_back(now);
                    return now.duration_since(began);
                }

                // front exists: len >= limit > 0
                let oldest = starts.front().copied().unwrap_or(now);
                self.window.saturating_sub(now.duration_since(oldest))
            };

            debug!(wait_ms = wait.as_millis() as u64, "Request throttle engaged");
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_under_limit_does_not_wait() {
        let throttle = RequestThrottle::per_minute(3);
        for _ in 0..3 {
            assert_eq!(throttle.acquire().await, Duration::ZERO);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_over_limit_waits_for_window() {
        let throttle = RequestThrottle::per_minute(2);
        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        let waited = throttle.acquire().await;

        assert!(waited >= Duration::from_secs(60));
        assert!(start.elapsed() >= Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_slides() {
        let throttle = RequestThrottle::per_minute(2);
        throttle.acquire().await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        throttle.acquire().await;

        // first slot frees at t=60, i.e. 30s from now
        let waited = throttle.acquire().await;
        assert!(waited >= Duration::from_secs(30));
        assert!(waited < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_more_than_limit_per_window() {
        let throttle = RequestThrottle::per_minute(10);
        let start = Instant::now();
        let mut times = Vec::new();
        for _ in 0..25 {
            throttle.acquire().await;
            times.push(start.elapsed());
        }
        for (i, t) in times.iter().enumerate() {
            let in_window = times[i..]
                .iter()
                .filter(|u| **u < *t + Duration::from_secs(60))
                .count();
            assert!(in_window <= 10);
        }
    }

    #[tokio::test]
    async fn test_zero_rpm_disables_throttle() {
        let throttle = RequestThrottle::per_minute(0);
        assert_eq!(throttle.limit(), 0);
        for _ in 0..100 {
            assert_eq!(throttle.acquire().await, Duration::ZERO);
        }
    }
}
