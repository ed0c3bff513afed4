//! Dispatcher tuning knobs

use std::time::Duration;

/// Dispatch queue and worker pool configuration
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Queued jobs held before `enqueue` starts applying backpressure
    pub queue_capacity: usize,
    /// Number of concurrent worker tasks
    pub workers: usize,
    /// Wall-clock budget for a single evaluation attempt
    pub job_timeout: Duration,
    /// Retries granted after the first failed attempt
    pub retry_max: u32,
    /// Delay before each retry, indexed by attempt; the last entry repeats
    pub retry_intervals: Vec<Duration>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 256,
            workers: 2,
            job_timeout: Duration::from_secs(120),
            retry_max: 3,
            retry_intervals: vec![
                Duration::from_secs(10),
                Duration::from_secs(30),
                Duration::from_secs(90),
            ],
        }
    }
}

impl DispatcherConfig {
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_job_timeout(mut self, timeout: Duration) -> Self {
        self.job_timeout = timeout;
        self
    }

    /// Set the retry budget and the delay table in one step
    pub fn with_retries(mut self, retry_max: u32, intervals: Vec<Duration>) -> Self {
        self.retry_max = retry_max;
        self.retry_intervals = intervals;
        self
    }

    /// Delay ahead of zero-based retry `attempt`
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        self.retry_intervals
            .get(attempt as usize)
            .or_else(|| self.retry_intervals.last())
            .copied()
            .unwrap_or(Duration::from_secs(10))
    }
}
