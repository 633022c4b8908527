use crate::csv_io::read_csv;
use configuration::LoaderSettings;
use core_types::DataTable;
use std::fmt::Display;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// A bounded retry schedule: a fixed number of attempts with a fixed pause between them.
///
/// There is no backoff and no jitter, and every error is retried alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl From<&LoaderSettings> for RetryPolicy {
    fn from(settings: &LoaderSettings) -> Self {
        Self {
            max_attempts: settings.max_retries,
            delay: settings.retry_delay,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Runs `operation` until it succeeds or the attempts are used up.
    ///
    /// The operation receives the 1-based attempt number. The pause is taken only
    /// between attempts, never after the last one. A policy of zero attempts still
    /// tries once. Returns `None` when every attempt failed.
    pub fn run<T, E, F>(&self, mut operation: F) -> Option<T>
    where
        E: Display,
        F: FnMut(u32) -> Result<T, E>,
    {
        let attempts = self.max_attempts.max(1);

        for attempt in 1..=attempts {
            match operation(attempt) {
                Ok(value) => return Some(value),
                Err(e) if attempt < attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts = attempts,
                        error = %e,
                        "Attempt failed. Retrying in {:?}...",
                        self.delay
                    );
                    thread::sleep(self.delay);
                }
                Err(e) => {
                    tracing::error!(
                        attempts,
                        error = %e,
                        "All attempts failed. Giving up."
                    );
                }
            }
        }

        None
    }
}

/// Reads a CSV file, retrying failed reads according to `policy`.
///
/// Returns `None` once the attempts are exhausted; the reason is only logged.
pub fn read_csv_with_retry<P: AsRef<Path>>(path: P, policy: &RetryPolicy) -> Option<DataTable> {
    let path = path.as_ref();
    policy.run(|attempt| {
        tracing::debug!(path = %path.display(), attempt, "Reading CSV file.");
        read_csv(path)
    })
}
