// Status polling for a submitted job. The poller sleeps for a fixed
// interval, checks the job once, and repeats until the job completes,
// fails, or the accumulated wait reaches the ceiling. Elapsed time is the
// sum of the intervals slept, so runs are deterministic under a fake
// `Sleeper`.

use crate::api::VideoApi;
use crate::config::Config;
use crate::error::{Result, UgcError};
use crate::types::{failure_message, JobHandle, JobStatus};
use serde_json::Value;
use std::time::Duration;

/// Blocks the current thread between status checks.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Real sleeper backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Receives progress while a job is still running.
pub trait PollObserver {
    /// Called after every non-terminal status check.
    fn waiting(&mut self, status: &str, elapsed: Duration);

    /// Called once when polling stops, whatever the outcome.
    fn finished(&mut self) {}
}

/// Observer that ignores progress.
impl PollObserver for () {
    fn waiting(&mut self, _status: &str, _elapsed: Duration) {}
}

/// Fixed-interval poller with a wait ceiling.
#[derive(Debug, Clone)]
pub struct Poller<S = ThreadSleeper> {
    interval: Duration,
    max_wait: Duration,
    sleeper: S,
}

impl Poller<ThreadSleeper> {
    /// Creates a poller that really sleeps.
    pub fn new(interval: Duration, max_wait: Duration) -> Self {
        Self {
            interval,
            max_wait,
            sleeper: ThreadSleeper,
        }
    }

    /// Creates a poller with the interval and ceiling from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.poll_interval, config.max_wait)
    }
}

impl<S: Sleeper> Poller<S> {
    /// Swaps in a different sleeper.
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> Poller<T> {
        Poller {
            interval: self.interval,
            max_wait: self.max_wait,
            sleeper,
        }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Polls `job` until it reaches a terminal state.
    ///
    /// Returns the full response of the completing status check. A failed
    /// job becomes [`UgcError::JobFailed`], an exhausted wait becomes
    /// [`UgcError::Timeout`], and any request error aborts polling as-is.
    pub fn wait_for<A, O>(&mut self, api: &A, job: &JobHandle, observer: &mut O) -> Result<Value>
    where
        A: VideoApi + ?Sized,
        O: PollObserver + ?Sized,
    {
        if self.interval.is_zero() {
            return Err(UgcError::Usage("poll interval must be greater than zero".into()));
        }
        let outcome = self.run(api, job, observer);
        observer.finished();
        outcome
    }

    fn run<A, O>(&mut self, api: &A, job: &JobHandle, observer: &mut O) -> Result<Value>
    where
        A: VideoApi + ?Sized,
        O: PollObserver + ?Sized,
    {
        let mut elapsed = Duration::ZERO;
        while elapsed < self.max_wait {
            self.sleeper.sleep(self.interval);
            elapsed += self.interval;

            let response = api.fetch_video(&job.id)?;
            match JobStatus::from_response(&response) {
                JobStatus::Completed => {
                    tracing::debug!(job = %job.id, elapsed_secs = elapsed.as_secs(), "job completed");
                    return Ok(response);
                }
                JobStatus::Failed => {
                    tracing::debug!(job = %job.id, elapsed_secs = elapsed.as_secs(), "job failed");
                    return Err(UgcError::JobFailed(failure_message(&response)));
                }
                JobStatus::Pending(status) => {
                    tracing::debug!(job = %job.id, %status, elapsed_secs = elapsed.as_secs(), "job pending");
                    observer.waiting(&status, elapsed);
                }
            }
        }
        Err(UgcError::Timeout(self.max_wait))
    }
}
