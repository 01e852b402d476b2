//! Timing of requests and other fallible operations.

use std::future::Future;
use std::time::{Duration, Instant};

/// The outcome of an operation together with its wall-clock duration. Failures are passed through
/// untimed.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    pub fn result<E>(f: impl FnOnce() -> Result<V, E>) -> Result<Self, E> {
        let started = Instant::now();
        let value = f()?;
        Ok(Self { value, elapsed: started.elapsed() })
    }

    pub async fn future<E>(f: impl Future<Output = Result<V, E>>) -> Result<Self, E> {
        let started = Instant::now();
        let value = f.await?;
        Ok(Self { value, elapsed: started.elapsed() })
    }
}
