use jiff::Timestamp;

/// Source of the current UTC instant.
///
/// The generator never sleeps or waits on the clock; it only samples it, so
/// a scripted implementation can drive every time-dependent code path in
/// tests, including readings that move backward.
pub trait Clock: Send + Sync {
    /// Returns the current time of the clock
    fn now(&self) -> Timestamp;
}

#[derive(Debug)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
