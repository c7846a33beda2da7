use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Produces fresh record ids.
///
/// Callers retry a bounded number of times when an id is already taken,
/// so a source must not keep repeating the same value.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Ids from the wall clock in milliseconds.
///
/// Readings are forced to be strictly increasing within one generator, so
/// two records added in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: AtomicI64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIds {
    fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = if now > prev { now } else { prev + 1 };
            match self
                .last
                .compare_exchange(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Deterministic ids: `{prefix}{n}` with `n` counting up from `start`.
///
/// Handy for seeding screens and for tests.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: &str, start: u64) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: AtomicU64::new(start),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}
