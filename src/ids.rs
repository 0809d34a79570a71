//! Todo Id Generation

use crate::models::TodoId;

/// Session-seeded monotonic id source.
///
/// Ids look like `"{seed:x}-{counter}"`. The counter makes them unique
/// within a session; the seed keeps sessions apart. The store still
/// checks candidates against the current list before using one.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: u64,
    counter: u64,
}

impl IdGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }

    /// Seed from the wall clock and `Math.random()`
    pub fn from_browser() -> Self {
        let millis = js_sys::Date::now() as u64;
        let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self::with_seed((millis << 20) ^ noise)
    }

    pub fn next_id(&mut self) -> TodoId {
        self.counter += 1;
        TodoId::new(format!("{:x}-{}", self.seed, self.counter))
    }
}
