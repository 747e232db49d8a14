//! Record identities derived from the wall clock.
//!
//! New comments and journal entries take the current Unix time in
//! milliseconds as their id. Two records created within the same
//! millisecond would collide, so the generator never hands out a value
//! lower than or equal to the previous one.

use chrono::Utc;

/// Strictly increasing, time-derived id source
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above an existing id so seeded records keep their ids unique
    pub fn starting_after(last: i64) -> Self {
        Self { last }
    }

    /// Next id: the current time in ms, bumped past the last issued id
    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_ids_follow_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let id = IdGenerator::new().next_id();
        assert!(id >= before);
    }

    #[test]
    fn test_starting_after_future_value() {
        let far = Utc::now().timestamp_millis() + 1_000_000;
        let mut ids = IdGenerator::starting_after(far);
        assert_eq!(ids.next_id(), far + 1);
    }
}
