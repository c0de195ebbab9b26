//! Monotonic ID generation.

use std::time::{Duration, SystemTime};

use ulid::{Generator, Ulid};

/// Issues strictly increasing ULIDs and wraps them in typed IDs.
///
/// Two values from the same generator are never equal, even when issued
/// within the same millisecond or after the wall clock steps backwards.
/// Issuing never blocks, so it is safe to call while holding a lock.
pub struct IdGenerator {
    inner: Generator,
    last: Ulid,
}

impl IdGenerator {
    /// Creates a generator with no history.
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
            last: Ulid::nil(),
        }
    }

    /// Returns the next ID.
    pub fn next<I: From<Ulid>>(&mut self) -> I {
        I::from(self.next_ulid())
    }

    fn next_ulid(&mut self) -> Ulid {
        self.next_ulid_at(SystemTime::now())
    }

    fn next_ulid_at(&mut self, mut at: SystemTime) -> Ulid {
        loop {
            match self.inner.generate_from_datetime(at) {
                Ok(ulid) => {
                    self.last = ulid;
                    return ulid;
                }
                // The random space of the last millisecond is spent. The one
                // after it is empty, so the retry cannot overflow again.
                Err(_) => at = self.last.datetime() + Duration::from_millis(1),
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{ItemId, ListId};

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::new();
        let mut previous: ListId = ids.next();
        for _ in 0..10_000 {
            let current: ListId = ids.next();
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_ids_increase_when_clock_steps_back() {
        let mut ids = IdGenerator::new();
        let now = SystemTime::now();
        let first = ids.next_ulid_at(now);
        let earlier = ids.next_ulid_at(now - Duration::from_secs(60));
        assert!(earlier > first);
        assert_eq!(earlier.timestamp_ms(), first.timestamp_ms());
    }

    #[test]
    fn test_ids_within_one_millisecond_share_its_timestamp() {
        let mut ids = IdGenerator::new();
        let ms = 1_700_000_000_000;
        let at = SystemTime::UNIX_EPOCH + Duration::from_millis(ms);
        let issued: Vec<_> = (0..1_000).map(|_| ids.next_ulid_at(at)).collect();
        assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(issued.iter().all(|u| u.timestamp_ms() == ms));
    }

    #[test]
    fn test_ids_never_repeat_across_types() {
        let mut ids = IdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            let list: ListId = ids.next();
            let item: ItemId = ids.next();
            assert!(seen.insert(list.ulid()));
            assert!(seen.insert(item.ulid()));
        }
    }
}
