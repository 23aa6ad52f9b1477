use std::collections::BTreeSet;
use time::OffsetDateTime;

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Hands out creation-timestamp ids that never repeat, even when two
/// applications are created within the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last_issued: Option<i64>,
    taken: BTreeSet<i64>,
}

impl IdAllocator {
    /// Start above every id already in use.
    pub fn seeded(existing: impl IntoIterator<Item = i64>) -> Self {
        let taken: BTreeSet<i64> = existing.into_iter().collect();
        Self {
            last_issued: taken.last().copied(),
            taken,
        }
    }

    /// Next unused id, normally `max(now_ms, last_issued + 1)`.
    ///
    /// Once `i64::MAX` has been handed out or loaded there is nothing above
    /// it, so the nearest free id to `now_ms` is used instead. `None` only if
    /// every `i64` is taken.
    pub fn next(&mut self, now_ms: i64) -> Option<i64> {
        let id = match self.last_issued {
            Some(last) if now_ms <= last => match last.checked_add(1) {
                Some(id) => id,
                None => self.free_id_near(now_ms)?,
            },
            _ => now_ms,
        };
        self.last_issued = Some(self.last_issued.map_or(id, |last| last.max(id)));
        self.taken.insert(id);
        Some(id)
    }

    /// Lowest free id at or above `start`, else the highest free id below it.
    fn free_id_near(&self, start: i64) -> Option<i64> {
        (start..=i64::MAX)
            .find(|id| !self.taken.contains(id))
            .or_else(|| (i64::MIN..start).rev().find(|id| !self.taken.contains(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_timestamp_when_clock_moves_forward() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next(1_000), Some(1_000));
        assert_eq!(ids.next(2_000), Some(2_000));
    }

    #[test]
    fn same_millisecond_still_unique() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next(1_000), Some(1_000));
        assert_eq!(ids.next(1_000), Some(1_001));
        assert_eq!(ids.next(999), Some(1_002));
    }

    #[test]
    fn seeded_allocator_skips_loaded_ids() {
        let mut ids = IdAllocator::seeded([5_000, 7_000, 6_000]);
        assert_eq!(ids.next(1_000), Some(7_001));
    }

    #[test]
    fn max_loaded_id_does_not_overflow() {
        let mut ids = IdAllocator::seeded([i64::MAX]);
        assert_eq!(ids.next(1_000), Some(1_000));
        assert_eq!(ids.next(1_000), Some(1_001));
        assert_eq!(ids.next(500), Some(500));
    }

    #[test]
    fn free_id_search_skips_loaded_ids() {
        let mut ids = IdAllocator::seeded([i64::MAX, 1_000, 1_001]);
        assert_eq!(ids.next(1_000), Some(1_002));

        let mut ids = IdAllocator::seeded([i64::MAX - 1, i64::MAX]);
        assert_eq!(ids.next(i64::MAX), Some(i64::MAX - 2));
    }
}
