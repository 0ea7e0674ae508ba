//! Deferred-action scheduler for the minigame.
//!
//! All temporal sequencing (playback flashes, the input-phase handoff, the
//! inter-level pause) runs through a single `Timeline`. Entries are scheduled
//! at offsets relative to the moment of scheduling, so a chain of flashes
//! accumulates delays rather than racing a wall clock. Cancellation is a
//! generation bump: stale entries are discarded unfired, which is what makes
//! a mid-playback restart safe.

use std::time::Duration;

struct Entry<A> {
    due: Duration,
    generation: u64,
    seq: u64,
    action: A,
}

pub struct Timeline<A> {
    entries: Vec<Entry<A>>,
    elapsed: Duration,
    generation: u64,
    next_seq: u64,
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Timeline {
            entries: Vec::new(),
            elapsed: Duration::ZERO,
            generation: 0,
            next_seq: 0,
        }
    }

    /// Schedules `action` to fire `offset` after the current moment.
    pub fn schedule_in(&mut self, offset: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due: self.elapsed + offset,
            generation: self.generation,
            seq,
            action,
        });
    }

    /// Invalidates every pending entry. Entries scheduled before this call
    /// never fire, even if their due time has already passed.
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
    }

    /// Advances time by `dt` and returns the actions that came due, in due
    /// order (ties fire in scheduling order). Stale-generation entries are
    /// dropped without firing.
    pub fn advance(&mut self, dt: Duration) -> Vec<A> {
        self.elapsed += dt;

        let mut due: Vec<Entry<A>> = Vec::new();
        let mut remaining: Vec<Entry<A>> = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.generation != self.generation {
                continue;
            }
            if entry.due <= self.elapsed {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// True when at least one live entry is waiting to fire.
    pub fn has_pending(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.generation == self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::Timeline;
    use std::time::Duration;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn nothing_fires_before_its_offset() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(ms(100), "a");
        assert_eq!(timeline.advance(ms(99)), Vec::<&str>::new());
        assert!(timeline.has_pending());
    }

    #[test]
    fn fires_in_due_order_regardless_of_scheduling_order() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(ms(300), "late");
        timeline.schedule_in(ms(100), "early");
        assert_eq!(timeline.advance(ms(300)), vec!["early", "late"]);
        assert!(!timeline.has_pending());
    }

    #[test]
    fn equal_offsets_fire_in_scheduling_order() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(ms(100), "first");
        timeline.schedule_in(ms(100), "second");
        assert_eq!(timeline.advance(ms(100)), vec!["first", "second"]);
    }

    #[test]
    fn elapsed_time_accumulates_across_advances() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(ms(100), "a");
        assert!(timeline.advance(ms(60)).is_empty());
        assert_eq!(timeline.advance(ms(60)), vec!["a"]);
    }

    #[test]
    fn offsets_are_relative_to_scheduling_time() {
        let mut timeline = Timeline::new();
        timeline.advance(ms(500));
        timeline.schedule_in(ms(100), "a");
        assert!(timeline.advance(ms(99)).is_empty());
        assert_eq!(timeline.advance(ms(1)), vec!["a"]);
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(ms(100), "stale");
        timeline.cancel_pending();
        assert!(!timeline.has_pending());
        assert!(timeline.advance(ms(1000)).is_empty());
    }

    #[test]
    fn entries_scheduled_after_cancel_still_fire() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(ms(100), "stale");
        timeline.cancel_pending();
        timeline.schedule_in(ms(100), "fresh");
        assert_eq!(timeline.advance(ms(100)), vec!["fresh"]);
    }

    #[test]
    fn cancel_after_due_time_still_suppresses() {
        let mut timeline = Timeline::new();
        timeline.schedule_in(ms(100), "stale");
        timeline.advance(ms(50));
        timeline.cancel_pending();
        // Due time has long passed by now, but the entry belongs to a dead
        // generation and must stay dead.
        assert!(timeline.advance(ms(1000)).is_empty());
    }
}
