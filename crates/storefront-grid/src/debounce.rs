//! Debounced text input commit.
//!
//! Filter inputs only commit after a quiet period with no further
//! keystrokes. The implementation is a generation-counted pending
//! value: every keystroke bumps the generation and hands the caller a
//! ticket to schedule a delayed commit with; a commit whose ticket is
//! no longer current is a no-op. Last keystroke wins, and teardown is
//! covered for free (a dropped or cancelled debouncer never validates
//! an old ticket).

use std::time::Duration;

/// Default quiet period before a filter input commits.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<String>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a keystroke. Returns the ticket the caller must present
    /// after sleeping for [`Self::delay`]; any earlier ticket is
    /// thereby invalidated.
    pub fn input(&mut self, value: impl Into<String>) -> u64 {
        self.generation += 1;
        self.pending = Some(value.into());
        self.generation
    }

    /// Attempt to commit. Returns the pending value only when `ticket`
    /// is still the latest; stale tickets return `None` and leave the
    /// newer pending value untouched.
    pub fn commit(&mut self, ticket: u64) -> Option<String> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop any pending value and invalidate outstanding tickets.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// The uncommitted value, for echoing in the input widget.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_of_rapid_inputs_commits() {
        let mut debouncer = Debouncer::default();
        let tickets: Vec<u64> = ["a", "ab", "abc", "abcd", "abcde"]
            .into_iter()
            .map(|v| debouncer.input(v))
            .collect();

        // The first four timers fire after being superseded.
        for stale in &tickets[..4] {
            assert_eq!(debouncer.commit(*stale), None);
        }
        assert_eq!(debouncer.commit(tickets[4]), Some("abcde".to_string()));
        // The winning ticket commits exactly once.
        assert_eq!(debouncer.commit(tickets[4]), None);
    }

    #[test]
    fn cancel_invalidates_outstanding_tickets() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.input("stale");
        debouncer.cancel();
        assert_eq!(debouncer.commit(ticket), None);
        assert_eq!(debouncer.pending(), None);
    }
}
