//! Virtual-time timer queue.
//!
//! Components never hold timers themselves. They return "fire `T` after
//! `delay` ms" requests, which the browser host turns into `gloo_timers`
//! timeouts and which tests feed into [`ManualScheduler`] to step through a
//! sequence without waiting on a real clock.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

#[derive(Debug, Clone)]
struct Entry<T> {
    due_ms: f64,
    seq: u64,
    item: T,
}

/// Queue of items that become due at a virtual time.
#[derive(Debug, Clone)]
pub struct ManualScheduler<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
    now_ms: f64,
}

impl<T> Default for ManualScheduler<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), next_seq: 0, now_ms: 0.0 }
    }
}

impl<T> ManualScheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Queue `item` to fire `delay_ms` after the current virtual time.
    pub fn schedule(&mut self, delay_ms: u32, item: T) {
        let due_ms = self.now_ms + f64::from(delay_ms);
        self.entries.push(Entry { due_ms, seq: self.next_seq, item });
        self.next_seq += 1;
    }

    /// Move the clock forward to `now_ms` and drain everything due by then,
    /// earliest first. Items due at the same instant keep insertion order.
    /// Time never moves backwards.
    pub fn advance_to(&mut self, now_ms: f64) -> Vec<T> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;
        let (mut due, rest): (Vec<_>, Vec<_>) = self.entries.drain(..).partition(|e| e.due_ms <= now);
        self.entries = rest;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|e| e.item).collect()
    }

    /// Time of the earliest pending item, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<f64> {
        self.entries.iter().map(|e| e.due_ms).min_by(f64::total_cmp)
    }

    /// Number of items not yet fired.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
