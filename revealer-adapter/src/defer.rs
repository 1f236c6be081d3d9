use alloc::vec::Vec;

/// A fire-and-forget timer queue for deferred page effects.
///
/// This models the behavior layer's "schedule it and forget it" timers: the
/// 200ms skill-bar fill, staggered card entrances, toast phase changes. There
/// are no cancellation handles; a consumer guards each action against the
/// current world (element still attached, toast still shown) when it comes
/// due, and a stale action is simply dropped.
#[derive(Clone, Debug)]
pub struct DeferredQueue<A> {
    // Sorted by due time; equal deadlines keep their scheduling order.
    entries: Vec<(u64, A)>,
}

impl<A> DeferredQueue<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The earliest pending deadline.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.entries.first().map(|(due, _)| *due)
    }

    pub fn schedule(&mut self, due_ms: u64, action: A) {
        let at = self.entries.partition_point(|(due, _)| *due <= due_ms);
        self.entries.insert(at, (due_ms, action));
    }

    /// Removes and yields every action due by `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: u64, mut f: impl FnMut(A)) {
        let due = self.entries.partition_point(|(due, _)| *due <= now_ms);
        for (_, action) in self.entries.drain(..due) {
            f(action);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
