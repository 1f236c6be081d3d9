/// A drop-trailing throttle gate.
///
/// The guarded body runs at most once per `limit_ms` window per instance.
/// Calls that land inside the cooldown window are dropped outright (no
/// queueing, no coalescing of arguments), so under a continuous event stream
/// the body runs on the leading edge of each window and the stream's trailing
/// calls are lost.
///
/// The gate has no clock of its own: callers pass `now_ms` with every call,
/// and the cooldown clears once the deadline passes, either lazily on the
/// next [`Throttle::run`] or eagerly via [`Throttle::tick`]. Clearing is
/// idempotent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle {
    limit_ms: u64,
    cooldown_until: Option<u64>,
}

impl Throttle {
    pub fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms: limit_ms.max(1),
            cooldown_until: None,
        }
    }

    pub fn limit_ms(&self) -> u64 {
        self.limit_ms
    }

    pub fn in_cooldown(&self, now_ms: u64) -> bool {
        self.cooldown_until.is_some_and(|until| now_ms < until)
    }

    /// Clears an expired cooldown. Safe to call on every frame.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(until) = self.cooldown_until {
            if now_ms >= until {
                self.cooldown_until = None;
            }
        }
    }

    /// Opens the gate if no cooldown is active, entering a fresh cooldown for
    /// `limit_ms`. Returns whether the caller may proceed.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        self.tick(now_ms);
        if self.cooldown_until.is_some() {
            return false;
        }
        self.cooldown_until = Some(now_ms.saturating_add(self.limit_ms));
        true
    }

    /// Runs `f` synchronously if the gate is open, dropping the call
    /// otherwise.
    ///
    /// The cooldown is entered before `f` runs, so a panicking body cannot
    /// leave the gate stuck: the deadline expires on schedule regardless.
    pub fn run<R>(&mut self, now_ms: u64, f: impl FnOnce() -> R) -> Option<R> {
        self.try_acquire(now_ms).then(f)
    }

    /// Drops any pending cooldown immediately.
    pub fn reset(&mut self) {
        self.cooldown_until = None;
    }
}
