/// Number of frames a stat counter takes to reach its target.
pub const COUNT_UP_STEPS: u64 = 50;

/// Frame-driven count-up for a stat number ("120+" style counters).
///
/// Advance it once per animation frame: the displayed value rises by a
/// fiftieth of the target per frame, rounded up so it is always moving, and
/// lands exactly on the target. Arming it once per session is the reveal
/// tracker's job; this type only animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountUp {
    target: u64,
    frame: u64,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self { target, frame: 0 }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// The value to display for the current frame.
    pub fn value(&self) -> u64 {
        if self.target == 0 {
            return 0;
        }
        (self.target * self.frame)
            .div_ceil(COUNT_UP_STEPS)
            .min(self.target)
    }

    /// Advances one frame and returns the new display value.
    pub fn advance(&mut self) -> u64 {
        if !self.is_done() {
            self.frame += 1;
        }
        self.value()
    }

    pub fn is_done(&self) -> bool {
        self.target == 0 || self.frame >= COUNT_UP_STEPS
    }
}
