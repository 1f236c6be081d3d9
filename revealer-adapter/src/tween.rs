/// A tween that glides the page's scroll offset toward a target.
///
/// Used for keyboard section navigation and scroll-to-top. The embedder
/// samples it once per frame and applies the returned offset to the real
/// scroll container; the tween itself never touches the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTween {
    from: u64,
    to: u64,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl ScrollTween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn target(&self) -> u64 {
        self.to
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Samples the eased offset at `now_ms`, clamped to the tween's span.
    pub fn sample(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);

        let from = self.from as f64;
        let to = self.to as f64;
        let offset = from + (to - from) * eased;
        if offset <= 0.0 { 0 } else { offset as u64 }
    }

    /// Redirects an in-flight glide toward a new target, starting from the
    /// currently sampled offset so there is no visual jump.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        *self = Self::new(self.sample(now_ms), new_to, now_ms, duration_ms, self.easing);
    }
}

/// Easing curves for [`ScrollTween`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Fast start, soft landing; the default feel for section glides.
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}
