use alloc::sync::Arc;

use crate::ElementId;
use crate::effects::NAVBAR_SOLID_OFFSET;
use crate::engine::Revealer;

/// A callback fired when an engine state update occurs.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Revealer<K>) + Send + Sync>;

/// Configuration for [`crate::Revealer`].
///
/// This type is cheap to clone: the callback is stored in an `Arc` so
/// adapters can tweak a field and call `Revealer::set_options` without
/// reallocating closures.
pub struct RevealerOptions<K = ElementId> {
    /// Minimum interval between dispatched scroll ticks. The default of 16ms
    /// caps dispatch at roughly one tick per frame at 60Hz.
    pub throttle_ms: u64,

    /// Enables/disables the engine. When disabled, every entry point is a
    /// no-op.
    pub enabled: bool,

    /// Scroll offset past which `Effect::NavbarSolid(true)` is emitted.
    pub navbar_offset: u64,

    /// Number of parallax cards to emit offsets for, indexed `0..count`.
    pub parallax_count: usize,

    /// Optional callback fired when the engine's internal state changes.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> RevealerOptions<K> {
    pub fn new() -> Self {
        Self {
            throttle_ms: 16,
            enabled: true,
            navbar_offset: NAVBAR_SOLID_OFFSET,
            parallax_count: 0,
            on_change: None,
        }
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_navbar_offset(mut self, navbar_offset: u64) -> Self {
        self.navbar_offset = navbar_offset;
        self
    }

    pub fn with_parallax_count(mut self, parallax_count: usize) -> Self {
        self.parallax_count = parallax_count;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Revealer<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for RevealerOptions<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for RevealerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            throttle_ms: self.throttle_ms,
            enabled: self.enabled,
            navbar_offset: self.navbar_offset,
            parallax_count: self.parallax_count,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> core::fmt::Debug for RevealerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RevealerOptions")
            .field("throttle_ms", &self.throttle_ms)
            .field("enabled", &self.enabled)
            .field("navbar_offset", &self.navbar_offset)
            .field("parallax_count", &self.parallax_count)
            .finish_non_exhaustive()
    }
}
