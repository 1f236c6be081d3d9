/// Default element key for pages that identify elements by index.
pub type ElementId = u64;

/// An element's bounding edges in viewport-relative pixels.
///
/// `top` is the distance from the viewport's top edge to the element's top
/// edge; it goes negative once the element scrolls past the fold, and exceeds
/// the viewport height while the element is still below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBox {
    pub top: i64,
    pub bottom: i64,
}

impl ViewportBox {
    pub fn new(top: i64, bottom: i64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> i64 {
        self.bottom.saturating_sub(self.top)
    }

    /// The same box shifted along the scroll axis (positive = down the page).
    pub fn translated(&self, dy: i64) -> Self {
        Self {
            top: self.top.saturating_add(dy),
            bottom: self.bottom.saturating_add(dy),
        }
    }
}

/// A visual command emitted by the dispatcher for the UI layer to apply.
///
/// `NavbarSolid`, `Parallax` and `Progress` are continuous: they are
/// recomputed and re-emitted on every dispatched tick with no hysteresis.
/// `Reveal` is one-shot: it fires at most once per registered key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect<K = ElementId> {
    /// Navbar background swap; `true` once scrolled past the threshold.
    NavbarSolid(bool),
    /// Parallax translation for the card at `index` along the scroll axis.
    Parallax { index: usize, y_px: f64 },
    /// Scroll-progress-bar width in percent (`0.0..=100.0`).
    Progress { percent: f32 },
    /// A one-shot reveal fired for a registered element.
    ///
    /// `delay_ms` is the element's configured apply delay; the UI (or an
    /// adapter's deferred queue) sequences the visual change after it.
    Reveal { key: K, delay_ms: u64 },
}
