use crate::ViewportBox;

/// A lightweight snapshot of the page geometry for one dispatch.
///
/// This is the ephemeral per-tick value the embedder recomputes on every
/// scroll/resize event; the engine only retains the most recently applied one.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMetrics {
    /// Scroll offset from the top of the document, in pixels.
    pub scroll_offset: u64,
    /// Height of the visible window, in pixels.
    pub viewport_height: u32,
    /// Full height of the document, in pixels.
    pub document_height: u64,
}

impl PageMetrics {
    pub fn new(scroll_offset: u64, viewport_height: u32, document_height: u64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            document_height,
        }
    }

    /// The largest meaningful scroll offset for this document.
    pub fn max_scroll_offset(&self) -> u64 {
        self.document_height
            .saturating_sub(self.viewport_height as u64)
    }

    /// Maps a document-absolute span to a viewport-relative box under the
    /// current scroll offset.
    pub fn viewport_box(&self, doc_top: u64, height: u32) -> ViewportBox {
        let top = doc_top as i64 - self.scroll_offset as i64;
        ViewportBox {
            top,
            bottom: top.saturating_add(height as i64),
        }
    }
}
