use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Page event kinds an embedder can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Load,
    Scroll,
    Resize,
    KeyDown,
    Click,
    Submit,
}

/// An explicit subscription registry: event kind to an ordered handler list,
/// invoked by a single dispatch loop.
///
/// This replaces scattered ad-hoc event registration with one place a test
/// (or an embedder) can drive deterministically, without a real event loop.
/// Handlers for a kind run in subscription order.
pub struct EventRegistry<E> {
    subs: Vec<(EventKind, Box<dyn FnMut(&E)>)>,
}

impl<E> EventRegistry<E> {
    pub fn new() -> Self {
        Self { subs: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.subs.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Appends a handler for `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&E) + 'static) {
        self.subs.push((kind, Box::new(handler)));
    }

    /// Invokes every handler subscribed to `kind`, in subscription order.
    /// Dispatching a kind nobody subscribed to is a no-op.
    pub fn dispatch(&mut self, kind: EventKind, event: &E) {
        for (k, handler) in &mut self.subs {
            if *k == kind {
                handler(event);
            }
        }
    }
}

impl<E> Default for EventRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("handlers", &self.subs.len())
            .finish_non_exhaustive()
    }
}
