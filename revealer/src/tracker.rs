use alloc::vec::Vec;

use crate::ViewportBox;
use crate::key::{ElementKey, KeyIndexMap};
use crate::visibility::is_past_threshold;

/// A registered animatable element.
///
/// The element itself is foreign (owned by the UI tree), so the tracker
/// holds only its key plus a `triggered` flag of its own, external to the
/// element.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animatable<K> {
    key: K,
    threshold_fraction: f32,
    apply_delay_ms: u64,
    triggered: bool,
}

impl<K> Animatable<K> {
    /// Creates an entry that reveals on plain visibility (threshold `1.0`),
    /// with no apply delay.
    pub fn new(key: K) -> Self {
        Self {
            key,
            threshold_fraction: 1.0,
            apply_delay_ms: 0,
            triggered: false,
        }
    }

    /// Fraction of the viewport height the element's top edge must cross to
    /// become eligible, e.g. `0.8` for section reveals.
    pub fn with_threshold_fraction(mut self, threshold_fraction: f32) -> Self {
        self.threshold_fraction = threshold_fraction;
        self
    }

    /// Delay between the trigger and the visual apply, e.g. `200` ms to
    /// sequence a skill-bar fill after its container's transition starts.
    pub fn with_apply_delay_ms(mut self, apply_delay_ms: u64) -> Self {
        self.apply_delay_ms = apply_delay_ms;
        self
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn threshold_fraction(&self) -> f32 {
        self.threshold_fraction
    }

    pub fn apply_delay_ms(&self) -> u64 {
        self.apply_delay_ms
    }

    /// Whether the one-shot transition has already fired.
    pub fn triggered(&self) -> bool {
        self.triggered
    }
}

/// One-shot reveal tracker: each registered element transitions at most once.
///
/// Entries are registered once at initialization and never removed for the
/// tracker's lifetime; `triggered` flips `false → true` exactly once per
/// entry, irreversibly. The visibility test may keep reporting `true` on
/// every tick while an element stays in view; the flag is what guarantees
/// the transition itself fires only once.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    entries: Vec<Animatable<K>>,
    index: KeyIndexMap<K>,
}

impl<K: ElementKey + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: KeyIndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers an element. Re-registering an existing key is ignored.
    ///
    /// Returns whether the entry was added.
    pub fn register(&mut self, entry: Animatable<K>) -> bool {
        if self.index.contains_key(&entry.key) {
            rwarn!("RevealTracker: duplicate registration ignored");
            return false;
        }
        self.index.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = Animatable<K>>) {
        for entry in entries {
            self.register(entry);
        }
    }

    pub fn is_registered(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&Animatable<K>> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Whether the element's transition has fired. Unknown keys report
    /// `false`.
    pub fn is_triggered(&self, key: &K) -> bool {
        self.get(key).is_some_and(Animatable::triggered)
    }

    pub fn for_each(&self, mut f: impl FnMut(&Animatable<K>)) {
        for entry in &self.entries {
            f(entry);
        }
    }

    /// One-shot visibility check for a single element.
    ///
    /// Returns whether the transition fired on this call. An already-triggered
    /// entry returns `false` immediately, without consulting `geometry`. An
    /// entry whose geometry is gone (element detached) also returns `false`
    /// but stays armed for a later tick. The read of `triggered` and the set
    /// happen within this one synchronous call, with no suspension point
    /// between them.
    pub fn maybe_trigger(
        &mut self,
        key: &K,
        viewport_height: u32,
        geometry: impl FnOnce(&K) -> Option<ViewportBox>,
    ) -> bool {
        let Some(&i) = self.index.get(key) else {
            return false;
        };
        let entry = &mut self.entries[i];
        if entry.triggered {
            return false;
        }
        let Some(bbox) = geometry(&entry.key) else {
            return false;
        };
        if !is_past_threshold(bbox, viewport_height, entry.threshold_fraction) {
            return false;
        }
        entry.triggered = true;
        rtrace!(threshold = entry.threshold_fraction as f64, "reveal triggered");
        true
    }

    /// Runs the one-shot test over every registered element, in registration
    /// order, calling `fired` for each transition that fired this tick.
    pub fn maybe_trigger_all(
        &mut self,
        viewport_height: u32,
        mut geometry: impl FnMut(&K) -> Option<ViewportBox>,
        mut fired: impl FnMut(&Animatable<K>),
    ) {
        for entry in &mut self.entries {
            if entry.triggered {
                continue;
            }
            let Some(bbox) = geometry(&entry.key) else {
                continue;
            };
            if !is_past_threshold(bbox, viewport_height, entry.threshold_fraction) {
                continue;
            }
            entry.triggered = true;
            fired(entry);
        }
    }

    /// Push-based trigger path for intersection-style notifications.
    ///
    /// An enter notification (`is_intersecting == true`) fires the same
    /// one-shot transition as the polled path, without a geometry query.
    /// Exit notifications, repeats after the first enter, and unknown keys
    /// are no-ops.
    pub fn notify_intersection(&mut self, key: &K, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(&i) = self.index.get(key) else {
            return false;
        };
        let entry = &mut self.entries[i];
        if entry.triggered {
            return false;
        }
        entry.triggered = true;
        rtrace!("reveal triggered (intersection)");
        true
    }
}
