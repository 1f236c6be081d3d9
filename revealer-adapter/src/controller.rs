use revealer::{
    Effect, ElementId, PageMetrics, Revealer, RevealerOptions, ViewportBox, current_section,
    nav_target,
};

use crate::defer::DeferredQueue;
use crate::form::{ContactForm, FormError};
use crate::key::PageKey;
use crate::menu::MenuState;
use crate::nav::{Key, NavCommand, nav_command};
use crate::toast::{Toast, ToastRack};
use crate::tween::{Easing, ScrollTween};

/// Duration of a keyboard-driven section glide.
pub const SECTION_GLIDE_MS: u64 = 400;

/// A framework-neutral controller that wraps a [`revealer::Revealer`] and
/// provides the page workflows around it: deferred reveals, smooth keyboard
/// navigation, toast lifecycles, and the contact-form flow.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_intersection` / `on_key` when UI events occur
/// - `tick(now_ms)` each frame (glide sampling, toast pruning, throttle
///   cooldown clearing)
/// - `drain_deferred(now_ms, ..)` to apply reveals whose delay has elapsed
#[derive(Clone, Debug)]
pub struct PageController<K = ElementId> {
    engine: Revealer<K>,
    glide: Option<ScrollTween>,
    deferred: DeferredQueue<K>,
    toasts: ToastRack,
    menu: MenuState,
}

impl<K: PageKey> PageController<K> {
    pub fn new(options: RevealerOptions<K>) -> Self {
        Self::from_engine(Revealer::new(options))
    }

    pub fn from_engine(engine: Revealer<K>) -> Self {
        Self {
            engine,
            glide: None,
            deferred: DeferredQueue::new(),
            toasts: ToastRack::new(),
            menu: MenuState::new(),
        }
    }

    pub fn engine(&self) -> &Revealer<K> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Revealer<K> {
        &mut self.engine
    }

    pub fn into_engine(self) -> Revealer<K> {
        self.engine
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    pub fn toasts(&self) -> &ToastRack {
        &self.toasts
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn cancel_glide(&mut self) {
        self.glide = None;
    }

    /// Number of reveals waiting in the deferred queue.
    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Scroll event from the UI (wheel/drag/touch). User scrolling wins: any
    /// in-flight glide is cancelled before the engine dispatches.
    ///
    /// Reveals with an apply delay are rerouted into the deferred queue and
    /// resurface through [`Self::drain_deferred`]; every other effect passes
    /// straight through to `emit`.
    pub fn on_scroll(
        &mut self,
        metrics: PageMetrics,
        now_ms: u64,
        geometry: impl FnMut(&K) -> Option<ViewportBox>,
        mut emit: impl FnMut(Effect<K>),
    ) -> bool {
        self.cancel_glide();
        let deferred = &mut self.deferred;
        self.engine
            .on_scroll(metrics, now_ms, geometry, |effect| match effect {
                Effect::Reveal { key, delay_ms } if delay_ms > 0 => {
                    deferred.schedule(now_ms.saturating_add(delay_ms), key);
                }
                other => emit(other),
            })
    }

    /// Intersection-style notification forwarded to the engine, with the
    /// same deferred-reveal rerouting as [`Self::on_scroll`].
    pub fn on_intersection(
        &mut self,
        key: &K,
        is_intersecting: bool,
        now_ms: u64,
        mut emit: impl FnMut(Effect<K>),
    ) -> bool {
        let deferred = &mut self.deferred;
        self.engine
            .on_intersection(key, is_intersecting, |effect| match effect {
                Effect::Reveal { key, delay_ms } if delay_ms > 0 => {
                    deferred.schedule(now_ms.saturating_add(delay_ms), key);
                }
                other => emit(other),
            })
    }

    /// Keyboard navigation. `section_tops` are the sections' document-top
    /// offsets in document order.
    ///
    /// Arrow/page keys step from the current section (the one in the upper
    /// half of the viewport); between sections they do nothing. `Home` glides
    /// to the first section. Returns the glide target offset when the key
    /// led anywhere.
    pub fn on_key(&mut self, key: Key, section_tops: &[u64], now_ms: u64) -> Option<u64> {
        let metrics = self.engine.metrics();
        let target_index = match nav_command(key) {
            NavCommand::FirstSection => (!section_tops.is_empty()).then_some(0)?,
            command => {
                let current = current_section(
                    section_tops
                        .iter()
                        .map(|&top| top as i64 - metrics.scroll_offset as i64),
                    metrics.viewport_height,
                )?;
                let direction = match command {
                    NavCommand::NextSection => 1,
                    _ => -1,
                };
                nav_target(current, direction, section_tops.len())?
            }
        };

        let to = section_tops[target_index].min(metrics.max_scroll_offset());
        self.start_glide(to, now_ms);
        Some(to)
    }

    /// Starts a glide toward `to`, or redirects an in-flight one without a
    /// visual jump.
    pub fn start_glide(&mut self, to: u64, now_ms: u64) {
        match &mut self.glide {
            Some(glide) => glide.retarget(now_ms, to, SECTION_GLIDE_MS),
            None => {
                self.glide = Some(ScrollTween::new(
                    self.engine.metrics().scroll_offset,
                    to,
                    now_ms,
                    SECTION_GLIDE_MS,
                    Easing::EaseOutCubic,
                ));
            }
        }
    }

    /// Advances the controller one frame.
    ///
    /// Clears an expired throttle cooldown, prunes finished toasts, and
    /// samples the active glide. Returns the scroll offset the UI should
    /// apply while a glide is running.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        self.engine.tick(now_ms);
        self.toasts.tick(now_ms);

        let glide = self.glide?;
        let offset = glide.sample(now_ms);
        if glide.is_done(now_ms) {
            self.glide = None;
        }
        Some(offset)
    }

    /// Applies deferred reveals that have come due.
    ///
    /// Every action is guarded before it lands: a key whose element has been
    /// torn down since scheduling (`exists` returns `false`) is dropped
    /// silently, since a timer firing after teardown must be a no-op.
    pub fn drain_deferred(
        &mut self,
        now_ms: u64,
        mut exists: impl FnMut(&K) -> bool,
        mut apply: impl FnMut(K),
    ) {
        self.deferred.drain_due(now_ms, |key| {
            if exists(&key) {
                apply(key);
            }
        });
    }

    pub fn show_toast(&mut self, toast: Toast, now_ms: u64) {
        self.toasts.push(toast, now_ms);
    }

    /// Runs the contact-form submission flow.
    ///
    /// Validation failures surface as error toasts; success clears the form
    /// and shows the success toast. The result is returned for callers that
    /// branch on it.
    pub fn submit_form(
        &mut self,
        form: &mut ContactForm,
        now_ms: u64,
    ) -> Result<(), FormError> {
        match form.submit() {
            Ok(toast) => {
                self.toasts.push(toast, now_ms);
                Ok(())
            }
            Err(err) => {
                self.toasts.push(err.toast(), now_ms);
                Err(err)
            }
        }
    }
}
