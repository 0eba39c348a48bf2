use alloc::sync::Arc;

use scroll_window::{RangeStrategy, RenderedRange, ScrollBehavior};

use crate::{Easing, SimViewport, Tween, capture_anchor, resolve_anchor};

/// A framework-neutral driver for a [`RangeStrategy`] attached to a [`SimViewport`].
///
/// The controller owns the whole scroll state, so a host only forwards raw input:
/// - `on_scroll` / `on_viewport_size` when the UI reports changes,
/// - `set_items` / `set_items_anchored` when the data set is replaced,
/// - `tick(now_ms)` each frame while [`Self::is_animating`] (smooth scrolling).
///
/// Scroll commands issued by the strategy (see [`RangeStrategy::scroll_to_index`]) are applied
/// after the strategy call returns, followed by the `on_content_scrolled` notification a real
/// scroll container would produce.
#[derive(Debug)]
pub struct Controller<T> {
    strategy: RangeStrategy<T, SimViewport>,
    tween: Option<Tween>,
    smooth_duration_ms: u64,
    easing: Easing,
}

impl<T> Controller<T> {
    /// Attaches `viewport` to `strategy` and wraps both.
    pub fn new(mut strategy: RangeStrategy<T, SimViewport>, viewport: SimViewport) -> Self {
        strategy.attach(viewport);
        Self {
            strategy,
            tween: None,
            smooth_duration_ms: 240,
            easing: Easing::default(),
        }
    }

    /// Duration and easing used for [`ScrollBehavior::Smooth`] requests.
    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn strategy(&self) -> &RangeStrategy<T, SimViewport> {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut RangeStrategy<T, SimViewport> {
        &mut self.strategy
    }

    pub fn into_strategy(self) -> RangeStrategy<T, SimViewport> {
        self.strategy
    }

    pub fn viewport(&self) -> Option<&SimViewport> {
        self.strategy.viewport()
    }

    pub fn rendered_range(&self) -> Option<RenderedRange> {
        self.strategy.rendered_range()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport().map_or(0.0, SimViewport::scroll_offset)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the user scrolled (wheel/drag). Cancels any active tween.
    pub fn on_scroll(&mut self, scroll_offset: f64) {
        self.cancel_animation();
        self.apply_scroll_offset(scroll_offset);
    }

    pub fn on_viewport_size(&mut self, viewport_size: f64) {
        let Some(viewport) = self.strategy.viewport_mut() else {
            return;
        };
        if !viewport.set_size(viewport_size) {
            return;
        }
        let offset = viewport.scroll_offset();
        viewport.set_scroll_offset(offset);
        self.strategy.on_content_scrolled();
    }

    /// Replaces the items, keeping the scroll offset (clamped to the new content size).
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        let items = items.into();
        if let Some(viewport) = self.strategy.viewport_mut() {
            viewport.set_len(items.len());
        }
        self.strategy.update_items(items);
        let offset = self.scroll_offset();
        self.apply_scroll_offset(offset);
    }

    /// Replaces the items while keeping the item under the scroll offset in place.
    ///
    /// `key_of` must return a stable identity for an item. Returns `false` when the anchored
    /// item is not part of the new items; the scroll offset is then only clamped.
    pub fn set_items_anchored<K: PartialEq>(
        &mut self,
        items: impl Into<Arc<[T]>>,
        key_of: impl Fn(&T) -> K,
    ) -> bool {
        let anchor = capture_anchor(self.strategy.oracle(), self.scroll_offset(), &key_of);
        self.set_items(items);
        let Some(anchor) = anchor else {
            return false;
        };
        let Some(target) = resolve_anchor(self.strategy.oracle(), &anchor, &key_of) else {
            return false;
        };
        vdebug!(offset = target, "Controller::set_items_anchored");
        self.cancel_animation();
        self.apply_scroll_offset(target);
        true
    }

    /// Scrolls so that item `index` starts at the top of the viewport.
    ///
    /// [`ScrollBehavior::Smooth`] starts a tween (drive it with [`Self::tick`]); the other
    /// behaviors jump immediately. Returns the clamped target offset.
    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior, now_ms: u64) -> f64 {
        self.strategy.scroll_to_index(index, behavior);
        let request = self
            .strategy
            .viewport_mut()
            .and_then(SimViewport::take_scroll_request);
        let Some((offset, behavior)) = request else {
            return self.scroll_offset();
        };
        match behavior {
            ScrollBehavior::Smooth => self.start_tween_to_offset(offset, now_ms),
            ScrollBehavior::Auto | ScrollBehavior::Instant => {
                self.cancel_animation();
                self.apply_scroll_offset(offset)
            }
        }
    }

    /// Starts a tween from the current offset to `offset`.
    ///
    /// Returns the clamped target offset.
    pub fn start_tween_to_offset(&mut self, offset: f64, now_ms: u64) -> f64 {
        let Some(viewport) = self.strategy.viewport() else {
            return 0.0;
        };
        let to = viewport.clamp_scroll_offset(offset);
        let from = viewport.scroll_offset();
        vtrace!(from, to, now_ms, "Controller::start_tween_to_offset");
        self.tween = Some(Tween::new(
            from,
            to,
            now_ms,
            self.smooth_duration_ms,
            self.easing,
        ));
        to
    }

    /// Advances an active tween.
    ///
    /// Returns the new scroll offset, or `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.apply_scroll_offset(offset))
    }

    /// Detaches the strategy (closing its index stream) and returns the viewport.
    pub fn detach(&mut self) -> Option<SimViewport> {
        self.cancel_animation();
        self.strategy.detach()
    }

    fn apply_scroll_offset(&mut self, offset: f64) -> f64 {
        let Some(viewport) = self.strategy.viewport_mut() else {
            return 0.0;
        };
        if viewport.set_scroll_offset(offset) {
            self.strategy.on_content_scrolled();
        }
        self.scroll_offset()
    }
}
