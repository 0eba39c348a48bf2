use alloc::sync::Arc;
use core::fmt;

use crate::stream::IndexStream;
use crate::{
    BufferConfig, ConfigError, RangeUpdate, RenderedRange, ScrollBehavior, ScrollState,
    SizingOracle, SubscriptionId, Viewport, compute_rendered_range,
};

enum Phase<V> {
    Detached,
    Attached(V),
    /// Entered by `detach`; never left.
    Closed,
}

/// Keeps a buffer of rendered items around the visible area of a [`Viewport`].
///
/// The strategy owns the sizing inputs (items, size function, buffer thresholds) and, once
/// attached, the viewport it drives. Hosts forward their events to it:
///
/// - [`Self::on_content_scrolled`] after the scroll offset changed,
/// - [`Self::on_data_length_changed`] after items were added or removed,
/// - [`Self::update_item_and_buffer_size`] when any sizing input changes.
///
/// Each event recomputes the rendered range (see [`compute_rendered_range`]), commits it to
/// the viewport together with the rendered content offset, and publishes the first visible
/// index to subscribers. Consecutive duplicates are not published.
///
/// Lifecycle: a strategy starts detached, becomes attached with [`Self::attach`], and is closed
/// for good by [`Self::detach`]. Viewport-facing operations are no-ops unless attached.
pub struct RangeStrategy<T, V> {
    oracle: SizingOracle<T>,
    buffer: BufferConfig,
    phase: Phase<V>,
    stream: IndexStream,
    /// Inputs and output of the last committed pass, used to skip repeated passes.
    last_pass: Option<(ScrollState, RenderedRange)>,
}

impl<T, V: Viewport> RangeStrategy<T, V> {
    pub fn new(
        size_fn: impl Fn(&T) -> f64 + Send + Sync + 'static,
        items: impl Into<Arc<[T]>>,
        buffer: BufferConfig,
    ) -> Self {
        Self::from_oracle(SizingOracle::from_fn(size_fn, items), buffer)
    }

    /// Same as [`Self::new`], with the thresholds given in pixels and validated here.
    pub fn with_buffer_px(
        size_fn: impl Fn(&T) -> f64 + Send + Sync + 'static,
        items: impl Into<Arc<[T]>>,
        min_buffer_px: f64,
        max_buffer_px: f64,
    ) -> Result<Self, ConfigError> {
        let buffer = BufferConfig::new(min_buffer_px, max_buffer_px)?;
        Ok(Self::new(size_fn, items, buffer))
    }

    pub fn from_oracle(oracle: SizingOracle<T>, buffer: BufferConfig) -> Self {
        vdebug!(
            len = oracle.len(),
            min_buffer_px = buffer.min_buffer_px(),
            max_buffer_px = buffer.max_buffer_px(),
            "RangeStrategy::new"
        );
        Self {
            oracle,
            buffer,
            phase: Phase::Detached,
            stream: IndexStream::new(),
            last_pass: None,
        }
    }

    pub fn oracle(&self) -> &SizingOracle<T> {
        &self.oracle
    }

    pub fn items(&self) -> &Arc<[T]> {
        self.oracle.items()
    }

    pub fn buffer_config(&self) -> BufferConfig {
        self.buffer
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.phase, Phase::Attached(_))
    }

    /// `true` once [`Self::detach`] has been called.
    pub fn is_closed(&self) -> bool {
        matches!(self.phase, Phase::Closed)
    }

    pub fn viewport(&self) -> Option<&V> {
        match &self.phase {
            Phase::Attached(viewport) => Some(viewport),
            _ => None,
        }
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        match &mut self.phase {
            Phase::Attached(viewport) => Some(viewport),
            _ => None,
        }
    }

    /// The range most recently committed to the viewport, if attached.
    pub fn rendered_range(&self) -> Option<RenderedRange> {
        self.viewport().map(Viewport::rendered_range)
    }

    /// The most recently published first visible index.
    pub fn first_visible_index(&self) -> Option<usize> {
        self.stream.last()
    }

    /// Registers a callback for first-visible-index changes.
    ///
    /// Returns `None` after [`Self::detach`]. Subscribers only receive values published after
    /// they subscribed; subscribe before [`Self::attach`] to observe the initial index.
    pub fn subscribe(&mut self, f: impl FnMut(usize) + 'static) -> Option<SubscriptionId> {
        self.stream.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.stream.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.stream.subscriber_count()
    }

    /// Takes ownership of `viewport` and establishes the initial window.
    ///
    /// Attaching while attached replaces the previous viewport (which is dropped). Attaching
    /// after [`Self::detach`] is ignored.
    pub fn attach(&mut self, viewport: V) {
        match self.phase {
            Phase::Closed => {
                vwarn!("RangeStrategy::attach after detach is ignored");
                return;
            }
            Phase::Attached(_) => {
                vwarn!("RangeStrategy::attach while already attached; replacing viewport");
            }
            Phase::Detached => {}
        }
        vdebug!(len = self.oracle.len(), "RangeStrategy::attach");
        self.phase = Phase::Attached(viewport);
        self.last_pass = None;
        self.update_total_content_size();
        self.update_rendered_range();
    }

    /// Closes the index stream and hands the viewport back.
    ///
    /// Subsequent calls return `None`.
    pub fn detach(&mut self) -> Option<V> {
        if !self.stream.is_closed() {
            vdebug!("RangeStrategy::detach");
        }
        self.stream.close();
        self.last_pass = None;
        match core::mem::replace(&mut self.phase, Phase::Closed) {
            Phase::Attached(viewport) => Some(viewport),
            Phase::Detached | Phase::Closed => None,
        }
    }

    /// Replaces the size function, the items, and the buffer thresholds in one step.
    ///
    /// On error nothing changes. On success the total content size and rendered range are
    /// recomputed (when attached).
    pub fn update_item_and_buffer_size(
        &mut self,
        size_fn: impl Fn(&T) -> f64 + Send + Sync + 'static,
        items: impl Into<Arc<[T]>>,
        min_buffer_px: f64,
        max_buffer_px: f64,
    ) -> Result<(), ConfigError> {
        let buffer = match BufferConfig::new(min_buffer_px, max_buffer_px) {
            Ok(buffer) => buffer,
            Err(err) => {
                vwarn!(%err, "RangeStrategy::update_item_and_buffer_size rejected");
                return Err(err);
            }
        };
        self.replace(SizingOracle::from_fn(size_fn, items), buffer);
        Ok(())
    }

    /// Replaces the sizing inputs with an already built oracle and validated thresholds.
    pub fn replace(&mut self, oracle: SizingOracle<T>, buffer: BufferConfig) {
        vdebug!(
            len = oracle.len(),
            min_buffer_px = buffer.min_buffer_px(),
            max_buffer_px = buffer.max_buffer_px(),
            "RangeStrategy::replace"
        );
        self.oracle = oracle;
        self.buffer = buffer;
        self.last_pass = None;
        self.update_total_content_size();
        self.update_rendered_range();
    }

    /// Replaces only the items, keeping the size function and thresholds.
    pub fn update_items(&mut self, items: impl Into<Arc<[T]>>) {
        let oracle = SizingOracle::new(Arc::clone(self.oracle.size_fn()), items.into());
        self.replace(oracle, self.buffer);
    }

    /// Replaces only the thresholds. The total content size is unaffected.
    pub fn set_buffer_config(&mut self, buffer: BufferConfig) {
        if self.buffer == buffer {
            return;
        }
        self.buffer = buffer;
        self.last_pass = None;
        self.update_rendered_range();
    }

    pub fn on_content_scrolled(&mut self) {
        self.update_rendered_range();
    }

    /// Also call this when item sizes changed behind the size function's back.
    pub fn on_data_length_changed(&mut self) {
        self.last_pass = None;
        self.update_total_content_size();
        self.update_rendered_range();
    }

    /// Part of the viewport protocol; sizes come from the size function, not from rendering.
    pub fn on_content_rendered(&mut self) {}

    /// Part of the viewport protocol; the strategy sets the offset itself.
    pub fn on_rendered_offset_changed(&mut self) {}

    /// Scrolls the viewport so that item `index` starts at the top.
    ///
    /// `index` past the end scrolls to the end of the content. `behavior` is passed through.
    pub fn scroll_to_index(&mut self, index: usize, behavior: ScrollBehavior) {
        let Phase::Attached(viewport) = &mut self.phase else {
            return;
        };
        let offset = self.oracle.cumulative_size(index);
        vtrace!(index, offset, ?behavior, "RangeStrategy::scroll_to_index");
        viewport.scroll_to_offset(offset, behavior);
    }

    fn update_total_content_size(&mut self) {
        let Phase::Attached(viewport) = &mut self.phase else {
            return;
        };
        viewport.set_total_content_size(self.oracle.total_size());
    }

    fn update_rendered_range(&mut self) {
        let Phase::Attached(viewport) = &mut self.phase else {
            return;
        };
        let scroll = ScrollState {
            scroll_offset: viewport.measure_scroll_offset(),
            viewport_size: viewport.viewport_size(),
            data_length: viewport.data_length(),
        };
        let current = viewport.rendered_range();
        if self.last_pass == Some((scroll, current)) {
            // Same window, but the size function may answer differently by now.
            let content_offset = self.oracle.cumulative_size(current.start);
            vtrace!(
                content_offset,
                "RangeStrategy::update_rendered_range: inputs unchanged"
            );
            viewport.set_rendered_content_offset(content_offset);
            return;
        }
        let RangeUpdate {
            range,
            content_offset,
            first_visible_index,
        } = compute_rendered_range(&self.oracle, self.buffer, scroll, current);
        vtrace!(
            scroll_offset = scroll.scroll_offset,
            viewport_size = scroll.viewport_size,
            data_length = scroll.data_length,
            start = range.start,
            end = range.end,
            content_offset,
            first_visible_index,
            "RangeStrategy::update_rendered_range"
        );
        viewport.set_rendered_range(range);
        viewport.set_rendered_content_offset(content_offset);
        self.last_pass = Some((scroll, range));
        self.stream.publish(first_visible_index);
    }
}

impl<T, V: fmt::Debug> fmt::Debug for RangeStrategy<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase: &dyn fmt::Debug = match &self.phase {
            Phase::Detached => &"Detached",
            Phase::Attached(viewport) => viewport,
            Phase::Closed => &"Closed",
        };
        f.debug_struct("RangeStrategy")
            .field("oracle", &self.oracle)
            .field("buffer", &self.buffer)
            .field("phase", phase)
            .field("stream", &self.stream)
            .field("last_pass", &self.last_pass)
            .finish()
    }
}
