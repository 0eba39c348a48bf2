use scroll_window::{RenderedRange, ScrollBehavior, Viewport};

/// An in-memory [`Viewport`] for hosts that keep scroll state themselves (and for tests).
///
/// It stores everything the strategy commits and clamps the scroll offset to the scrollable
/// extent. Scroll commands are not applied immediately: [`Viewport::scroll_to_offset`] only
/// records a request, which the host takes with [`Self::take_scroll_request`] once the strategy
/// call has returned. This mirrors a real scroll container, where the resulting scroll event
/// arrives later.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimViewport {
    scroll_offset: f64,
    viewport_size: f64,
    data_length: usize,
    rendered_range: RenderedRange,
    content_offset: f64,
    total_content_size: f64,
    scroll_request: Option<(f64, ScrollBehavior)>,
}

impl SimViewport {
    pub fn new(viewport_size: f64, data_length: usize) -> Self {
        Self {
            viewport_size: viewport_size.max(0.0),
            data_length,
            ..Self::default()
        }
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn size(&self) -> f64 {
        self.viewport_size
    }

    pub fn len(&self) -> usize {
        self.data_length
    }

    pub fn is_empty(&self) -> bool {
        self.data_length == 0
    }

    pub fn range(&self) -> RenderedRange {
        self.rendered_range
    }

    pub fn content_offset(&self) -> f64 {
        self.content_offset
    }

    pub fn total_content_size(&self) -> f64 {
        self.total_content_size
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.total_content_size - self.viewport_size).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Moves the scroll position (clamped). Returns `true` when it actually moved.
    pub fn set_scroll_offset(&mut self, offset: f64) -> bool {
        let offset = self.clamp_scroll_offset(offset);
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        true
    }

    /// Returns `true` when the size changed.
    pub fn set_size(&mut self, viewport_size: f64) -> bool {
        let viewport_size = viewport_size.max(0.0);
        if viewport_size == self.viewport_size {
            return false;
        }
        self.viewport_size = viewport_size;
        true
    }

    pub fn set_len(&mut self, data_length: usize) {
        self.data_length = data_length;
    }

    /// Takes the pending `scroll_to_offset` request, if any.
    pub fn take_scroll_request(&mut self) -> Option<(f64, ScrollBehavior)> {
        self.scroll_request.take()
    }
}

impl Viewport for SimViewport {
    fn measure_scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    fn data_length(&self) -> usize {
        self.data_length
    }

    fn rendered_range(&self) -> RenderedRange {
        self.rendered_range
    }

    fn set_rendered_range(&mut self, range: RenderedRange) {
        self.rendered_range = range;
    }

    fn set_rendered_content_offset(&mut self, offset: f64) {
        self.content_offset = offset;
    }

    fn set_total_content_size(&mut self, size: f64) {
        self.total_content_size = size;
    }

    fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) {
        // A newer request replaces an unconsumed one.
        self.scroll_request = Some((offset, behavior));
    }
}
