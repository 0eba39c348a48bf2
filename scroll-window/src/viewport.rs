use crate::{RenderedRange, ScrollBehavior};

/// The scrollable region a [`crate::RangeStrategy`] drives.
///
/// Implemented by the host's rendering layer. The strategy reads scroll state through the
/// `measure`/getter methods and pushes its results back through the setters; it never touches
/// layout itself. All quantities are pixels along the scroll axis.
///
/// Setters are plain commands. An implementation that reacts to them (for example by emitting
/// a scroll event) must not call back into the strategy synchronously; queue the event and
/// deliver it after the current strategy call returns.
pub trait Viewport {
    /// Current scroll offset from the start of the content.
    fn measure_scroll_offset(&self) -> f64;

    /// Visible extent of the viewport.
    fn viewport_size(&self) -> f64;

    /// Number of items the host is rendering from.
    fn data_length(&self) -> usize;

    fn rendered_range(&self) -> RenderedRange;

    fn set_rendered_range(&mut self, range: RenderedRange);

    /// Offset at which the first rendered item should be placed.
    fn set_rendered_content_offset(&mut self, offset: f64);

    /// Full scrollable extent of the content (used to size the scroll spacer).
    fn set_total_content_size(&mut self, size: f64);

    fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn measure_scroll_offset(&self) -> f64 {
        (**self).measure_scroll_offset()
    }

    fn viewport_size(&self) -> f64 {
        (**self).viewport_size()
    }

    fn data_length(&self) -> usize {
        (**self).data_length()
    }

    fn rendered_range(&self) -> RenderedRange {
        (**self).rendered_range()
    }

    fn set_rendered_range(&mut self, range: RenderedRange) {
        (**self).set_rendered_range(range);
    }

    fn set_rendered_content_offset(&mut self, offset: f64) {
        (**self).set_rendered_content_offset(offset);
    }

    fn set_total_content_size(&mut self, size: f64) {
        (**self).set_total_content_size(size);
    }

    fn scroll_to_offset(&mut self, offset: f64, behavior: ScrollBehavior) {
        (**self).scroll_to_offset(offset, behavior);
    }
}
