use core::cmp;

use crate::{BufferConfig, RenderedRange, SizingOracle};

/// A snapshot of the scroll state owned by a [`crate::Viewport`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub scroll_offset: f64,
    pub viewport_size: f64,
    pub data_length: usize,
}

/// The outcome of one range recomputation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeUpdate {
    pub range: RenderedRange,
    /// Pixel offset of `range.start` from the start of the content.
    pub content_offset: f64,
    pub first_visible_index: usize,
}

/// Computes the next rendered range from the current one.
///
/// The range only ever grows on one side per call:
///
/// - If fewer than `min_buffer_px` pixels are rendered above the scroll offset (and the range
///   does not already start at `0`), `start` moves back by enough items to cover
///   `max_buffer_px` of slack and `end` is recomputed as one viewport plus `min_buffer_px`
///   past the first visible item.
/// - Otherwise, if fewer than `min_buffer_px` pixels are rendered below the viewport (and the
///   range does not already reach `data_length`), `end` moves forward by enough items to cover
///   `max_buffer_px` of slack and `start` is pulled up to `min_buffer_px` before the first
///   visible item.
///
/// When both buffers already hold at least `min_buffer_px`, `current` is returned unchanged.
///
/// Pixel distances are converted to item counts with
/// [`SizingOracle::first_index_at_or_beyond`], i.e. by walking from the first item.
///
/// `current` is clamped to `scroll.data_length` before use, and the result always satisfies
/// `start <= end <= data_length`. When `first_visible_index < data_length` the result also
/// covers every item that intersects `[scroll_offset, scroll_offset + viewport_size)` (at least
/// the first visible one), even if neither expansion reached them.
pub fn compute_rendered_range<T>(
    oracle: &SizingOracle<T>,
    buffer: BufferConfig,
    scroll: ScrollState,
    current: RenderedRange,
) -> RangeUpdate {
    let ScrollState {
        scroll_offset,
        viewport_size,
        data_length,
    } = scroll;
    let min_buffer = buffer.min_buffer_px();
    let max_buffer = buffer.max_buffer_px();

    let mut range = current.clamped(data_length);
    let first_visible_index = oracle.first_index_at_or_beyond(scroll_offset);

    let start_buffer = scroll_offset - oracle.cumulative_size(range.start);
    if start_buffer < min_buffer && range.start != 0 {
        let expand_start = oracle.first_index_at_or_beyond(max_buffer - start_buffer);
        let visible_with_buffer = oracle.first_index_at_or_beyond(viewport_size + min_buffer);
        range.start = range.start.saturating_sub(expand_start);
        range.end = cmp::min(
            data_length,
            first_visible_index.saturating_add(visible_with_buffer),
        );
        vtrace!(
            start_buffer,
            expand_start,
            start = range.start,
            end = range.end,
            "expand start"
        );
    } else {
        let end_buffer = oracle.cumulative_size(range.end) - (scroll_offset + viewport_size);
        if end_buffer < min_buffer && range.end != data_length {
            let expand_end = oracle.first_index_at_or_beyond(max_buffer - end_buffer);
            if expand_end > 0 {
                range.end = cmp::min(data_length, range.end.saturating_add(expand_end));
                range.start =
                    first_visible_index.saturating_sub(oracle.first_index_at_or_beyond(min_buffer));
                vtrace!(
                    end_buffer,
                    expand_end,
                    start = range.start,
                    end = range.end,
                    "expand end"
                );
            }
        }
    }

    // Both expansions measure pixels from item 0, so with uneven sizes they can miss the
    // visible items entirely. The committed range always covers the viewport.
    if first_visible_index < data_length {
        let bottom = scroll_offset + viewport_size;
        let mut visible_end = oracle.first_index_at_or_beyond(bottom);
        if oracle.cumulative_size(visible_end) < bottom {
            visible_end += 1;
        }
        let visible_end = visible_end
            .max(first_visible_index.saturating_add(1))
            .min(data_length);
        range.start = range.start.min(first_visible_index);
        range.end = range.end.max(visible_end);
    }
    range.start = range.start.min(range.end);

    RangeUpdate {
        range,
        content_offset: oracle.cumulative_size(range.start),
        first_visible_index,
    }
}
