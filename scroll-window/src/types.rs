/// A half-open `[start, end)` interval of item indexes that are currently materialized.
///
/// Ranges produced by [`crate::RangeStrategy`] always satisfy `start <= end <= data_length`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl RenderedRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Clamps both ends to `len` and makes sure `start <= end`.
    pub fn clamped(self, len: usize) -> Self {
        let end = self.end.min(len);
        Self {
            start: self.start.min(end),
            end,
        }
    }
}

impl From<core::ops::Range<usize>> for RenderedRange {
    fn from(r: core::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<RenderedRange> for core::ops::Range<usize> {
    fn from(r: RenderedRange) -> Self {
        r.start..r.end
    }
}

/// How a viewport should move when asked to scroll to an offset.
///
/// The strategy never interprets this value; it is handed to [`crate::Viewport::scroll_to_offset`]
/// unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Let the host pick (usually whatever the scroll container is configured with).
    #[default]
    Auto,
    Instant,
    Smooth,
}
