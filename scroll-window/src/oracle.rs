use alloc::sync::Arc;
use core::fmt;

use crate::SizeFn;

/// Answers size queries over an ordered item collection.
///
/// The oracle is a pairing of an item slice and a [`SizeFn`]. It keeps no cached sums: every
/// query walks the collection and calls the size function again, so results always reflect the
/// current output of the size function. Each query is O(n).
///
/// An oracle is never patched in place. Replacing either the items or the size function builds
/// a new oracle (see [`crate::RangeStrategy::update_item_and_buffer_size`]).
pub struct SizingOracle<T> {
    items: Arc<[T]>,
    size_fn: SizeFn<T>,
}

impl<T> SizingOracle<T> {
    pub fn new(size_fn: SizeFn<T>, items: Arc<[T]>) -> Self {
        Self { items, size_fn }
    }

    pub fn from_fn(
        size_fn: impl Fn(&T) -> f64 + Send + Sync + 'static,
        items: impl Into<Arc<[T]>>,
    ) -> Self {
        Self::new(Arc::new(size_fn), items.into())
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn size_fn(&self) -> &SizeFn<T> {
        &self.size_fn
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_size(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(|item| self.size_of(item))
    }

    /// Sum of the sizes of every item.
    pub fn total_size(&self) -> f64 {
        self.items.iter().map(|item| self.size_of(item)).sum()
    }

    /// Sum of the sizes of the first `count` items (the pixel offset at which item `count`
    /// starts).
    ///
    /// `count` values past the end are clamped to [`Self::len`].
    pub fn cumulative_size(&self, count: usize) -> f64 {
        let count = count.min(self.items.len());
        self.items[..count]
            .iter()
            .map(|item| self.size_of(item))
            .sum()
    }

    /// Number of leading items whose running size total stays `<= offset_px`.
    ///
    /// Equivalently, the index of the item that contains `offset_px`: items are accumulated while
    /// the running total is `<= offset_px` and the walk stops at the first item that pushes it
    /// past. An offset that lands exactly on an item boundary therefore maps to the item that
    /// starts there. Offsets `<= 0` yield `0` (even ahead of zero-size items), offsets at or past
    /// the total size return `len()`, and an empty collection always yields `0`.
    ///
    /// Because the walk always starts at item `0`, this is also used to turn a pixel distance
    /// into an item count ("how many items does it take to cover `offset_px`").
    pub fn first_index_at_or_beyond(&self, offset_px: f64) -> usize {
        if offset_px <= 0.0 {
            return 0;
        }
        let mut acc = 0.0;
        let mut consumed = 0usize;
        for item in self.items.iter() {
            acc += self.size_of(item);
            if acc > offset_px {
                break;
            }
            consumed += 1;
        }
        consumed
    }

    fn size_of(&self, item: &T) -> f64 {
        let size = (self.size_fn)(item);
        if !(size >= 0.0) {
            vwarn!(size, "SizingOracle: size function returned a negative or NaN size");
            return 0.0;
        }
        size
    }
}

impl<T> Clone for SizingOracle<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            size_fn: Arc::clone(&self.size_fn),
        }
    }
}

impl<T> fmt::Debug for SizingOracle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizingOracle")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
