use core::fmt;

use scroll_window::SizingOracle;

/// A scroll position expressed relative to an item identity instead of a pixel offset.
///
/// Typical use cases:
/// - chat/timeline "prepend" (load older messages above) without content jumping
/// - any wholesale item replacement where the viewport should stay on the same item
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// How far the scroll offset is past the anchor item's start.
    pub offset_in_item: f64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_item", &self.offset_in_item)
            .finish()
    }
}

/// Captures an anchor on the item under `scroll_offset`.
///
/// Returns `None` when the offset is past the last item (or there are no items).
pub fn capture_anchor<T, K>(
    oracle: &SizingOracle<T>,
    scroll_offset: f64,
    key_of: impl Fn(&T) -> K,
) -> Option<ScrollAnchor<K>> {
    let index = oracle.first_index_at_or_beyond(scroll_offset);
    let item = oracle.items().get(index)?;
    let offset_in_item = (scroll_offset - oracle.cumulative_size(index)).max(0.0);
    Some(ScrollAnchor {
        key: key_of(item),
        offset_in_item,
    })
}

/// Resolves an anchor against a (possibly different) item collection.
///
/// Returns the scroll offset that puts the anchored item back where it was, or `None` when no
/// item with the anchor's key exists anymore.
pub fn resolve_anchor<T, K: PartialEq>(
    oracle: &SizingOracle<T>,
    anchor: &ScrollAnchor<K>,
    key_of: impl Fn(&T) -> K,
) -> Option<f64> {
    let index = oracle
        .items()
        .iter()
        .position(|item| key_of(item) == anchor.key)?;
    Some(oracle.cumulative_size(index) + anchor.offset_in_item)
}
