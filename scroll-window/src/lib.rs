//! Buffered rendered-range computation for virtual scrolling over variable-size items.
//!
//! For the scroll-driving helpers a host typically wants (an in-memory viewport, smooth
//! scrolling, scroll anchoring), see the `scroll-window-adapter` crate.
//!
//! Given a size function, an ordered item collection, the current scroll offset and viewport
//! size, and a pair of pixel buffer thresholds, this crate decides which contiguous slice of
//! items must be materialized, where that slice starts in pixels, and how tall the whole
//! content is. Only a small buffer around the visible area is ever rendered, however long the
//! list is.
//!
//! It is UI-agnostic. The rendering layer implements [`Viewport`] and forwards its events to a
//! [`RangeStrategy`]:
//! - attach the viewport once,
//! - call [`RangeStrategy::on_content_scrolled`] on scroll,
//! - call [`RangeStrategy::on_data_length_changed`] when items are added or removed.
//!
//! The strategy answers by committing a [`RenderedRange`], a content offset, and the total
//! content size to the viewport, and by publishing the first visible index to subscribers.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod error;
mod oracle;
mod range;
mod strategy;
mod stream;
mod types;
mod viewport;

#[cfg(test)]
mod tests;

pub use config::{BufferConfig, SizeFn};
pub use error::ConfigError;
pub use oracle::SizingOracle;
pub use range::{RangeUpdate, ScrollState, compute_rendered_range};
pub use strategy::RangeStrategy;
pub use stream::SubscriptionId;
pub use types::{RenderedRange, ScrollBehavior};
pub use viewport::Viewport;
