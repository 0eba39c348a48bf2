use alloc::sync::Arc;

use crate::ConfigError;

/// Maps an item to its size in pixels along the scroll axis.
///
/// The strategy calls this many times per recomputation and never caches the result, so hosts
/// with expensive measurements should memoize inside the closure. Negative and NaN results are
/// treated as `0.0`.
pub type SizeFn<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;

/// Pixel thresholds that govern how much content is rendered outside the viewport.
///
/// - `min_buffer_px`: the strategy expands the rendered range whenever less than this many
///   pixels are rendered before or after the visible area.
/// - `max_buffer_px`: how far each expansion reaches.
///
/// The invariant `max_buffer_px >= min_buffer_px >= 0` is enforced by every constructor, so a
/// `BufferConfig` value is always valid.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; deserialization
/// re-validates the thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BufferConfigRepr")
)]
pub struct BufferConfig {
    min_buffer_px: f64,
    max_buffer_px: f64,
}

impl BufferConfig {
    pub fn new(min_buffer_px: f64, max_buffer_px: f64) -> Result<Self, ConfigError> {
        if !(min_buffer_px.is_finite() && min_buffer_px >= 0.0) {
            return Err(ConfigError::InvalidMin { min_buffer_px });
        }
        if !max_buffer_px.is_finite() {
            return Err(ConfigError::InvalidMax { max_buffer_px });
        }
        if max_buffer_px < min_buffer_px {
            return Err(ConfigError::MaxBelowMin {
                min_buffer_px,
                max_buffer_px,
            });
        }
        Ok(Self {
            min_buffer_px,
            max_buffer_px,
        })
    }

    pub fn min_buffer_px(&self) -> f64 {
        self.min_buffer_px
    }

    pub fn max_buffer_px(&self) -> f64 {
        self.max_buffer_px
    }

    /// Returns a copy with a new minimum, re-checking the invariant.
    pub fn with_min_buffer_px(self, min_buffer_px: f64) -> Result<Self, ConfigError> {
        Self::new(min_buffer_px, self.max_buffer_px)
    }

    /// Returns a copy with a new maximum, re-checking the invariant.
    pub fn with_max_buffer_px(self, max_buffer_px: f64) -> Result<Self, ConfigError> {
        Self::new(self.min_buffer_px, max_buffer_px)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            min_buffer_px: 100.0,
            max_buffer_px: 200.0,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BufferConfigRepr {
    min_buffer_px: f64,
    max_buffer_px: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<BufferConfigRepr> for BufferConfig {
    type Error = ConfigError;

    fn try_from(repr: BufferConfigRepr) -> Result<Self, Self::Error> {
        Self::new(repr.min_buffer_px, repr.max_buffer_px)
    }
}
