use thiserror::Error;

/// Rejected buffer thresholds.
///
/// Returned by [`crate::BufferConfig::new`] and by every strategy operation that replaces the
/// thresholds. The strategy keeps its previous configuration when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_buffer_px ({max_buffer_px}) must be greater than or equal to min_buffer_px ({min_buffer_px})")]
    MaxBelowMin {
        min_buffer_px: f64,
        max_buffer_px: f64,
    },
    #[error("min_buffer_px must be a finite, non-negative number (got {min_buffer_px})")]
    InvalidMin { min_buffer_px: f64 },
    #[error("max_buffer_px must be a finite number (got {max_buffer_px})")]
    InvalidMax { max_buffer_px: f64 },
}
