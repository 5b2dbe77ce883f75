//! Grid configuration: cell size and overflow margin

use crate::error::{GridError, Result};

/// Default cell edge length in world units
pub const DEFAULT_CELL_SIZE: f64 = 32.0;
/// Default margin, in cells, added around every footprint
pub const DEFAULT_OVERFLOW: u32 = 0;

/// Construction-time settings for a [`GridIndex`](crate::GridIndex)
///
/// Choose `cell_size` so a typical object spans one to four cells. Smaller
/// cells put each object in more buckets; larger cells crowd unrelated
/// objects into the same bucket and widen query fan-out.
///
/// `overflow` grows each covering set by that many rows and columns on
/// every side, so objects in neighboring but non-overlapping cells still
/// show up as candidates.
///
/// # Example
/// ```
/// use gridindex::GridConfig;
///
/// let config = GridConfig::new(64.0, 1).unwrap();
/// assert_eq!(config.cell_size, 64.0);
/// assert!(GridConfig::new(0.0, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Cell edge length in world units, finite and > 0
    pub cell_size: f64,
    /// Extra cells of margin in each direction
    pub overflow: u32,
}

impl GridConfig {
    /// Creates a validated configuration
    ///
    /// # Errors
    /// [`GridError::InvalidConfiguration`] if `cell_size` is NaN, infinite,
    /// zero, negative, or so small that `1 / cell_size` overflows.
    pub fn new(cell_size: f64, overflow: u32) -> Result<Self> {
        let config = Self { cell_size, overflow };
        config.validate()?;
        Ok(config)
    }

    /// Copy of this configuration with a different overflow
    #[must_use]
    pub const fn with_overflow(self, overflow: u32) -> Self {
        Self { overflow, ..self }
    }

    /// Re-checks a configuration built field by field
    ///
    /// # Errors
    /// Same as [`GridConfig::new`].
    pub fn validate(&self) -> Result<()> {
        check_cell_size(self.cell_size).map(|_| ())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            overflow: DEFAULT_OVERFLOW,
        }
    }
}

/// Validates a cell size and returns it unchanged
pub(crate) fn check_cell_size(cell_size: f64) -> Result<f64> {
    if cell_size.is_nan() {
        return Err(GridError::InvalidConfiguration {
            parameter: "cell_size",
            value: cell_size,
            reason: "must be a number",
        });
    }
    if !cell_size.is_finite() {
        return Err(GridError::InvalidConfiguration {
            parameter: "cell_size",
            value: cell_size,
            reason: "must be finite",
        });
    }
    if cell_size <= 0.0 {
        return Err(GridError::InvalidConfiguration {
            parameter: "cell_size",
            value: cell_size,
            reason: "must be greater than zero",
        });
    }
    if !(1.0 / cell_size).is_finite() {
        return Err(GridError::InvalidConfiguration {
            parameter: "cell_size",
            value: cell_size,
            reason: "too small, its reciprocal overflows",
        });
    }
    Ok(cell_size)
}
