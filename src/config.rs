//! Layout configuration.
//!
//! All values are caller-supplied constants. Nothing is persisted by the
//! engine; a host application typically deserializes a `LayoutConfig`
//! once (serde, any format) and validates it at load time.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`LayoutConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A pixel dimension is negative, zero where it must be positive, or not finite.
    #[error("{field} must be a finite value {requirement}, got {value}")]
    InvalidDimension {
        /// Offending field name.
        field: &'static str,
        /// Human-readable constraint (e.g. "> 0").
        requirement: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// Tick interval of zero.
    #[error("tick interval must be at least one second")]
    ZeroTickInterval,
    /// An hour range is empty, inverted, or outside 0..=24.
    #[error("invalid {name} hour range [{start}, {end})")]
    InvalidHourRange {
        /// Which range ("clamp" or "fallback").
        name: &'static str,
        /// Range start.
        start: i32,
        /// Range end.
        end: i32,
    },
}

/// Hour-range settings for [`GridBounds`](crate::bounds::GridBounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Earliest hour the grid may ever show.
    pub clamp_start_hour: i32,
    /// Latest hour the grid may ever show (exclusive).
    pub clamp_end_hour: i32,
    /// Window always shown when sessions exist, and used alone when none do.
    pub fallback_start_hour: i32,
    /// Exclusive end of the fallback window.
    pub fallback_end_hour: i32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            clamp_start_hour: 5,
            clamp_end_hour: 23,
            fallback_start_hour: 8,
            fallback_end_hour: 20,
        }
    }
}

/// Layout engine configuration.
///
/// # Example
/// ```
/// use u_timetable::config::LayoutConfig;
///
/// let config = LayoutConfig::new()
///     .with_hour_row_height(48.0)
///     .with_column_gap(2.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of one hour row (px).
    pub hour_row_height_px: f64,
    /// Floor applied to every block height (px).
    pub minimum_block_height_px: f64,
    /// Horizontal gap between adjacent columns (px).
    pub column_gap_px: f64,
    /// Horizontal padding from the day column edges (px).
    pub container_padding_px: f64,
    /// Live-time tracker period (seconds).
    pub tick_interval_secs: u64,
    /// Grid hour range settings.
    pub bounds: BoundsConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hour_row_height_px: 60.0,
            minimum_block_height_px: 20.0,
            column_gap_px: 4.0,
            container_padding_px: 4.0,
            tick_interval_secs: 60,
            bounds: BoundsConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hour row height.
    pub fn with_hour_row_height(mut self, px: f64) -> Self {
        self.hour_row_height_px = px;
        self
    }

    /// Sets the minimum block height.
    pub fn with_minimum_block_height(mut self, px: f64) -> Self {
        self.minimum_block_height_px = px;
        self
    }

    /// Sets the gap between columns.
    pub fn with_column_gap(mut self, px: f64) -> Self {
        self.column_gap_px = px;
        self
    }

    /// Sets the container padding.
    pub fn with_container_padding(mut self, px: f64) -> Self {
        self.container_padding_px = px;
        self
    }

    /// Sets the tracker tick interval.
    pub fn with_tick_interval_secs(mut self, secs: u64) -> Self {
        self.tick_interval_secs = secs;
        self
    }

    /// Sets the grid bounds settings.
    pub fn with_bounds(mut self, bounds: BoundsConfig) -> Self {
        self.bounds = bounds;
        self
    }

    /// Tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("hour_row_height_px", self.hour_row_height_px, true)?;
        check_dimension("minimum_block_height_px", self.minimum_block_height_px, false)?;
        // Columns must never touch.
        check_dimension("column_gap_px", self.column_gap_px, true)?;
        check_dimension("container_padding_px", self.container_padding_px, false)?;

        if self.tick_interval_secs == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        let b = &self.bounds;
        check_range("clamp", b.clamp_start_hour, b.clamp_end_hour)?;
        check_range("fallback", b.fallback_start_hour, b.fallback_end_hour)?;
        Ok(())
    }
}

fn check_dimension(field: &'static str, value: f64, positive: bool) -> Result<(), ConfigError> {
    let ok = value.is_finite() && if positive { value > 0.0 } else { value >= 0.0 };
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension {
            field,
            requirement: if positive { "> 0" } else { ">= 0" },
            value,
        })
    }
}

fn check_range(name: &'static str, start: i32, end: i32) -> Result<(), ConfigError> {
    if (0..=24).contains(&start) && (0..=24).contains(&end) && start < end {
        Ok(())
    } else {
        Err(ConfigError::InvalidHourRange { name, start, end })
    }
}
