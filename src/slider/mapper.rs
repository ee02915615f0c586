//! Value <-> pixel mapping along the slider track
//!
//! Pixel positions are measured from the origin (left end) of the track, so
//! `0.0` is the range start and `track_width` is the range end.

use std::ops::RangeInclusive;

use crate::error::SliderError;

/// Maps values in a closed range onto a track of a given pixel width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    lo: f64,
    hi: f64,
    track_width: f64,
    unit_width: f64,
}

impl Mapper {
    /// Create a mapper, rejecting ranges with no width
    pub fn new(range: &RangeInclusive<f64>, track_width: f64) -> Result<Self, SliderError> {
        let (lo, hi) = (*range.start(), *range.end());
        if !lo.is_finite() || !hi.is_finite() || hi <= lo {
            return Err(SliderError::DegenerateRange { lo, hi });
        }

        let track_width = if track_width.is_finite() {
            track_width.max(0.0)
        } else {
            0.0
        };

        Ok(Self {
            lo,
            hi,
            track_width,
            unit_width: track_width / (hi - lo),
        })
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Pixels per unit of value
    pub fn unit_width(&self) -> f64 {
        self.unit_width
    }

    /// Clamp a value into the range
    pub fn clamp_value(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.lo;
        }
        value.clamp(self.lo, self.hi)
    }

    /// Pixel offset of `value` from the track origin
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        self.unit_width * (self.clamp_value(value) - self.lo)
    }

    /// Value at pixel offset `pixel`, clamped to the track
    ///
    /// Both ends of the track map exactly onto the range bounds.
    pub fn pixel_to_value(&self, pixel: f64) -> f64 {
        if pixel.is_nan() || pixel <= 0.0 || self.unit_width <= 0.0 {
            return self.lo;
        }
        if pixel >= self.track_width {
            return self.hi;
        }
        self.clamp_value(pixel / self.unit_width + self.lo)
    }
}

/// Width of the track after fitting the thumb inside the viewport
///
/// An explicit width never exceeds `viewport_width - thumb_size`.
pub fn effective_track_width(viewport_width: f32, thumb_size: f32, width_override: Option<f32>) -> f32 {
    let cap = viewport_width - thumb_size;
    let width = match width_override {
        Some(width) => cap.min(width),
        None => cap,
    };
    width.max(0.0)
}

/// Height of the track bar; a bar is never taller than the thumb
pub fn bar_height(configured: f32, thumb_size: f32) -> f32 {
    configured.min(thumb_size).max(0.0)
}
