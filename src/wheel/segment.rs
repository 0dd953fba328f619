//! Segment geometry
//!
//! Each name owns an equal slice of the wheel. In the wheel's own frame
//! (0° points right, angles grow clockwise) segment `i` of `n` covers:
//! - start: i * (360 / n) - 90
//! - end:   start + 360 / n
//!
//! so segment 0 begins under the pointer when the wheel is unrotated.

use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN, SEGMENT_ORIGIN};
use crate::normalize_degrees;

/// A half-open angular slice `[start, end)` in degrees, both ends in [0, 360)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentArc {
    pub start: f64,
    pub end: f64,
}

impl SegmentArc {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: normalize_degrees(start),
            end: normalize_degrees(end),
        }
    }

    /// Angular width of a single segment when the wheel holds `count` names
    #[inline]
    pub fn width(count: usize) -> f64 {
        FULL_TURN / count as f64
    }

    /// Segment `index` of `count` in the unrotated wheel frame
    pub fn in_wheel_frame(index: usize, count: usize) -> Self {
        Self::rotated(index, count, 0.0)
    }

    /// Segment `index` of `count` after the wheel turned by `rotation` degrees
    pub fn rotated(index: usize, count: usize, rotation: f64) -> Self {
        let width = Self::width(count);
        let start = normalize_degrees(index as f64 * width + SEGMENT_ORIGIN + rotation);
        Self {
            start,
            end: normalize_degrees(start + width),
        }
    }

    /// Angular span (handles the 0°/360° seam)
    pub fn span(&self) -> f64 {
        let mut span = self.end - self.start;
        if span <= 0.0 {
            span += FULL_TURN;
        }
        span
    }

    /// Mid-angle, where a renderer would place the label
    pub fn mid(&self) -> f64 {
        normalize_degrees(self.start + self.span() / 2.0)
    }

    /// Whether the slice crosses the 0°/360° seam
    #[inline]
    pub fn wraps(&self) -> bool {
        self.start >= self.end
    }

    /// Check if an angle lies in `[start, end)`
    ///
    /// A boundary angle belongs to the segment starting there, never to the
    /// one ending there, including at the seam.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let angle = normalize_degrees(angle);
        if !self.wraps() {
            angle >= self.start && angle < self.end
        } else {
            // e.g. start=315, end=45
            angle >= self.start || angle < self.end
        }
    }
}
