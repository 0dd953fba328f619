//! Winner resolution
//!
//! Maps an accumulated wheel rotation onto the segment sitting under the
//! fixed pointer. Pure and deterministic: the only randomness is upstream,
//! in the rotation itself.

use super::segment::SegmentArc;
use crate::error::WheelError;
use crate::normalize_degrees;

/// Find the index of the segment under `pointer_angle` after the wheel
/// turned clockwise by `total_rotation` degrees.
///
/// Segments are half-open, so a pointer exactly on a boundary picks the
/// segment that starts there. If rounding leaves the pointer outside every
/// segment, index 0 is returned.
pub fn resolve_winner(
    total_rotation: f64,
    segment_count: usize,
    pointer_angle: f64,
) -> Result<usize, WheelError> {
    if segment_count == 0 {
        return Err(WheelError::NoSegments);
    }
    if !total_rotation.is_finite() {
        return Err(WheelError::NonFiniteRotation(total_rotation));
    }

    let rotation = normalize_degrees(total_rotation);
    let pointer = normalize_degrees(pointer_angle);

    let hit = (0..segment_count)
        .find(|&index| SegmentArc::rotated(index, segment_count, rotation).contains_angle(pointer));

    match hit {
        Some(index) => {
            log::debug!(
                "Pointer {:.3}° hit segment {}/{} at rotation {:.3}°",
                pointer,
                index,
                segment_count,
                rotation
            );
            Ok(index)
        }
        None => {
            log::debug!(
                "Pointer {:.3}° fell between segments at rotation {:.3}°, using 0",
                pointer,
                rotation
            );
            Ok(0)
        }
    }
}
