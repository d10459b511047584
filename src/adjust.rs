// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Reference adjustment of raw tracker orientations.
//!
//! A raw IMU reading is expressed in the sensor's own frame. Displaying it
//! requires compensating for how the sensor is mounted and for the bias
//! captured during calibration: the mounting orientation plus the gyro-fix,
//! attachment-fix and yaw-fix quaternions.
//!
//! Adjustment is all-or-nothing: a tracker missing any one offset is shown
//! raw, never partially adjusted.

use crate::data_types::{CalibrationOffsets, Quat, TrackerSnapshot};

/// Combine a mounted rotation with the three reference fixes.
///
/// Stage order is fixed: the gyro-fix pre-multiplies, the attachment-fix
/// post-multiplies, and the yaw-fix pre-multiplies the result.
pub fn make_reference_adjusted_rotation(
    rotation: Quat,
    gyro_fix: Quat,
    attachment_fix: Quat,
    yaw_fix: Quat,
) -> Quat {
    yaw_fix * (gyro_fix * rotation * attachment_fix)
}

/// Produce the display-ready orientation for a raw reading.
///
/// An absent reading is treated as identity. A tracker without a complete
/// offset set gets its raw reading back unadjusted.
///
/// With `without_mounting_position`, the mounting orientation is divided
/// back out of the gyro and attachment fixes, yielding the orientation the
/// 3D preview wants (sensor pose irrespective of where it sits on the body).
pub fn adjust(
    raw: Option<Quat>,
    offsets: Option<&CalibrationOffsets>,
    without_mounting_position: bool,
) -> Quat {
    let raw = match raw {
        Some(q) => q,
        None => return Quat::identity(),
    };
    let offsets = match offsets {
        Some(o) => o,
        None => return raw,
    };

    let mounting = offsets.mounting_orientation;
    let rotated = raw * mounting;

    if without_mounting_position {
        let mounting_inv = mounting.inverse();
        make_reference_adjusted_rotation(
            rotated,
            (offsets.gyro_fix.inverse() * mounting_inv).inverse(),
            offsets.attachment_fix * mounting_inv,
            offsets.yaw_fix,
        )
    } else {
        make_reference_adjusted_rotation(
            rotated,
            offsets.gyro_fix,
            offsets.attachment_fix,
            offsets.yaw_fix,
        )
    }
}

/// Reference-adjusted orientation for a snapshot.
///
/// Missing rotation or an incomplete offset set falls back per [`adjust`].
pub fn adjusted_rotation(snapshot: &TrackerSnapshot, without_mounting_position: bool) -> Quat {
    adjust(
        snapshot.rotation,
        snapshot.info.as_ref().and_then(|i| i.offsets()).as_ref(),
        without_mounting_position,
    )
}
