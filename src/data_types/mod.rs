// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Data types

pub mod id_types;
pub mod math;
pub mod time;
pub mod tracker;

#[doc(inline)]
pub use crate::data_types::{
    id_types::{DeviceId, TrackerKey, TrackerNum},
    math::{EulerDegrees, Quat, Vec3},
    time::Timestamp,
    tracker::{
        BodyPart, CalibrationOffsets, DeviceSnapshot, TrackerEntry, TrackerInfo, TrackerSnapshot,
        TrackerStatus,
    },
};
