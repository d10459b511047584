// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! The display core of a motion-tracker monitoring UI.
//!
//! The GUI layer stays thin: it decodes snapshot frames off the data feed,
//! drives one [`bindings::DisplayBindings`] per view, and renders the
//! strings and numbers this crate hands back. The algorithms living here
//! are the reference adjustment of raw orientations ([`adjust`]), the
//! motion-intensity estimate behind the row glow ([`velocity`]), and the
//! tracker classification filters ([`classify`]).

pub mod adjust;
pub mod bindings;
pub mod classify;
pub mod config;
pub mod data_types;
pub mod display;
pub mod error;
pub mod handler;
pub mod velocity;
pub mod wire;

pub use crate::{
    adjust::{adjust, adjusted_rotation, make_reference_adjusted_rotation},
    bindings::{DisplayBindings, TrackerMotion},
    config::{Config, DevSettings},
    data_types::{
        BodyPart, CalibrationOffsets, DeviceId, DeviceSnapshot, EulerDegrees, Quat, Timestamp,
        TrackerEntry, TrackerInfo, TrackerKey, TrackerNum, TrackerSnapshot, TrackerStatus, Vec3,
    },
    display::TrackerRow,
    error::{EmptyResult, Error, Result},
    handler::{HandlerCode, SnapshotDispatcher, SnapshotHandler},
    velocity::VelocityEstimator,
    wire::{Decode, Encode},
};
