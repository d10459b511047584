// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Per-tracker and per-device records delivered by the data feed.
//!
//! A `TrackerSnapshot` is one frame's worth of state for one physical
//! sensor. Snapshots are immutable: each update tick delivers a fresh one
//! that replaces the previous.

use crate::data_types::{
    id_types::{DeviceId, TrackerKey},
    math::{Quat, Vec3},
    time::Timestamp,
};
use crate::{Error, Result};
use std::net::Ipv4Addr;

/// Body-part designation a tracker can be assigned to.
///
/// `None` means unassigned.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BodyPart {
    None,
    Head,
    Neck,
    Chest,
    Waist,
    Hip,
    LeftUpperArm,
    RightUpperArm,
    LeftLowerArm,
    RightLowerArm,
    LeftHand,
    RightHand,
    LeftUpperLeg,
    RightUpperLeg,
    LeftLowerLeg,
    RightLowerLeg,
    LeftFoot,
    RightFoot,
}

impl BodyPart {
    /// Human-readable designation, as the table renders it.
    pub fn name(&self) -> &'static str {
        match self {
            BodyPart::None => "NONE",
            BodyPart::Head => "HEAD",
            BodyPart::Neck => "NECK",
            BodyPart::Chest => "CHEST",
            BodyPart::Waist => "WAIST",
            BodyPart::Hip => "HIP",
            BodyPart::LeftUpperArm => "LEFT UPPER ARM",
            BodyPart::RightUpperArm => "RIGHT UPPER ARM",
            BodyPart::LeftLowerArm => "LEFT LOWER ARM",
            BodyPart::RightLowerArm => "RIGHT LOWER ARM",
            BodyPart::LeftHand => "LEFT HAND",
            BodyPart::RightHand => "RIGHT HAND",
            BodyPart::LeftUpperLeg => "LEFT UPPER LEG",
            BodyPart::RightUpperLeg => "RIGHT UPPER LEG",
            BodyPart::LeftLowerLeg => "LEFT LOWER LEG",
            BodyPart::RightLowerLeg => "RIGHT LOWER LEG",
            BodyPart::LeftFoot => "LEFT FOOT",
            BodyPart::RightFoot => "RIGHT FOOT",
        }
    }

    pub(crate) fn to_wire(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_wire(v: u8) -> Result<BodyPart> {
        match v {
            0 => Ok(BodyPart::None),
            1 => Ok(BodyPart::Head),
            2 => Ok(BodyPart::Neck),
            3 => Ok(BodyPart::Chest),
            4 => Ok(BodyPart::Waist),
            5 => Ok(BodyPart::Hip),
            6 => Ok(BodyPart::LeftUpperArm),
            7 => Ok(BodyPart::RightUpperArm),
            8 => Ok(BodyPart::LeftLowerArm),
            9 => Ok(BodyPart::RightLowerArm),
            10 => Ok(BodyPart::LeftHand),
            11 => Ok(BodyPart::RightHand),
            12 => Ok(BodyPart::LeftUpperLeg),
            13 => Ok(BodyPart::RightUpperLeg),
            14 => Ok(BodyPart::LeftLowerLeg),
            15 => Ok(BodyPart::RightLowerLeg),
            16 => Ok(BodyPart::LeftFoot),
            17 => Ok(BodyPart::RightFoot),
            _ => Err(Error::UnrecognizedBodyPart(v)),
        }
    }
}

impl Default for BodyPart {
    fn default() -> Self {
        BodyPart::None
    }
}

/// Connection/tracking status reported for a tracker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TrackerStatus {
    Disconnected,
    Ok,
    Busy,
    Error,
    Occluded,
    TimedOut,
}

impl TrackerStatus {
    pub(crate) fn to_wire(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_wire(v: u8) -> Result<TrackerStatus> {
        match v {
            0 => Ok(TrackerStatus::Disconnected),
            1 => Ok(TrackerStatus::Ok),
            2 => Ok(TrackerStatus::Busy),
            3 => Ok(TrackerStatus::Error),
            4 => Ok(TrackerStatus::Occluded),
            5 => Ok(TrackerStatus::TimedOut),
            _ => Err(Error::UnrecognizedStatus(v)),
        }
    }
}

/// The four calibration offsets a fully calibrated tracker carries.
///
/// Set once during the (external) calibration workflow and read-only
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationOffsets {
    pub mounting_orientation: Quat,
    pub gyro_fix: Quat,
    pub attachment_fix: Quat,
    pub yaw_fix: Quat,
}

impl CalibrationOffsets {
    /// Assemble offsets only when every one of the four is present.
    ///
    /// Reference adjustment is all-or-nothing: a partially calibrated
    /// tracker is displayed unadjusted.
    pub fn gather(
        mounting_orientation: Option<Quat>,
        gyro_fix: Option<Quat>,
        attachment_fix: Option<Quat>,
        yaw_fix: Option<Quat>,
    ) -> Option<CalibrationOffsets> {
        Some(CalibrationOffsets {
            mounting_orientation: mounting_orientation?,
            gyro_fix: gyro_fix?,
            attachment_fix: attachment_fix?,
            yaw_fix: yaw_fix?,
        })
    }

    /// All-identity offsets: adjustment becomes a no-op.
    pub fn identity() -> CalibrationOffsets {
        CalibrationOffsets {
            mounting_orientation: Quat::identity(),
            gyro_fix: Quat::identity(),
            attachment_fix: Quat::identity(),
            yaw_fix: Quat::identity(),
        }
    }
}

/// Slow-changing tracker metadata: assignment, naming, calibration.
///
/// Travels out of band relative to the per-frame motion data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerInfo {
    pub body_part: BodyPart,
    pub custom_name: Option<String>,
    pub display_name: Option<String>,
    pub mounting_orientation: Option<Quat>,
    pub gyro_fix: Option<Quat>,
    pub attachment_fix: Option<Quat>,
    pub yaw_fix: Option<Quat>,
}

impl TrackerInfo {
    /// The full offset set, if this tracker is completely calibrated.
    pub fn offsets(&self) -> Option<CalibrationOffsets> {
        CalibrationOffsets::gather(
            self.mounting_orientation,
            self.gyro_fix,
            self.attachment_fix,
            self.yaw_fix,
        )
    }
}

/// One frame's worth of state for a single tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSnapshot {
    pub key: TrackerKey,
    pub status: TrackerStatus,
    pub timestamp: Timestamp,
    pub rotation: Option<Quat>,
    pub position: Option<Vec3>,
    pub linear_acceleration: Option<Vec3>,
    pub temperature: Option<f32>,
    pub info: Option<TrackerInfo>,
}

impl TrackerSnapshot {
    /// A snapshot carrying no motion data yet.
    pub fn new(key: TrackerKey, status: TrackerStatus, timestamp: Timestamp) -> TrackerSnapshot {
        TrackerSnapshot {
            key,
            status,
            timestamp,
            rotation: None,
            position: None,
            linear_acceleration: None,
            temperature: None,
            info: None,
        }
    }

    /// Whether this tracker has a body-part designation.
    pub fn is_assigned(&self) -> bool {
        self.info
            .as_ref()
            .map(|i| i.body_part != BodyPart::None)
            .unwrap_or(false)
    }

    /// The name the table shows for this tracker.
    ///
    /// Custom name wins, then the body-part designation, then the hardware
    /// display name, then a placeholder.
    pub fn display_name(&self) -> &str {
        if let Some(info) = &self.info {
            if let Some(custom) = &info.custom_name {
                return custom;
            }
            if info.body_part != BodyPart::None {
                return info.body_part.name();
            }
            if let Some(display) = &info.display_name {
                return display;
            }
        }
        "NONE"
    }
}

/// Per-device state shown alongside each of the device's trackers.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    pub id: DeviceId,
    pub custom_name: Option<String>,
    pub manufacturer: Option<String>,
    pub battery_pct_estimate: Option<f32>,
    pub battery_voltage: Option<f32>,
    pub rssi: Option<i16>,
    pub ping: Option<u32>,
    pub tps: Option<f32>,
    pub ip_address: Option<Ipv4Addr>,
}

impl DeviceSnapshot {
    pub fn new(id: DeviceId) -> DeviceSnapshot {
        DeviceSnapshot {
            id,
            custom_name: None,
            manufacturer: None,
            battery_pct_estimate: None,
            battery_voltage: None,
            rssi: None,
            ping: None,
            tps: None,
            ip_address: None,
        }
    }
}

/// A tracker snapshot paired with its owning device's state: the unit the
/// classification filters and the table operate on.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerEntry {
    pub device: Option<DeviceSnapshot>,
    pub tracker: TrackerSnapshot,
}

impl TrackerEntry {
    pub fn device_name(&self) -> &str {
        self.device
            .as_ref()
            .and_then(|d| d.custom_name.as_deref())
            .unwrap_or("")
    }

    pub fn tracker_custom_name(&self) -> &str {
        self.tracker
            .info
            .as_ref()
            .and_then(|i| i.custom_name.as_deref())
            .unwrap_or("")
    }

    pub fn is_slime(&self) -> bool {
        self.device
            .as_ref()
            .and_then(|d| d.manufacturer.as_deref())
            .map(|m| m == "SlimeVR")
            .unwrap_or(false)
    }
}
