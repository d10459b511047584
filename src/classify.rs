// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Pure, stateless filters over tracker collections.
//!
//! All filters preserve input order. `assigned` and `unassigned` partition
//! any collection exactly.

use crate::data_types::{TrackerEntry, TrackerStatus};

/// Trackers with a body-part designation.
pub fn assigned(entries: &[TrackerEntry]) -> impl Iterator<Item = &TrackerEntry> + '_ {
    entries.iter().filter(|e| e.tracker.is_assigned())
}

/// Trackers without a body-part designation.
pub fn unassigned(entries: &[TrackerEntry]) -> impl Iterator<Item = &TrackerEntry> + '_ {
    entries.iter().filter(|e| !e.tracker.is_assigned())
}

/// Trackers whose status is anything but disconnected.
pub fn connected(entries: &[TrackerEntry]) -> impl Iterator<Item = &TrackerEntry> + '_ {
    entries
        .iter()
        .filter(|e| e.tracker.status != TrackerStatus::Disconnected)
}

/// Developer filter: keep first-party trackers and the headset.
///
/// An entry survives when its device is named "HMD" or its manufacturer is
/// "SlimeVR".
pub fn filter_slimes_and_hmd(entries: &[TrackerEntry]) -> impl Iterator<Item = &TrackerEntry> + '_ {
    entries
        .iter()
        .filter(|e| e.device_name() == "HMD" || e.is_slime())
}

/// Developer sort: stable, by tracker custom name (unnamed trackers sort
/// together at the front).
pub fn sort_by_name(entries: &mut [TrackerEntry]) {
    entries.sort_by(|a, b| a.tracker_custom_name().cmp(b.tracker_custom_name()));
}
