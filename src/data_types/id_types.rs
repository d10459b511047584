// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Basic ID types used across the tracker display core.

/// Type wrapped by the various Id types - chosen to match the wire protocol.
pub type IdType = i32;

/// Trait for types that wrap an integer to treat it as an ID, namely
/// `DeviceId` and `TrackerNum`
///
/// Provides easy, uniform construction and retrieval.
pub trait Id: Copy + Clone + Eq + PartialEq + Ord + PartialOrd {
    fn get(&self) -> IdType;
    fn new(val: IdType) -> Self;
}

/// ID for a physical device (one device may expose several tracker slots)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DeviceId(pub IdType);

impl Id for DeviceId {
    fn get(&self) -> IdType {
        self.0
    }
    fn new(val: IdType) -> DeviceId {
        DeviceId(val)
    }
}

/// Slot number of a tracker within its device
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TrackerNum(pub IdType);

impl Id for TrackerNum {
    fn get(&self) -> IdType {
        self.0
    }
    fn new(val: IdType) -> TrackerNum {
        TrackerNum(val)
    }
}

/// Identity of one tracker: its slot number plus (when known) the owning
/// device.
///
/// This is the key the data feed uses for snapshots and the key per-tracker
/// display state is sharded by.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TrackerKey {
    pub device: Option<DeviceId>,
    pub num: TrackerNum,
}

impl TrackerKey {
    pub fn new(device: Option<DeviceId>, num: TrackerNum) -> Self {
        TrackerKey { device, num }
    }

    /// Loose identity match: slot numbers must agree, device IDs must agree
    /// only when both sides carry one.
    ///
    /// This is the comparison the table uses to match a hovered row against
    /// incoming keys, where one side may not know the device yet.
    pub fn matches(&self, other: &TrackerKey) -> bool {
        if self.num != other.num {
            return false;
        }
        match (self.device, other.device) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

/// Check for a match against an optional filter.
///
/// If the filter is `None`, it always matches.
///
/// ```
/// use trackerview::data_types::id_types::*;
/// let id = DeviceId::new(5);
/// assert!(id_filter_matches(None, id));
/// assert!(id_filter_matches(Some(DeviceId::new(5)), id));
/// assert!(!id_filter_matches(Some(DeviceId::new(3)), id));
/// ```
pub fn id_filter_matches<T>(filter: Option<T>, other: T) -> bool
where
    T: Id,
{
    match filter {
        None => true,
        Some(i) => i == other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_match() {
        let full = TrackerKey::new(Some(DeviceId(1)), TrackerNum(2));
        let bare = TrackerKey::new(None, TrackerNum(2));
        let other_device = TrackerKey::new(Some(DeviceId(9)), TrackerNum(2));
        let other_slot = TrackerKey::new(Some(DeviceId(1)), TrackerNum(3));

        assert!(full.matches(&full));
        assert!(full.matches(&bare));
        assert!(bare.matches(&full));
        assert!(!full.matches(&other_device));
        assert!(!full.matches(&other_slot));
        assert!(!bare.matches(&other_slot));
    }

    #[test]
    fn strict_equality_keys_maps() {
        use std::collections::HashMap;
        let mut m = HashMap::new();
        m.insert(TrackerKey::new(Some(DeviceId(1)), TrackerNum(0)), "a");
        m.insert(TrackerKey::new(Some(DeviceId(1)), TrackerNum(1)), "b");
        assert_eq!(
            m.get(&TrackerKey::new(Some(DeviceId(1)), TrackerNum(1))),
            Some(&"b")
        );
        assert_eq!(m.get(&TrackerKey::new(None, TrackerNum(1))), None);
    }
}
