// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

/*!
 * Timestamps carried by tracker snapshots.
 *
 * Stored as whole seconds plus microseconds since the Unix epoch, matching
 * the feed's wire representation. Conversions to and from native rust and
 * chrono types are provided.
 */

use chrono::{DateTime, TimeZone, Utc};
use std::{
    fmt::{self, Display},
    time::{Duration, SystemTime},
};

/// When a snapshot frame was produced.
///
/// ```
/// use trackerview::data_types::Timestamp;
/// let ts = Timestamp::now();
/// println!("{}s, {}us since the Unix epoch", ts.seconds(), ts.microseconds());
/// ```
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Default)]
pub struct Timestamp {
    sec: i64,
    usec: u32,
}

impl Timestamp {
    /// Constructor from components.
    pub fn new(sec: i64, usec: u32) -> Self {
        Self { sec, usec }
    }

    /// Get the seconds part
    pub fn seconds(&self) -> i64 {
        self.sec
    }

    /// Get the microseconds part
    pub fn microseconds(&self) -> u32 {
        self.usec
    }

    /// Get now as this type.
    pub fn now() -> Timestamp {
        Timestamp::from(SystemTime::now())
    }
}

impl From<SystemTime> for Timestamp {
    fn from(v: SystemTime) -> Self {
        // In practice this should always work.
        let since_epoch = v.duration_since(SystemTime::UNIX_EPOCH).unwrap();
        Timestamp::new(since_epoch.as_secs() as i64, since_epoch.subsec_micros())
    }
}

impl From<Timestamp> for SystemTime {
    fn from(v: Timestamp) -> Self {
        SystemTime::UNIX_EPOCH
            + Duration::from_secs(v.sec as u64)
            + Duration::from_micros(u64::from(v.usec))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(v: DateTime<Utc>) -> Self {
        Timestamp::new(v.timestamp(), v.timestamp_subsec_micros())
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(v: Timestamp) -> Self {
        Utc.timestamp(v.sec, v.usec * 1000)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.sec, self.usec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrono_roundtrip() {
        let ts = Timestamp::new(1_650_000_000, 250_000);
        let dt: DateTime<Utc> = ts.into();
        assert_eq!(Timestamp::from(dt), ts);
    }

    #[test]
    fn formatting_pads_microseconds() {
        assert_eq!(Timestamp::new(12, 34).to_string(), "12.000034");
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(Timestamp::new(5, 999_999) < Timestamp::new(6, 0));
        assert!(Timestamp::new(6, 1) > Timestamp::new(6, 0));
    }
}
