// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Developer-mode settings.
//!
//! These toggles alter presentation and formatting choices only; the
//! rotation and velocity algorithms never consult them.

use bitflags::bitflags;

bitflags! {
    /// The developer-mode toggle set.
    #[derive(Default)]
    pub struct DevSettings: u32 {
        /// Render table text at full contrast
        const HIGH_CONTRAST = 1 << 0;
        /// Two decimals on rotation columns instead of none
        const PRECISE_ROTATION = 1 << 1;
        /// Ask the feed for a higher update cadence
        const FAST_DATA_FEED = 1 << 2;
        /// Hide third-party trackers from the table
        const FILTER_SLIMES_AND_HMD = 1 << 3;
        /// Sort table rows by tracker custom name
        const SORT_BY_NAME = 1 << 4;
        /// Show raw instead of reference-adjusted rotation
        const RAW_ROTATION = 1 << 5;
        /// Extra table columns: acceleration, position, URL
        const MORE_INFO = 1 << 6;
    }
}

/// The configuration store the display layer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Master switch: dev filtering/sorting apply only in debug mode.
    pub debug: bool,
    pub dev_settings: DevSettings,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Replace the toggle set.
    ///
    /// Returns whether the data feed must be reconnected, which is the case
    /// exactly when the feed-cadence toggle changed.
    pub fn set_dev_settings(&mut self, settings: DevSettings) -> bool {
        let needs_reconnect = (self.dev_settings ^ settings).contains(DevSettings::FAST_DATA_FEED);
        self.dev_settings = settings;
        needs_reconnect
    }

    pub fn filtering_enabled(&self) -> bool {
        self.debug && self.dev_settings.contains(DevSettings::FILTER_SLIMES_AND_HMD)
    }

    pub fn sorting_enabled(&self) -> bool {
        self.debug && self.dev_settings.contains(DevSettings::SORT_BY_NAME)
    }
}
