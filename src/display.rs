// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Presentation values for the tracker table.
//!
//! Everything here is a pure function from snapshots and configuration to
//! strings and numbers; the GUI layer renders them verbatim.

use crate::adjust::adjusted_rotation;
use crate::config::{Config, DevSettings};
use crate::data_types::{EulerDegrees, TrackerEntry, TrackerStatus, Vec3};
use std::net::Ipv4Addr;

/// `"x / y / z"` with a fixed number of decimals per component.
pub fn format_vector3(v: Vec3, precision: usize) -> String {
    format_triple(v.x, v.y, v.z, precision)
}

/// Euler angles rendered like a vector.
pub fn format_euler(e: EulerDegrees, precision: usize) -> String {
    format_triple(e.x, e.y, e.z, precision)
}

fn format_triple(x: f64, y: f64, z: f64, precision: usize) -> String {
    format!(
        "{:.p$} / {:.p$} / {:.p$}",
        x,
        y,
        z,
        p = precision
    )
}

/// Glow radius in pixels for a motion intensity in `[0, 1]`.
pub fn glow_radius_px(velocity: f64) -> f64 {
    velocity * 8.0
}

/// The feed endpoint shown in the URL column.
pub fn udp_url(ip: Option<Ipv4Addr>) -> String {
    format!("udp://{}", ip.unwrap_or(Ipv4Addr::UNSPECIFIED))
}

/// Rotation column text for one tracker.
///
/// Raw vs reference-adjusted follows the raw-rotation toggle; decimal count
/// follows the precise-rotation toggle.
pub fn rotation_text(entry: &TrackerEntry, config: &Config) -> String {
    let precision = if config.dev_settings.contains(DevSettings::PRECISE_ROTATION) {
        2
    } else {
        0
    };
    let euler = if config.dev_settings.contains(DevSettings::RAW_ROTATION) {
        entry
            .tracker
            .rotation
            .unwrap_or_default()
            .to_euler_degrees()
    } else {
        adjusted_rotation(&entry.tracker, false).to_euler_degrees()
    };
    format_euler(euler, precision)
}

/// Which text color the row uses.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TextColor {
    Primary,
    Secondary,
}

/// Battery cell contents.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryCell {
    /// Fill level in `[0, 1]`.
    pub level: f32,
    pub voltage: Option<f32>,
    pub disabled: bool,
}

/// Ping/RSSI cell contents.
#[derive(Debug, Clone, PartialEq)]
pub struct WifiCell {
    pub rssi: i16,
    pub ping: u32,
    pub disabled: bool,
}

/// One table row, fully formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerRow {
    pub name: String,
    pub status: TrackerStatus,
    pub text_color: TextColor,
    /// Manufacturer, or a placeholder when the device is unknown.
    pub manufacturer: String,
    pub battery: Option<BatteryCell>,
    pub wifi: Option<WifiCell>,
    pub tps: Option<f32>,
    pub rotation: String,
    pub temperature: Option<String>,
    /// Only populated under the more-info toggle.
    pub acceleration: Option<String>,
    pub position: Option<String>,
    pub url: Option<String>,
}

impl TrackerRow {
    pub fn build(entry: &TrackerEntry, config: &Config) -> TrackerRow {
        let disabled = entry.tracker.status == TrackerStatus::Disconnected;
        let device = entry.device.as_ref();
        let more_info = config.dev_settings.contains(DevSettings::MORE_INFO);

        let battery = device.and_then(|d| {
            Some(BatteryCell {
                level: d.battery_pct_estimate? / 100.0,
                voltage: d.battery_voltage,
                disabled,
            })
        });
        let wifi = device.and_then(|d| {
            Some(WifiCell {
                rssi: d.rssi?,
                ping: d.ping?,
                disabled,
            })
        });

        TrackerRow {
            name: entry.tracker.display_name().to_string(),
            status: entry.tracker.status,
            text_color: if config.dev_settings.contains(DevSettings::HIGH_CONTRAST) {
                TextColor::Primary
            } else {
                TextColor::Secondary
            },
            manufacturer: device
                .and_then(|d| d.manufacturer.clone())
                .unwrap_or_else(|| "--".to_string()),
            battery,
            wifi,
            tps: device.and_then(|d| d.tps),
            rotation: rotation_text(entry, config),
            temperature: entry.tracker.temperature.map(|t| format!("{:.2}", t)),
            acceleration: if more_info {
                entry
                    .tracker
                    .linear_acceleration
                    .map(|a| format_vector3(a, 1))
            } else {
                None
            },
            position: if more_info {
                entry.tracker.position.map(|p| format_vector3(p, 0))
            } else {
                None
            },
            url: if more_info {
                Some(udp_url(device.and_then(|d| d.ip_address)))
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{
        id_types::{DeviceId, TrackerKey, TrackerNum},
        DeviceSnapshot, Quat, Timestamp, TrackerSnapshot,
    };

    fn entry() -> TrackerEntry {
        let mut tracker = TrackerSnapshot::new(
            TrackerKey::new(Some(DeviceId(1)), TrackerNum(0)),
            TrackerStatus::Ok,
            Timestamp::default(),
        );
        // Quarter turn about Y.
        tracker.rotation = Some(Quat::new(
            0.7071067811865476,
            0.0,
            0.7071067811865476,
            0.0,
        ));
        tracker.temperature = Some(36.125);
        tracker.position = Some(Vec3::new(0.6, 1.5, -0.25));
        TrackerEntry {
            device: None,
            tracker,
        }
    }

    #[test]
    fn vector_formatting_matches_table() {
        assert_eq!(format_vector3(Vec3::new(1.0, 2.5, -3.0), 0), "1 / 2 / -3");
        assert_eq!(
            format_vector3(Vec3::new(1.0, 2.5, -3.0), 2),
            "1.00 / 2.50 / -3.00"
        );
    }

    #[test]
    fn rotation_precision_follows_toggle() {
        let entry = entry();
        let mut config = Config::new();
        assert_eq!(rotation_text(&entry, &config), "0 / 90 / 0");
        config.set_dev_settings(DevSettings::PRECISE_ROTATION);
        assert_eq!(rotation_text(&entry, &config), "0.00 / 90.00 / 0.00");
    }

    #[test]
    fn raw_toggle_skips_adjustment() {
        // Without calibration info, raw and adjusted coincide.
        let entry = entry();
        let mut config = Config::new();
        let adjusted = rotation_text(&entry, &config);
        config.set_dev_settings(DevSettings::RAW_ROTATION);
        assert_eq!(rotation_text(&entry, &config), adjusted);
    }

    #[test]
    fn glow_scales_linearly() {
        assert_eq!(glow_radius_px(0.0), 0.0);
        assert_eq!(glow_radius_px(0.5), 4.0);
        assert_eq!(glow_radius_px(1.0), 8.0);
    }

    #[test]
    fn url_defaults_to_unspecified() {
        assert_eq!(udp_url(None), "udp://0.0.0.0");
        assert_eq!(
            udp_url(Some(Ipv4Addr::new(192, 168, 1, 42))),
            "udp://192.168.1.42"
        );
    }

    #[test]
    fn row_without_device_uses_placeholders() {
        let row = TrackerRow::build(&entry(), &Config::new());
        assert_eq!(row.manufacturer, "--");
        assert_eq!(row.battery, None);
        assert_eq!(row.wifi, None);
        assert_eq!(row.temperature.as_deref(), Some("36.13"));
        assert_eq!(row.text_color, TextColor::Secondary);
        // More-info columns stay empty without the toggle.
        assert_eq!(row.position, None);
        assert_eq!(row.url, None);
    }

    #[test]
    fn row_with_device_and_more_info() {
        let mut e = entry();
        let mut device = DeviceSnapshot::new(DeviceId(1));
        device.manufacturer = Some("SlimeVR".into());
        device.battery_pct_estimate = Some(85.0);
        device.battery_voltage = Some(3.9);
        device.rssi = Some(-55);
        device.ping = Some(12);
        device.tps = Some(99.5);
        device.ip_address = Some(Ipv4Addr::new(10, 0, 0, 7));
        e.device = Some(device);
        e.tracker.linear_acceleration = Some(Vec3::new(0.05, -9.81, 0.0));

        let mut config = Config::new();
        config.set_dev_settings(DevSettings::MORE_INFO | DevSettings::HIGH_CONTRAST);
        let row = TrackerRow::build(&e, &config);

        assert_eq!(row.manufacturer, "SlimeVR");
        let battery = row.battery.unwrap();
        assert!((battery.level - 0.85).abs() < 1e-6);
        assert!(!battery.disabled);
        assert_eq!(
            row.wifi,
            Some(WifiCell {
                rssi: -55,
                ping: 12,
                disabled: false,
            })
        );
        assert_eq!(row.acceleration.as_deref(), Some("0.1 / -9.8 / 0.0"));
        assert_eq!(row.position.as_deref(), Some("1 / 2 / -0"));
        assert_eq!(row.url.as_deref(), Some("udp://10.0.0.7"));
        assert_eq!(row.text_color, TextColor::Primary);
    }

    #[test]
    fn disconnected_rows_disable_battery_and_wifi() {
        let mut e = entry();
        e.tracker.status = TrackerStatus::Disconnected;
        let mut device = DeviceSnapshot::new(DeviceId(1));
        device.battery_pct_estimate = Some(50.0);
        device.rssi = Some(-70);
        device.ping = Some(30);
        e.device = Some(device);

        let row = TrackerRow::build(&e, &Config::new());
        assert!(row.battery.unwrap().disabled);
        assert!(row.wifi.unwrap().disabled);
    }
}
