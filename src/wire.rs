// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Compact binary codec for snapshot frames on the streaming data feed.
//!
//! All fields are big-endian. A frame carries only per-tick motion data;
//! tracker metadata (assignment, naming, calibration offsets) travels out
//! of band and decodes as absent.

use crate::data_types::{
    id_types::{DeviceId, TrackerKey, TrackerNum},
    math::{Quat, Vec3},
    time::Timestamp,
    tracker::{TrackerSnapshot, TrackerStatus},
};
use crate::{Error, Result};
use bitflags::bitflags;
use bytes::{Buf, BufMut};

/// Types whose frame representation has a fixed size.
pub trait ConstantFrameSize {
    fn constant_frame_size() -> usize;
}

/// Encode into a frame buffer.
pub trait Encode {
    fn encode_to<B: BufMut>(&self, buf: &mut B) -> Result<()>;
}

/// Decode from a frame buffer.
pub trait Decode: Sized {
    fn decode_from<B: Buf>(buf: &mut B) -> Result<Self>;
}

/// Fail encoding up front if the buffer cannot take `needed` more bytes.
pub fn check_encode_remaining<B: BufMut>(buf: &B, needed: usize) -> Result<()> {
    if buf.remaining_mut() < needed {
        Err(Error::OutOfBuffer)
    } else {
        Ok(())
    }
}

/// Fail decoding up front if fewer than `needed` bytes are buffered.
pub fn check_decode_remaining<B: Buf>(buf: &B, needed: usize) -> Result<()> {
    let remaining = buf.remaining();
    if remaining < needed {
        Err(Error::NeedMoreData(needed - remaining))
    } else {
        Ok(())
    }
}

macro_rules! primitive_frame_impls {
    ($t:ty, $put:ident, $get:ident) => {
        impl ConstantFrameSize for $t {
            fn constant_frame_size() -> usize {
                std::mem::size_of::<$t>()
            }
        }

        impl Encode for $t {
            fn encode_to<B: BufMut>(&self, buf: &mut B) -> Result<()> {
                check_encode_remaining(buf, Self::constant_frame_size())?;
                buf.$put(*self);
                Ok(())
            }
        }

        impl Decode for $t {
            fn decode_from<B: Buf>(buf: &mut B) -> Result<Self> {
                check_decode_remaining(buf, Self::constant_frame_size())?;
                Ok(buf.$get())
            }
        }
    };
}

primitive_frame_impls!(u8, put_u8, get_u8);
primitive_frame_impls!(i32, put_i32, get_i32);
primitive_frame_impls!(i64, put_i64, get_i64);
primitive_frame_impls!(u32, put_u32, get_u32);
primitive_frame_impls!(f32, put_f32, get_f32);
primitive_frame_impls!(f64, put_f64, get_f64);

impl ConstantFrameSize for Vec3 {
    fn constant_frame_size() -> usize {
        f64::constant_frame_size() * 3
    }
}

impl Encode for Vec3 {
    fn encode_to<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        check_encode_remaining(buf, Self::constant_frame_size())?;
        self.x.encode_to(buf)?;
        self.y.encode_to(buf)?;
        self.z.encode_to(buf)?;
        Ok(())
    }
}

impl Decode for Vec3 {
    fn decode_from<B: Buf>(buf: &mut B) -> Result<Self> {
        check_decode_remaining(buf, Self::constant_frame_size())?;
        let x = f64::decode_from(buf)?;
        let y = f64::decode_from(buf)?;
        let z = f64::decode_from(buf)?;
        Ok(Vec3::new(x, y, z))
    }
}

/// Quaternions go vector part first, scalar last.
impl ConstantFrameSize for Quat {
    fn constant_frame_size() -> usize {
        f64::constant_frame_size() * 4
    }
}

impl Encode for Quat {
    fn encode_to<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        check_encode_remaining(buf, Self::constant_frame_size())?;
        self.v.encode_to(buf)?;
        self.s.encode_to(buf)?;
        Ok(())
    }
}

impl Decode for Quat {
    fn decode_from<B: Buf>(buf: &mut B) -> Result<Self> {
        check_decode_remaining(buf, Self::constant_frame_size())?;
        let v = Vec3::decode_from(buf)?;
        let s = f64::decode_from(buf)?;
        Ok(Quat::from_sv(s, v))
    }
}

impl ConstantFrameSize for Timestamp {
    fn constant_frame_size() -> usize {
        i64::constant_frame_size() + u32::constant_frame_size()
    }
}

impl Encode for Timestamp {
    fn encode_to<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        check_encode_remaining(buf, Self::constant_frame_size())?;
        self.seconds().encode_to(buf)?;
        self.microseconds().encode_to(buf)?;
        Ok(())
    }
}

impl Decode for Timestamp {
    fn decode_from<B: Buf>(buf: &mut B) -> Result<Self> {
        check_decode_remaining(buf, Self::constant_frame_size())?;
        let sec = i64::decode_from(buf)?;
        let usec = u32::decode_from(buf)?;
        Ok(Timestamp::new(sec, usec))
    }
}

bitflags! {
    /// Which optional fields a snapshot frame carries.
    struct FrameFields: u8 {
        const DEVICE_ID = 1 << 0;
        const ROTATION = 1 << 1;
        const POSITION = 1 << 2;
        const ACCELERATION = 1 << 3;
        const TEMPERATURE = 1 << 4;
    }
}

impl Encode for TrackerSnapshot {
    fn encode_to<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        let mut fields = FrameFields::empty();
        fields.set(FrameFields::DEVICE_ID, self.key.device.is_some());
        fields.set(FrameFields::ROTATION, self.rotation.is_some());
        fields.set(FrameFields::POSITION, self.position.is_some());
        fields.set(FrameFields::ACCELERATION, self.linear_acceleration.is_some());
        fields.set(FrameFields::TEMPERATURE, self.temperature.is_some());

        fields.bits().encode_to(buf)?;
        self.status.to_wire().encode_to(buf)?;
        self.key.num.0.encode_to(buf)?;
        if let Some(device) = self.key.device {
            device.0.encode_to(buf)?;
        }
        self.timestamp.encode_to(buf)?;
        if let Some(rotation) = self.rotation {
            rotation.encode_to(buf)?;
        }
        if let Some(position) = self.position {
            position.encode_to(buf)?;
        }
        if let Some(acceleration) = self.linear_acceleration {
            acceleration.encode_to(buf)?;
        }
        if let Some(temperature) = self.temperature {
            temperature.encode_to(buf)?;
        }
        Ok(())
    }
}

impl Decode for TrackerSnapshot {
    fn decode_from<B: Buf>(buf: &mut B) -> Result<Self> {
        let fields = u8::decode_from(buf)?;
        let fields =
            FrameFields::from_bits(fields).ok_or(Error::UnrecognizedFrameFields(fields))?;
        let status = TrackerStatus::from_wire(u8::decode_from(buf)?)?;
        let num = TrackerNum(i32::decode_from(buf)?);
        let device = if fields.contains(FrameFields::DEVICE_ID) {
            Some(DeviceId(i32::decode_from(buf)?))
        } else {
            None
        };
        let timestamp = Timestamp::decode_from(buf)?;

        let mut snapshot =
            TrackerSnapshot::new(TrackerKey::new(device, num), status, timestamp);
        if fields.contains(FrameFields::ROTATION) {
            snapshot.rotation = Some(Quat::decode_from(buf)?);
        }
        if fields.contains(FrameFields::POSITION) {
            snapshot.position = Some(Vec3::decode_from(buf)?);
        }
        if fields.contains(FrameFields::ACCELERATION) {
            snapshot.linear_acceleration = Some(Vec3::decode_from(buf)?);
        }
        if fields.contains(FrameFields::TEMPERATURE) {
            snapshot.temperature = Some(f32::decode_from(buf)?);
        }
        Ok(snapshot)
    }
}
