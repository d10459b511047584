// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Error type shared across the crate.
//!
//! The core display algorithms are total over their documented domain, so
//! errors only arise at the seams: decoding feed frames and running snapshot
//! handlers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("decoding ran out of buffered bytes: need {0} additional bytes")]
    NeedMoreData(usize),
    #[error("encoding ran out of buffer space")]
    OutOfBuffer,
    #[error("unrecognized tracker status value {0}")]
    UnrecognizedStatus(u8),
    #[error("unrecognized body part value {0}")]
    UnrecognizedBodyPart(u8),
    #[error("unrecognized frame field bits {0:#x}")]
    UnrecognizedFrameFields(u8),
    #[error("snapshot handler returned an error: {0}")]
    HandlerError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub type EmptyResult = Result<()>;
