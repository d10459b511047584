// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Per-tracker display state.
//!
//! Each tracker identity owns one binding: its velocity estimator plus a
//! cache of the reference-adjusted rotations for the last-seen raw reading.
//! Bindings are created on first observation of a key and discarded when
//! the tracker leaves the active set. No state is shared across trackers,
//! so bindings can be sharded per identity without coordination.

use crate::adjust::adjusted_rotation;
use crate::data_types::{Quat, TrackerKey, TrackerSnapshot};
use crate::handler::{HandlerCode, SnapshotHandler};
use crate::velocity::VelocityEstimator;
use crate::Result;
use std::collections::HashMap;

/// Display values computed from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerMotion {
    /// Motion intensity in `[0, 1]`, for the row glow.
    pub velocity: f64,
    /// Reference-adjusted orientation, for the rotation column.
    pub adjusted: Quat,
    /// Adjusted orientation with the mounting position divided back out,
    /// for the 3D preview.
    pub adjusted_without_mounting: Quat,
}

#[derive(Debug, Clone)]
struct AdjustedCache {
    /// The raw rotation the cached values were computed from. Matches the
    /// UI layer's memoization key: the raw rotation only.
    seeded_by: Option<Quat>,
    adjusted: Quat,
    adjusted_without_mounting: Quat,
}

/// State owned by one tracker identity.
#[derive(Debug, Clone)]
pub struct TrackerBinding {
    velocity: VelocityEstimator,
    cache: Option<AdjustedCache>,
}

impl TrackerBinding {
    fn new(snapshot: &TrackerSnapshot) -> TrackerBinding {
        TrackerBinding {
            velocity: VelocityEstimator::new(snapshot.rotation),
            cache: None,
        }
    }

    fn observe(&mut self, snapshot: &TrackerSnapshot) -> TrackerMotion {
        let velocity = self.velocity.update(snapshot.rotation);

        let cache = match self.cache.take() {
            Some(cache) if cache.seeded_by == snapshot.rotation => cache,
            _ => AdjustedCache {
                seeded_by: snapshot.rotation,
                adjusted: adjusted_rotation(snapshot, false),
                adjusted_without_mounting: adjusted_rotation(snapshot, true),
            },
        };
        let motion = TrackerMotion {
            velocity,
            adjusted: cache.adjusted,
            adjusted_without_mounting: cache.adjusted_without_mounting,
        };
        self.cache = Some(cache);
        motion
    }
}

/// All per-tracker bindings, keyed by tracker identity.
#[derive(Debug, Default)]
pub struct DisplayBindings {
    bindings: HashMap<TrackerKey, TrackerBinding>,
}

impl DisplayBindings {
    pub fn new() -> DisplayBindings {
        DisplayBindings {
            bindings: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run one update tick for a snapshot, creating the binding on first
    /// observation of its key.
    pub fn observe(&mut self, snapshot: &TrackerSnapshot) -> TrackerMotion {
        self.bindings
            .entry(snapshot.key)
            .or_insert_with(|| TrackerBinding::new(snapshot))
            .observe(snapshot)
    }

    /// Drop bindings for trackers no longer in the active set.
    pub fn retain_active(&mut self, active: &[TrackerKey]) {
        self.bindings.retain(|key, _| active.contains(key));
    }
}

impl SnapshotHandler for DisplayBindings {
    fn handle(&mut self, snapshot: &TrackerSnapshot) -> Result<HandlerCode> {
        self.observe(snapshot);
        Ok(HandlerCode::ContinueProcessing)
    }
}
