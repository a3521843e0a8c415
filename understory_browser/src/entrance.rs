// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time entrance animation for list rows.
//!
//! The first time a list browser becomes visible, each visible row slides in from
//! the right edge to its resting position, staggered by its position in the visible
//! set. Later appearances do nothing. [`EntranceLatch`] enforces the "first time"
//! part; [`EntranceAnimation::plan`] produces the per-row animations, which the UI
//! layer plays with whatever animation system it has.

use core::ops::Range;
use core::time::Duration;

use kurbo::{Affine, Vec2};

/// A single-use latch.
///
/// Owned by one browser and only touched from the UI thread, so a plain flag is
/// enough.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EntranceLatch {
    fired: bool,
}

impl EntranceLatch {
    /// Create an unfired latch.
    pub const fn new() -> Self {
        Self { fired: false }
    }

    /// Check and set. Returns true exactly once per latch.
    pub fn fire(&mut self) -> bool {
        !core::mem::replace(&mut self.fired, true)
    }

    /// Returns true once [`EntranceLatch::fire`] has been called.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Timing of the entrance animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EntranceAnimation {
    /// Length of each row's slide.
    pub duration: Duration,
    /// Delay added per row.
    pub stagger: Duration,
    /// Spring damping ratio; `1.0` is critically damped.
    pub spring_damping: f64,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            stagger: Duration::from_millis(100),
            spring_damping: 0.7,
        }
    }
}

/// Animation of one row from off-screen right to its resting transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowAnimation {
    /// Row index in the browser's scope.
    pub row: usize,
    /// Starting transform, translated right by the container width.
    pub from: Affine,
    /// Resting transform.
    pub to: Affine,
    /// Delay before the slide starts.
    pub delay: Duration,
    /// Slide duration.
    pub duration: Duration,
    /// Spring damping ratio.
    pub spring_damping: f64,
}

impl EntranceAnimation {
    /// Plan the animations for `visible` rows in a container of `width`.
    pub fn plan(&self, visible: Range<usize>, width: f64) -> Vec<RowAnimation> {
        let from = Affine::translate(Vec2::new(width, 0.0));
        visible
            .zip(0_u32..)
            .map(|(row, position)| RowAnimation {
                row,
                from,
                to: Affine::IDENTITY,
                delay: self.stagger * position,
                duration: self.duration,
                spring_damping: self.spring_damping,
            })
            .collect()
    }
}
