// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gantry_core::math::Vec3;
use tracing::info;

/// Whether a mover is currently allowed to move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MotionState {
    /// Moving normally.
    #[default]
    Free,
    /// Blocked; motion is held at zero until the blocker clears.
    Stalled,
}

/// Tracks the free/stalled state of one mover and the motion it had before
/// stalling.
///
/// Transitions:
/// - `Free → Stalled`: cache the current motion, report zero.
/// - `Stalled → Stalled`: keep reporting zero.
/// - `Stalled → Free`: report the cached motion and clear the cache.
/// - `Free → Free`: pass the current motion through.
#[derive(Debug, Clone, Default)]
pub struct StallTracker {
    state: MotionState,
    motion_before_stall: Option<Vec3>,
}

impl StallTracker {
    /// Creates a tracker in the free state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> MotionState {
        self.state
    }

    /// `true` while stalled.
    #[must_use]
    pub const fn is_stalled(&self) -> bool {
        matches!(self.state, MotionState::Stalled)
    }

    /// Motion cached on the last `Free → Stalled` transition.
    #[must_use]
    pub const fn motion_before_stall(&self) -> Option<Vec3> {
        self.motion_before_stall
    }

    /// Applies this tick's verdict and returns the motion the mover should
    /// carry from now on.
    pub fn update(&mut self, blocked: bool, current_motion: Vec3) -> Vec3 {
        match (self.state, blocked) {
            (MotionState::Free, false) => current_motion,
            (MotionState::Free, true) => {
                info!(motion = %current_motion, "mover stalled");
                self.state = MotionState::Stalled;
                self.motion_before_stall = Some(current_motion);
                Vec3::ZERO
            }
            (MotionState::Stalled, true) => Vec3::ZERO,
            (MotionState::Stalled, false) => {
                let restored = self.motion_before_stall.take().unwrap_or(current_motion);
                info!(motion = %restored, "mover unstalled");
                self.state = MotionState::Free;
                restored
            }
        }
    }
}
