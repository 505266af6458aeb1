// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gantry_core::math::Vec3;
use gantry_geom::{MotionState, StallTracker};

#[test]
fn free_passes_motion_through() {
    let mut tracker = StallTracker::new();
    let motion = Vec3::new(0.5, 0.0, 0.0);
    assert_eq!(tracker.update(false, motion), motion);
    assert_eq!(tracker.state(), MotionState::Free);
    assert_eq!(tracker.motion_before_stall(), None);
}

#[test]
fn stall_caches_and_release_restores_motion() {
    let mut tracker = StallTracker::new();
    let motion = Vec3::new(0.0, 0.0, 2.0);

    assert_eq!(tracker.update(true, motion), Vec3::ZERO);
    assert!(tracker.is_stalled());
    assert_eq!(tracker.motion_before_stall(), Some(motion));

    // While stalled the caller feeds back zero motion; the cache must survive.
    assert_eq!(tracker.update(true, Vec3::ZERO), Vec3::ZERO);
    assert_eq!(tracker.motion_before_stall(), Some(motion));

    assert_eq!(tracker.update(false, Vec3::ZERO), motion);
    assert_eq!(tracker.state(), MotionState::Free);
    assert_eq!(tracker.motion_before_stall(), None);
}

#[test]
fn restall_caches_latest_motion() {
    let mut tracker = StallTracker::new();
    tracker.update(true, Vec3::UNIT_X);
    tracker.update(false, Vec3::ZERO);
    tracker.update(true, Vec3::UNIT_Y);
    assert_eq!(tracker.update(false, Vec3::ZERO), Vec3::UNIT_Y);
}
