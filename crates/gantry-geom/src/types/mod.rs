// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types handed in by the world layer (bounds, orientation,
//! body snapshots).
//!
//! Overlap semantics are inclusive on faces so that touching boxes still
//! reach the narrow phase.

#[doc = "Axis-aligned bounding boxes and centre offsets (world space)."]
pub mod aabb;
#[doc = "Body identity and per-tick snapshots."]
pub mod body;
#[doc = "Roll/yaw/pitch orientation."]
pub mod orientation;
