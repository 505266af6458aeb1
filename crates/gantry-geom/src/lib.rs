// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Collision geometry for moving contraptions.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) and their centre offsets (`Extents`).
- Oriented bounding boxes (`Obb`) built from an `Aabb` plus roll/yaw/pitch.
- A 15-axis separating-axis intersector (`sat`) producing a verdict and a
  minimum translation vector.
- A broad-phase trait and an ordered reference index (`broad`).
- The per-mover `CollisionManager` that vetoes or admits attempted motion
  and tracks the free/stalled state machine.

Design notes:
- Deterministic: candidate axes are tested in a fixed order and ties keep
  the first axis; broad-phase output is sorted by `BodyId`.
- Float64 throughout, with tolerant comparisons from `gantry_core::math`.
- The crate emits `tracing` events and never installs a subscriber.
"]
#![forbid(unsafe_code)]

/// Broad-phase interfaces and the reference body index.
pub mod broad;
/// Per-mover collision decisions and stall tracking.
pub mod collision;
/// Collision configuration loaded from JSON.
pub mod config;
/// Error types for geometry and collision operations.
pub mod error;
/// Oriented bounding boxes.
pub mod obb;
/// Separating-axis intersection.
pub mod sat;
/// Foundational geometric types.
pub mod types;

pub use broad::{body_index::BodyIndex, BroadPhase};
pub use collision::manager::{
    convergence, Blocker, CollisionManager, RotationOutcome, TranslationOutcome,
};
pub use collision::stall::{MotionState, StallTracker};
pub use config::{CollisionConfig, ConfigError, NarrowPhaseFilter};
pub use error::{CollisionError, GeomError};
pub use obb::{AxisMode, Obb};
pub use sat::{intersect, intersect_obbs, CollisionState, Intersection, SeparationResult};
pub use types::aabb::{Aabb, Extents};
pub use types::body::{BodyId, BodySnapshot};
pub use types::orientation::Orientation;
