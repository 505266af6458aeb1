// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Broad-phase interfaces and a minimal reference implementation.
//!
//! Determinism contract (applies to all implementations used here):
//! - Query results are sorted ascending by [`BodyId`].
//! - Overlap is inclusive on faces (touching AABBs are considered overlapping).

use crate::types::aabb::Aabb;
use crate::types::body::{BodyId, BodySnapshot};

#[doc = "Ordered-map body index; the reference broad phase."]
pub mod body_index;

/// Broad-phase interface for tracking bodies and gathering overlap candidates.
pub trait BroadPhase {
    /// Inserts or replaces the snapshot stored under its id.
    fn upsert(&mut self, body: BodySnapshot);
    /// Removes a body, returning its last snapshot if present.
    fn remove(&mut self, id: BodyId) -> Option<BodySnapshot>;
    /// Returns every body whose bounds overlap `region`, ascending by id.
    fn query(&self, region: &Aabb) -> Vec<BodySnapshot>;
}
