// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;

use crate::broad::BroadPhase;
use crate::types::aabb::Aabb;
use crate::types::body::{BodyId, BodySnapshot};

/// Body index backed by an ordered map with linear-scan queries.
///
/// Queries are `O(n)`. Contraption neighbourhoods are small, and ordered
/// iteration keeps the output deterministic.
#[derive(Debug, Default, Clone)]
pub struct BodyIndex {
    bodies: BTreeMap<BodyId, BodySnapshot>,
}

impl BodyIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bodies: BTreeMap::new(),
        }
    }

    /// Number of tracked bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// `true` when no bodies are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Snapshot stored for `id`.
    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&BodySnapshot> {
        self.bodies.get(&id)
    }

    /// Candidates near `mover`: bodies overlapping its bounds inflated by
    /// `margin`, never including the mover itself.
    #[must_use]
    pub fn neighbors_of(&self, mover: &BodySnapshot, margin: f64) -> Vec<BodySnapshot> {
        let region = mover.bounds().inflate(margin);
        self.bodies
            .values()
            .filter(|body| body.id() != mover.id() && region.overlaps(body.bounds()))
            .copied()
            .collect()
    }
}

impl BroadPhase for BodyIndex {
    fn upsert(&mut self, body: BodySnapshot) {
        self.bodies.insert(body.id(), body);
    }

    fn remove(&mut self, id: BodyId) -> Option<BodySnapshot> {
        self.bodies.remove(&id)
    }

    fn query(&self, region: &Aabb) -> Vec<BodySnapshot> {
        self.bodies
            .values()
            .filter(|body| region.overlaps(body.bounds()))
            .copied()
            .collect()
    }
}
