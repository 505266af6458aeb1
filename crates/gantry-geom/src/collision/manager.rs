// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;

use gantry_core::math::Vec3;
use tracing::{debug, instrument, trace, warn};

use crate::collision::stall::{MotionState, StallTracker};
use crate::config::{CollisionConfig, ConfigError, NarrowPhaseFilter};
use crate::error::CollisionError;
use crate::obb::Obb;
use crate::sat::{intersect_obbs, CollisionState};
use crate::types::aabb::Aabb;
use crate::types::body::{BodyId, BodySnapshot};
use crate::types::orientation::Orientation;

/// Dot product of two motion vectors.
///
/// Positive when the bodies move in broadly the same direction, negative
/// when they move in opposite directions, zero when either is at rest.
#[must_use]
pub fn convergence(mover_motion: Vec3, neighbor_motion: Vec3) -> f64 {
    mover_motion.dot(&neighbor_motion)
}

/// The neighbour that stalled a translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Blocker {
    id: BodyId,
    state: CollisionState,
    mtv: Vec3,
    resolution: Vec3,
}

impl Blocker {
    /// Blocking body.
    #[must_use]
    pub const fn id(&self) -> BodyId {
        self.id
    }

    /// SAT verdict against the blocking body.
    #[must_use]
    pub const fn state(&self) -> CollisionState {
        self.state
    }

    /// Minimum translation vector pushing the mover out of the blocker.
    #[must_use]
    pub const fn mtv(&self) -> Vec3 {
        self.mtv
    }

    /// Requested delta plus the MTV. Diagnostic only; the manager never
    /// applies it.
    #[must_use]
    pub const fn resolution(&self) -> Vec3 {
        self.resolution
    }
}

/// Result of [`CollisionManager::attempt_translation`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TranslationOutcome {
    allowed: Vec3,
    stalled: bool,
    motion: Vec3,
    blocker: Option<Blocker>,
}

impl TranslationOutcome {
    /// Translation the caller may apply this tick: the full request when
    /// free, zero when stalled.
    #[must_use]
    pub const fn allowed(&self) -> Vec3 {
        self.allowed
    }

    /// `true` when some neighbour blocked the request.
    #[must_use]
    pub const fn stalled(&self) -> bool {
        self.stalled
    }

    /// Motion the mover should carry after this tick (zero while stalled,
    /// restored on release).
    #[must_use]
    pub const fn motion(&self) -> Vec3 {
        self.motion
    }

    /// Worst blocking neighbour, if any.
    #[must_use]
    pub const fn blocker(&self) -> Option<&Blocker> {
        self.blocker.as_ref()
    }
}

/// Result of [`CollisionManager::attempt_rotation`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationOutcome {
    allowed: Orientation,
    target: Orientation,
    stalled: bool,
}

impl RotationOutcome {
    /// Angular delta the caller may apply.
    #[must_use]
    pub const fn allowed(&self) -> Orientation {
        self.allowed
    }

    /// Orientation the mover ends up in once the delta is applied.
    #[must_use]
    pub const fn target(&self) -> Orientation {
        self.target
    }

    /// `true` when the rotation was blocked.
    #[must_use]
    pub const fn stalled(&self) -> bool {
        self.stalled
    }
}

/// Decides, once per tick, whether one mover may move.
///
/// Holds the mover's stall state across ticks and a scratch map of
/// converging neighbours that is rebuilt on every query.
#[derive(Debug, Clone)]
pub struct CollisionManager {
    config: CollisionConfig,
    tracker: StallTracker,
    converging: BTreeMap<BodyId, f64>,
}

impl Default for CollisionManager {
    fn default() -> Self {
        Self::with_valid_config(CollisionConfig::default())
    }
}

impl CollisionManager {
    /// Creates a manager in the free state.
    ///
    /// Rejects configs that fail [`CollisionConfig::validate`]; a NaN or
    /// negative margin would otherwise break every broad-phase query.
    pub fn new(config: CollisionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: CollisionConfig) -> Self {
        Self {
            config,
            tracker: StallTracker::new(),
            converging: BTreeMap::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Current free/stalled state.
    #[must_use]
    pub const fn state(&self) -> MotionState {
        self.tracker.state()
    }

    /// Stall tracker for this mover.
    #[must_use]
    pub const fn tracker(&self) -> &StallTracker {
        &self.tracker
    }

    /// Neighbours with positive convergence seen by the last query.
    #[must_use]
    pub const fn converging(&self) -> &BTreeMap<BodyId, f64> {
        &self.converging
    }

    /// Vetoes or admits `requested` for `mover` against `candidates`.
    ///
    /// Candidates outside the mover's current bounds inflated by the
    /// broad-phase margin are ignored, as is the mover itself. Survivors of
    /// the configured [`NarrowPhaseFilter`] are tested with the mover at its
    /// attempted position. Any MTV blocks (touching contacts only when
    /// `stall_on_touch` is set); the deepest MTV is reported.
    #[instrument(
        level = "debug",
        skip(self, mover, requested, candidates),
        fields(mover = %mover.id(), requested = %requested)
    )]
    pub fn attempt_translation(
        &mut self,
        mover: &BodySnapshot,
        requested: Vec3,
        candidates: &[BodySnapshot],
    ) -> TranslationOutcome {
        self.converging.clear();
        let region = mover.bounds().inflate(self.config.broad_phase_margin);
        let attempted = mover.bounds().translated(requested);
        let mover_obb = Obb::new(&attempted, mover.orientation(), self.config.axis_mode);

        let mut worst: Option<Blocker> = None;
        for neighbor in candidates {
            if neighbor.id() == mover.id() || !region.overlaps(neighbor.bounds()) {
                continue;
            }
            let conv = convergence(mover.motion(), neighbor.motion());
            if conv > 0.0 {
                self.converging.insert(neighbor.id(), conv);
            }
            if !self.admits(mover, requested, neighbor, conv) {
                debug!(neighbor = %neighbor.id(), conv, "neighbour filtered out");
                continue;
            }

            let neighbor_obb = Obb::new(
                neighbor.bounds(),
                neighbor.orientation(),
                self.config.axis_mode,
            );
            let hit = intersect_obbs(&mover_obb, &neighbor_obb);
            trace!(neighbor = %neighbor.id(), state = ?hit.state(), overlap = hit.overlap(), "narrow phase");

            let Some(mtv) = hit.mtv() else {
                continue;
            };
            if hit.state() == CollisionState::Touching && !self.config.stall_on_touch {
                continue;
            }
            debug!(neighbor = %neighbor.id(), conv, mtv = %mtv, "neighbour blocks");
            if worst.is_none_or(|w| mtv.length() > w.mtv.length()) {
                worst = Some(Blocker {
                    id: neighbor.id(),
                    state: hit.state(),
                    mtv,
                    resolution: requested + mtv,
                });
            }
        }

        let stalled = worst.is_some();
        let motion = self.tracker.update(stalled, mover.motion());
        TranslationOutcome {
            allowed: if stalled { Vec3::ZERO } else { requested },
            stalled,
            motion,
            blocker: worst,
        }
    }

    /// Checks an attempted rotation by `requested` (added to the mover's
    /// current orientation).
    ///
    /// The rotation sweeps the box through every intermediate pose, all of
    /// which stay inside the cube centred on the box with half-size equal to
    /// its half-diagonal. Admitted when no other candidate overlaps that
    /// cube inflated by the broad-phase margin. Otherwise there is no narrow
    /// phase for rotation, so the call fails with
    /// [`CollisionError::RotationBlockingUnimplemented`] instead of
    /// pretending the rotation was checked.
    pub fn attempt_rotation(
        &self,
        mover: &BodySnapshot,
        requested: Orientation,
        candidates: &[BodySnapshot],
    ) -> Result<RotationOutcome, CollisionError> {
        let footprint = swept_footprint(mover.bounds()).inflate(self.config.broad_phase_margin);
        let nearby = candidates
            .iter()
            .filter(|c| c.id() != mover.id() && footprint.overlaps(c.bounds()))
            .count();
        if nearby > 0 {
            warn!(mover = %mover.id(), nearby, "rotation blocking requested but not implemented");
            return Err(CollisionError::RotationBlockingUnimplemented {
                mover: mover.id(),
                candidates: nearby,
            });
        }
        Ok(RotationOutcome {
            allowed: requested,
            target: mover.orientation() + requested,
            stalled: false,
        })
    }

    fn admits(
        &self,
        mover: &BodySnapshot,
        requested: Vec3,
        neighbor: &BodySnapshot,
        conv: f64,
    ) -> bool {
        match self.config.narrow_phase_filter {
            NarrowPhaseFilter::PositiveConvergence => conv > 0.0,
            NarrowPhaseFilter::Closing => {
                let relative = requested - neighbor.motion();
                let toward = neighbor.bounds().center() - mover.bounds().center();
                relative.dot(&toward) > 0.0
            }
            NarrowPhaseFilter::All => true,
        }
    }
}

// Covers the box under any rotation about its centre.
fn swept_footprint(bounds: &Aabb) -> Aabb {
    let reach = (bounds.max() - bounds.min()).length() * 0.5;
    Aabb::from_center_half_extents(bounds.center(), reach, reach, reach)
}
