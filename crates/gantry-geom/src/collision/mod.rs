// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-mover collision decisions.
//!
//! The manager is a veto: it either admits the requested motion unchanged
//! or stalls the mover. It never computes partial motion or contact
//! response.

#[doc = "The per-mover collision manager."]
pub mod manager;
#[doc = "Free/stalled state machine with motion caching."]
pub mod stall;
