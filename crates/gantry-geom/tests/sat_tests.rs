// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_4, SQRT_2};

use gantry_core::math::Vec3;
use gantry_geom::sat::{candidate_axes, separation_on_axis, AXIS_COUNT};
use gantry_geom::{
    intersect, intersect_obbs, Aabb, AxisMode, CollisionState, Obb, Orientation,
    SeparationResult,
};

fn cube(center: Vec3, half: f64) -> Aabb {
    Aabb::from_center_half_extents(center, half, half, half)
}

fn aligned(a: &Aabb, b: &Aabb) -> gantry_geom::Intersection {
    intersect(
        a,
        Orientation::IDENTITY,
        b,
        Orientation::IDENTITY,
        AxisMode::WorldAligned,
    )
}

#[test]
fn collision_state_orders_by_severity() {
    assert!(CollisionState::NotIntersecting < CollisionState::Touching);
    assert!(CollisionState::Touching < CollisionState::Intersecting);
}

#[test]
fn disjoint_boxes_are_separated_along_x() {
    let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
    let hit = aligned(&a, &b);
    assert_eq!(hit.state(), CollisionState::NotIntersecting);
    assert_eq!(hit.overlap_axis(), Some(Vec3::UNIT_X));
    assert!(hit.analysis().separates());
    assert!(hit.is_separated());
    assert_eq!(hit.mtv(), None);
}

#[test]
fn half_overlapping_unit_boxes() {
    let a = cube(Vec3::ZERO, 0.5);
    let b = cube(Vec3::new(0.5, 0.0, 0.0), 0.5);
    let hit = aligned(&a, &b);
    assert_eq!(hit.state(), CollisionState::Intersecting);
    assert!((hit.overlap() - 0.5).abs() < 1e-9);
    assert_eq!(hit.overlap_axis(), Some(Vec3::UNIT_X));
    // B sits on +x, so A is pushed toward -x.
    assert_eq!(hit.mtv(), Some(Vec3::new(-0.5, 0.0, 0.0)));
}

#[test]
fn mtv_points_away_from_the_other_box() {
    let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Vec3::new(-0.75, 0.0, 0.0), Vec3::new(0.25, 1.0, 1.0));
    let hit = aligned(&a, &b);
    assert_eq!(hit.state(), CollisionState::Intersecting);
    assert_eq!(hit.mtv(), Some(Vec3::new(0.25, 0.0, 0.0)));
}

#[test]
fn shared_face_is_touching_with_zero_mtv() {
    let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    let hit = aligned(&a, &b);
    assert_eq!(hit.state(), CollisionState::Touching);
    assert!(hit.overlap().abs() < 1e-12);
    assert_eq!(hit.mtv(), Some(Vec3::ZERO));
    assert!(!hit.is_separated());
}

#[test]
fn parallel_edges_give_degenerate_cross_axes() {
    let a = Obb::new(&cube(Vec3::ZERO, 0.5), Orientation::IDENTITY, AxisMode::WorldAligned);
    let b = Obb::new(&cube(Vec3::UNIT_X, 0.5), Orientation::IDENTITY, AxisMode::WorldAligned);
    let axes = candidate_axes(&a, &b);
    assert_eq!(axes.len(), AXIS_COUNT);
    assert!(axes[..6].iter().all(Option::is_some));
    // X×X, Y×Y, and F×F sit on the diagonal of the 3×3 cross block.
    assert_eq!(axes[6], None);
    assert_eq!(axes[10], None);
    assert_eq!(axes[14], None);
    assert_eq!(axes.iter().filter(|a| a.is_none()).count(), 3);
    for axis in axes.iter().flatten() {
        assert!((axis.length() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn degenerate_axis_never_separates() {
    let a = Obb::new(&cube(Vec3::ZERO, 0.5), Orientation::IDENTITY, AxisMode::WorldAligned);
    let result = separation_on_axis(None, &a, &a);
    assert_eq!(result, SeparationResult::degenerate());
    assert_eq!(result.state(), CollisionState::NotIntersecting);
    assert!(!result.separates());
    // Identical boxes overlap despite three degenerate crosses.
    let hit = intersect_obbs(&a, &a);
    assert_eq!(hit.state(), CollisionState::Intersecting);
}

#[test]
fn per_axis_classification() {
    let a = Obb::new(&cube(Vec3::ZERO, 0.5), Orientation::IDENTITY, AxisMode::WorldAligned);
    let near = Obb::new(&cube(Vec3::new(0.75, 0.0, 0.0), 0.5), Orientation::IDENTITY, AxisMode::WorldAligned);
    let far = Obb::new(&cube(Vec3::new(3.0, 0.0, 0.0), 0.5), Orientation::IDENTITY, AxisMode::WorldAligned);

    let overlap = separation_on_axis(Some(Vec3::UNIT_X), &a, &near);
    assert_eq!(overlap.state(), CollisionState::Intersecting);
    assert!((overlap.overlap() - 0.25).abs() < 1e-12);

    let gap = separation_on_axis(Some(Vec3::UNIT_X), &a, &far);
    assert_eq!(gap.state(), CollisionState::NotIntersecting);
    assert!(gap.separates());

    // Orthogonal axis: both project to the same interval.
    let side = separation_on_axis(Some(Vec3::UNIT_Y), &a, &far);
    assert_eq!(side.state(), CollisionState::Intersecting);
    assert!((side.overlap() - 1.0).abs() < 1e-12);
}

#[test]
fn rotated_axes_separate_diagonal_neighbours() {
    // Two unit cubes yawed 45° form diamonds in the xz-plane whose
    // projections onto the world axes overlap, while the boxes do not.
    let pose = Orientation::new(0.0, FRAC_PI_4, 0.0);
    let a = cube(Vec3::ZERO, 0.5);
    let b = cube(Vec3::new(1.0, 0.0, 1.0), 0.5);

    let world = intersect(&a, pose, &b, pose, AxisMode::WorldAligned);
    assert_eq!(world.state(), CollisionState::Intersecting);
    assert!((world.overlap() - (SQRT_2 - 1.0)).abs() < 1e-9);

    let rotated = intersect(&a, pose, &b, pose, AxisMode::Rotated);
    assert_eq!(rotated.state(), CollisionState::NotIntersecting);
    assert!(rotated.is_separated());
}

#[test]
fn axis_modes_agree_for_unrotated_boxes() {
    let a = cube(Vec3::ZERO, 0.5);
    for center in [
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(0.9, 0.9, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.3, -0.2, 0.6),
    ] {
        let b = cube(center, 0.5);
        let world = intersect(&a, Orientation::IDENTITY, &b, Orientation::IDENTITY, AxisMode::WorldAligned);
        let rotated = intersect(&a, Orientation::IDENTITY, &b, Orientation::IDENTITY, AxisMode::Rotated);
        assert_eq!(world, rotated, "center {center}");
    }
}

#[test]
fn rotated_box_overlapping_at_center_reports_mtv() {
    let a = cube(Vec3::ZERO, 0.5);
    let b = cube(Vec3::new(0.2, 0.1, 0.0), 0.5);
    let hit = intersect(
        &a,
        Orientation::new(0.3, 0.6, -0.2),
        &b,
        Orientation::IDENTITY,
        AxisMode::Rotated,
    );
    assert_eq!(hit.state(), CollisionState::Intersecting);
    let mtv = hit.mtv().unwrap_or(Vec3::ZERO);
    assert!(mtv.length() > 0.0);
    assert!((mtv.length() - hit.overlap()).abs() < 1e-9);
}

#[test]
fn contained_interval_uses_shortest_escape() {
    // B sits inside A's x-span; escaping along x would take 2.25, along y 0.75.
    let a = Aabb::from_center_half_extents(Vec3::ZERO, 5.0, 0.5, 0.5);
    let b = cube(Vec3::new(3.0, 0.0, 0.0), 0.25);
    let hit = aligned(&a, &b);
    assert_eq!(hit.state(), CollisionState::Intersecting);
    assert!((hit.overlap() - 0.75).abs() < 1e-12);
    let mtv = hit.mtv().unwrap_or(Vec3::ZERO);
    assert_eq!(mtv, Vec3::new(0.0, -0.75, 0.0));

    let resolved = aligned(&a.translated(mtv), &b);
    assert_eq!(resolved.state(), CollisionState::Touching);
}
