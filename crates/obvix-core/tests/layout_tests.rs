// Host-side tests for procedural cube placement and its memoization.

use glam::Vec3;
use obvix_core::*;

#[test]
fn placement_is_deterministic() {
    let a = orbit_positions(ORBIT_COUNT, ORBIT_RADIUS);
    let b = orbit_positions(ORBIT_COUNT, ORBIT_RADIUS);
    assert_eq!(a, b);
    assert_eq!(a.len(), 8);
}

#[test]
fn every_point_lies_on_the_xz_circle() {
    for p in orbit_positions(ORBIT_COUNT, ORBIT_RADIUS) {
        let r2 = p.x * p.x + p.z * p.z;
        assert!(
            (r2 - ORBIT_RADIUS * ORBIT_RADIUS).abs() < 1e-4,
            "x²+z²={} for {:?}",
            r2,
            p
        );
    }
}

#[test]
fn heights_stay_within_vertical_scale() {
    for p in orbit_positions(ORBIT_COUNT, ORBIT_RADIUS) {
        assert!(p.y.abs() <= ORBIT_VERTICAL_SCALE + 1e-6);
    }
}

#[test]
fn count_matches_request() {
    assert!(orbit_positions(0, ORBIT_RADIUS).is_empty());
    assert_eq!(orbit_positions(1, ORBIT_RADIUS), vec![Vec3::new(ORBIT_RADIUS, 0.0, 0.0)]);
    assert_eq!(orbit_positions(100, ORBIT_RADIUS).len(), 100);
}

#[test]
fn quarter_turn_matches_closed_form() {
    // i = 2 of 8 is a quarter turn: a = π/2
    let p = orbit_positions(8, 3.2)[2];
    let expected_y = (std::f32::consts::FRAC_PI_2 * 1.2).sin() * 0.6;
    assert!(p.x.abs() < 1e-5);
    assert!((p.y - expected_y).abs() < 1e-6);
    assert!((p.z - 3.2).abs() < 1e-5);
}

#[test]
fn layout_computes_once_for_same_params() {
    let mut layout = OrbitLayout::new();
    let params = LayoutParams::default();
    let first = layout.positions(params).to_vec();
    for _ in 0..60 {
        assert_eq!(layout.positions(params), first.as_slice());
    }
    assert_eq!(layout.computations(), 1);
}

#[test]
fn layout_recomputes_when_params_change() {
    let mut layout = OrbitLayout::new();
    layout.positions(LayoutParams::default());
    let bigger = LayoutParams {
        count: 12,
        radius: 4.0,
    };
    assert_eq!(layout.positions(bigger).len(), 12);
    assert_eq!(layout.computations(), 2);
    layout.positions(bigger);
    assert_eq!(layout.computations(), 2);
    layout.invalidate();
    layout.positions(bigger);
    assert_eq!(layout.computations(), 3);
}

#[test]
fn group_rotation_preserves_radius() {
    let q = orbit_group_rotation(7.3);
    for p in orbit_positions(ORBIT_COUNT, ORBIT_RADIUS) {
        assert!(((q * p).length() - p.length()).abs() < 1e-4);
    }
}

#[test]
fn starfield_is_reproducible_from_its_seed() {
    let a = star_points(STAR_SEED, STAR_COUNT, STAR_RADIUS, STAR_DEPTH);
    let b = star_points(STAR_SEED, STAR_COUNT, STAR_RADIUS, STAR_DEPTH);
    assert_eq!(a, b);
    let other = star_points(STAR_SEED + 1, STAR_COUNT, STAR_RADIUS, STAR_DEPTH);
    assert_ne!(a, other);
}

#[test]
fn starfield_has_requested_count() {
    for n in [0, 1, 2200] {
        assert_eq!(star_points(7, n, STAR_RADIUS, STAR_DEPTH).len(), n);
    }
}

#[test]
fn every_star_lies_inside_the_shell() {
    for p in star_points(STAR_SEED, STAR_COUNT, STAR_RADIUS, STAR_DEPTH) {
        let d = p.length();
        assert!(
            d >= STAR_RADIUS - 1e-3 && d <= STAR_RADIUS + STAR_DEPTH + 1e-3,
            "star at distance {} outside [{}, {}]",
            d,
            STAR_RADIUS,
            STAR_RADIUS + STAR_DEPTH
        );
    }
}

#[test]
fn oversized_grid_is_empty_instead_of_overflowing() {
    assert!(grid_points(f32::INFINITY, 0.5, GROUND_Y).is_empty());
    assert!(grid_points(1.0e5, 0.5, GROUND_Y).is_empty());
    assert!(grid_points((GRID_MAX_STEPS + 1) as f32, 1.0, GROUND_Y).is_empty());
    assert_eq!(grid_points(10.0, 1.0, GROUND_Y).len(), 21 * 21);
}
