//! Procedural placement of the decorative hero objects.
//!
//! Cube positions are a closed-form function of an index, a count and a
//! radius. They never change while the scene is mounted, so [`OrbitLayout`]
//! computes them once and hands out the cached slice on every frame.

use crate::constants::*;
use glam::{EulerRot, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Inputs of the orbit placement formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub count: usize,
    pub radius: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            count: ORBIT_COUNT,
            radius: ORBIT_RADIUS,
        }
    }
}

/// Place `count` points on a slightly warped circle of `radius` in the XZ plane.
///
/// Point `i` sits at angle `a = i / count * 2π`; its height follows
/// `sin(1.2 a) * 0.6` so the ring does not read as flat.
pub fn orbit_positions(count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let a = (i as f32 / count as f32) * TAU;
            Vec3::new(
                a.cos() * radius,
                (a * ORBIT_VERTICAL_FREQ).sin() * ORBIT_VERTICAL_SCALE,
                a.sin() * radius,
            )
        })
        .collect()
}

/// Memoized orbit placement. Recomputes only when [`LayoutParams`] change.
#[derive(Debug, Default)]
pub struct OrbitLayout {
    cached: Option<(LayoutParams, Vec<Vec3>)>,
    computations: usize,
}

impl OrbitLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&mut self, params: LayoutParams) -> &[Vec3] {
        let stale = match &self.cached {
            Some((p, _)) => *p != params,
            None => true,
        };
        if stale {
            self.computations += 1;
            log::debug!(
                "[layout] computing {} positions at r={:.2}",
                params.count,
                params.radius
            );
            self.cached = Some((params, orbit_positions(params.count, params.radius)));
        }
        match &self.cached {
            Some((_, positions)) => positions.as_slice(),
            None => &[],
        }
    }

    /// Drop the cache; the next call to [`OrbitLayout::positions`] recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Number of times the placement formula actually ran.
    pub fn computations(&self) -> usize {
        self.computations
    }
}

/// Rotation of the cube group after `t` seconds: steady spin about Y plus a
/// slow wobble about X.
#[inline]
pub fn orbit_group_rotation(t: f32) -> Quat {
    let ry = t * ORBIT_SPIN_Y_PER_SEC;
    let rx = (t * ORBIT_WOBBLE_X_FREQ).sin() * ORBIT_WOBBLE_X_AMP;
    // XYZ intrinsic order, as the scene graph applies Euler angles.
    Quat::from_euler(EulerRot::XYZ, rx, ry, 0.0)
}

/// One of the flat neon rings around the cubes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub radius: f32,
    pub tube: f32,
    pub emissive: f32,
}

pub fn ring_specs() -> Vec<RingSpec> {
    RING_RADII
        .iter()
        .enumerate()
        .map(|(i, &radius)| RingSpec {
            radius,
            tube: RING_TUBE,
            emissive: RING_EMISSIVE_BASE - i as f32 * RING_EMISSIVE_STEP,
        })
        .collect()
}

/// Rotation of the ring group after `t` seconds. Rings are laid flat first
/// (π/2 about X), then the whole group spins about Z.
#[inline]
pub fn ring_group_rotation(t: f32) -> Quat {
    Quat::from_rotation_z(t * RING_SPIN_Z_PER_SEC) * Quat::from_rotation_x(FRAC_PI_2)
}

/// Evenly spaced sample points along a ring of `radius` in its local XY plane.
pub fn ring_points(radius: f32, segments: usize) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let a = (i as f32 / segments as f32) * TAU;
            Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
        })
        .collect()
}

/// Square lattice of floor points at height `y`, `extent` out from the origin
/// on X and Z.
///
/// Degenerate input (non-positive spacing, negative or non-finite extent, or
/// more than [`GRID_MAX_STEPS`] steps per side) yields an empty lattice.
pub fn grid_points(extent: f32, spacing: f32, y: f32) -> Vec<Vec3> {
    if !(spacing > 0.0) || !(extent >= 0.0) {
        return Vec::new();
    }
    let steps = (extent / spacing).floor();
    if !(steps <= GRID_MAX_STEPS as f32) {
        log::warn!(
            "[layout] grid of extent {} at spacing {} is too dense; skipping",
            extent,
            spacing
        );
        return Vec::new();
    }
    let steps = steps as usize;
    let side = 2 * steps + 1;
    let mut points = Vec::with_capacity(side * side);
    for iz in 0..side {
        for ix in 0..side {
            points.push(Vec3::new(
                (ix as f32 - steps as f32) * spacing,
                y,
                (iz as f32 - steps as f32) * spacing,
            ));
        }
    }
    points
}

/// Seeded background starfield: `count` points scattered over the spherical
/// shell between `radius` and `radius + depth`.
///
/// Directions are uniform on the sphere. The distance starts at the outer
/// edge and steps inward by a random fraction of `depth / count` per star,
/// so the whole field stays inside the shell. The same seed always gives the
/// same field.
pub fn star_points(seed: u64, count: usize, radius: f32, depth: f32) -> Vec<Vec3> {
    if count == 0 || !radius.is_finite() || !depth.is_finite() {
        return Vec::new();
    }
    let depth = depth.max(0.0);
    let step = depth / count as f32;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut r = radius + depth;
    (0..count)
        .map(|_| {
            r = (r - step * rng.gen::<f32>()).max(radius);
            let polar = (1.0 - 2.0 * rng.gen::<f32>()).acos();
            let azimuth = rng.gen::<f32>() * TAU;
            Vec3::new(
                r * polar.sin() * azimuth.sin(),
                r * polar.cos(),
                r * polar.sin() * azimuth.cos(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_point_sits_on_positive_x() {
        let p = orbit_positions(8, 3.2);
        assert!((p[0] - Vec3::new(3.2, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn grid_is_square_and_on_the_floor() {
        let g = grid_points(1.0, 0.5, GROUND_Y);
        assert_eq!(g.len(), 25);
        assert!(g.iter().all(|p| p.y == GROUND_Y));
        assert!(grid_points(1.0, 0.0, GROUND_Y).is_empty());
    }

    #[test]
    fn grid_rejects_unbounded_extent() {
        assert!(grid_points(f32::INFINITY, 0.5, 0.0).is_empty());
        assert!(grid_points(f32::NAN, 0.5, 0.0).is_empty());
        assert!(grid_points(1.0e5, 0.5, 0.0).is_empty());
    }

    #[test]
    fn star_shell_clamps_negative_depth() {
        let stars = star_points(3, 50, 10.0, -5.0);
        assert_eq!(stars.len(), 50);
        assert!(stars.iter().all(|p| (p.length() - 10.0).abs() < 1e-3));
    }

    #[test]
    fn ring_emissive_dims_outward() {
        let rings = ring_specs();
        assert_eq!(rings.len(), 3);
        assert!((rings[0].emissive - 0.9).abs() < 1e-6);
        assert!((rings[2].emissive - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rings_lie_flat_at_time_zero() {
        let q = ring_group_rotation(0.0);
        let p = q * Vec3::new(2.3, 0.0, 0.0);
        assert!(p.y.abs() < 1e-6);
        let p = q * Vec3::new(0.0, 2.3, 0.0);
        assert!(p.y.abs() < 1e-5);
        assert!((p.length() - 2.3).abs() < 1e-5);
    }
}
