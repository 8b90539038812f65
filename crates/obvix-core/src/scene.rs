//! Per-frame composition of the hero scene.
//!
//! [`SceneState`] is what the render loop ticks. It owns the camera pose and
//! the memoized cube layout, feeds the latest pointer sample through the
//! parallax rig, and flattens everything into world-space instances the
//! renderer can upload as-is.

use crate::constants::*;
use crate::layout::{self, LayoutParams, OrbitLayout, RingSpec};
use crate::parallax::{CameraPose, ParallaxParams, ParallaxRig};
use crate::pointer::PointerSample;
use glam::{Mat4, Vec2, Vec3};

/// A single renderable marker in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerInstance {
    pub position: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
    pub emissive: f32,
}

/// Everything the renderer needs for one frame. The static backdrop (stars
/// and floor grid) is borrowed from the scene; only the moving parts are
/// rebuilt per tick.
#[derive(Clone, Debug)]
pub struct FrameSnapshot<'a> {
    pub elapsed_sec: f32,
    pub camera: CameraPose,
    pub stars: &'a [MarkerInstance],
    pub grid: &'a [MarkerInstance],
    pub rings: Vec<MarkerInstance>,
    pub cubes: Vec<MarkerInstance>,
}

impl FrameSnapshot<'_> {
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.camera.view_proj(aspect)
    }

    /// Draw order: stars, floor, rings, cubes.
    pub fn instances(&self) -> impl Iterator<Item = &MarkerInstance> {
        self.stars
            .iter()
            .chain(self.grid.iter())
            .chain(self.rings.iter())
            .chain(self.cubes.iter())
    }

    pub fn instance_count(&self) -> usize {
        self.stars.len() + self.grid.len() + self.rings.len() + self.cubes.len()
    }
}

pub struct SceneState {
    pub layout_params: LayoutParams,
    pub camera: CameraPose,
    rig: ParallaxRig,
    layout: OrbitLayout,
    rings: Vec<RingSpec>,
    ring_local: Vec<Vec<Vec3>>,
    grid: Vec<MarkerInstance>,
    stars: Vec<MarkerInstance>,
    pointer: PointerSample,
    elapsed_sec: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(LayoutParams::default(), ParallaxParams::default())
    }
}

impl SceneState {
    pub fn new(layout_params: LayoutParams, parallax: ParallaxParams) -> Self {
        let rings = layout::ring_specs();
        let ring_local = rings
            .iter()
            .map(|r| layout::ring_points(r.radius, RING_SEGMENTS))
            .collect();
        let grid = layout::grid_points(GRID_EXTENT, GRID_SPACING, GROUND_Y)
            .into_iter()
            .map(|position| MarkerInstance {
                position,
                scale: GRID_DOT_SCALE,
                color: GRID_COLOR,
                emissive: GRID_EMISSIVE,
            })
            .collect();
        let stars = layout::star_points(STAR_SEED, STAR_COUNT, STAR_RADIUS, STAR_DEPTH)
            .into_iter()
            .map(|position| MarkerInstance {
                position,
                scale: STAR_SCALE,
                color: STAR_COLOR,
                emissive: STAR_EMISSIVE,
            })
            .collect();
        Self {
            layout_params,
            camera: CameraPose::default(),
            rig: ParallaxRig::new(parallax),
            layout: OrbitLayout::new(),
            rings,
            ring_local,
            grid,
            stars,
            pointer: PointerSample::default(),
            elapsed_sec: 0.0,
        }
    }

    /// Feed a raw normalized pointer position. Returns whether it was kept.
    pub fn set_pointer(&mut self, ndc: Vec2) -> bool {
        self.pointer.sanitize(ndc)
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    /// How many times the cube placement has been computed so far.
    pub fn layout_computations(&self) -> usize {
        self.layout.computations()
    }

    /// Advance the scene by `dt_sec` and build this frame's instances.
    pub fn tick(&mut self, dt_sec: f32) -> FrameSnapshot<'_> {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.elapsed_sec += dt;
        let t = self.elapsed_sec;

        self.rig.update(&mut self.camera, &self.pointer, dt);

        let cube_rot = layout::orbit_group_rotation(t);
        let cubes = self
            .layout
            .positions(self.layout_params)
            .iter()
            .map(|p| MarkerInstance {
                position: cube_rot * *p,
                scale: CUBE_SIZE,
                color: CUBE_COLOR,
                emissive: CUBE_EMISSIVE_INTENSITY,
            })
            .collect();

        let ring_rot = layout::ring_group_rotation(t);
        let mut rings = Vec::with_capacity(self.rings.len() * RING_SEGMENTS);
        for (ring, points) in self.rings.iter().zip(&self.ring_local) {
            rings.extend(points.iter().map(|p| MarkerInstance {
                position: ring_rot * *p,
                scale: ring.tube * 2.0,
                color: RING_COLOR,
                emissive: ring.emissive,
            }));
        }

        FrameSnapshot {
            elapsed_sec: t,
            camera: self.camera.clone(),
            stars: &self.stars,
            grid: &self.grid,
            rings,
            cubes,
        }
    }
}
