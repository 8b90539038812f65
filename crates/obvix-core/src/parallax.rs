//! Camera pose and the pointer-driven parallax rig.
//!
//! The pose is a plain owned value; the rig mutates it only through
//! [`ParallaxRig::update`], called once per rendered frame.

use crate::constants::*;
use crate::pointer::PointerSample;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera that always looks at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: CAMERA_START,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl CameraPose {
    /// Point the camera at `target`.
    #[inline]
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit view direction. Zero when eye and target coincide.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// How the per-frame blend factor toward the parallax target is derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// Fixed factor per rendered frame, regardless of frame time.
    PerFrame(f32),
    /// `1 - exp(-dt / tau)`: the same visual speed at any refresh rate.
    TimeScaled { tau_sec: f32 },
}

impl Smoothing {
    /// Blend factor for a frame of `dt_sec`, always within [0, 1].
    #[inline]
    pub fn factor(&self, dt_sec: f32) -> f32 {
        let k = match *self {
            Smoothing::PerFrame(k) => k,
            Smoothing::TimeScaled { tau_sec } => {
                if tau_sec <= 0.0 {
                    1.0
                } else {
                    1.0 - (-dt_sec.max(0.0) / tau_sec).exp()
                }
            }
        };
        if k.is_finite() {
            k.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    pub gain: Vec2,
    pub smoothing: Smoothing,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            gain: Vec2::new(PARALLAX_GAIN_X, PARALLAX_GAIN_Y),
            smoothing: Smoothing::TimeScaled {
                tau_sec: parallax_tau_sec(),
            },
        }
    }
}

impl ParallaxParams {
    /// Fixed 0.05-per-frame blending, independent of frame time.
    pub fn per_frame() -> Self {
        Self {
            smoothing: Smoothing::PerFrame(PARALLAX_SMOOTHING),
            ..Self::default()
        }
    }
}

/// Eases the camera toward a pointer-derived offset and keeps it aimed at the
/// world origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxRig {
    pub params: ParallaxParams,
}

impl ParallaxRig {
    pub fn new(params: ParallaxParams) -> Self {
        Self { params }
    }

    /// Camera-space XY offset the rig is easing toward for `pointer`.
    #[inline]
    pub fn target_for(&self, pointer: &PointerSample) -> Vec2 {
        pointer.ndc * self.params.gain
    }

    pub fn update(&self, pose: &mut CameraPose, pointer: &PointerSample, dt_sec: f32) {
        let target = self.target_for(pointer);
        let k = self.params.smoothing.factor(dt_sec);
        pose.eye.x += (target.x - pose.eye.x) * k;
        pose.eye.y += (target.y - pose.eye.y) * k;
        pose.look_at(Vec3::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scaled_matches_fixed_factor_at_reference_rate() {
        let k = ParallaxParams::default()
            .smoothing
            .factor(REFERENCE_FRAME_SEC);
        assert!((k - PARALLAX_SMOOTHING).abs() < 1e-5, "k={k}");
    }

    #[test]
    fn factor_is_clamped() {
        assert_eq!(Smoothing::PerFrame(1.7).factor(0.016), 1.0);
        assert_eq!(Smoothing::PerFrame(-0.3).factor(0.016), 0.0);
        assert_eq!(Smoothing::PerFrame(f32::NAN).factor(0.016), 0.0);
        assert_eq!(Smoothing::TimeScaled { tau_sec: 0.0 }.factor(0.016), 1.0);
        assert_eq!(Smoothing::TimeScaled { tau_sec: 0.3 }.factor(-1.0), 0.0);
    }

    #[test]
    fn update_leaves_depth_untouched() {
        let rig = ParallaxRig::new(ParallaxParams::per_frame());
        let mut pose = CameraPose::default();
        let pointer = PointerSample {
            ndc: Vec2::new(1.0, 1.0),
        };
        rig.update(&mut pose, &pointer, REFERENCE_FRAME_SEC);
        assert_eq!(pose.eye.z, CAMERA_START.z);
        assert!((pose.eye.x - 0.04).abs() < 1e-6);
        assert!((pose.eye.y - 0.025).abs() < 1e-6);
    }
}
