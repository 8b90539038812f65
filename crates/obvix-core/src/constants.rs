use glam::Vec3;

// Shared scene and interaction tuning constants used by the web frontend.

// Orbiting cubes
pub const ORBIT_COUNT: usize = 8;
pub const ORBIT_RADIUS: f32 = 3.2;
pub const ORBIT_VERTICAL_FREQ: f32 = 1.2; // breaks the flat ring
pub const ORBIT_VERTICAL_SCALE: f32 = 0.6;
pub const ORBIT_SPIN_Y_PER_SEC: f32 = 0.3;
pub const ORBIT_WOBBLE_X_FREQ: f32 = 0.2;
pub const ORBIT_WOBBLE_X_AMP: f32 = 0.1;
pub const CUBE_SIZE: f32 = 0.35;
pub const CUBE_COLOR: [f32; 3] = [0.655, 0.545, 0.980]; // #a78bfa
pub const CUBE_EMISSIVE: [f32; 3] = [0.427, 0.157, 0.851]; // #6d28d9
pub const CUBE_EMISSIVE_INTENSITY: f32 = 0.4;

// Neon rings
pub const RING_RADII: [f32; 3] = [1.8, 2.3, 2.8];
pub const RING_TUBE: f32 = 0.03;
pub const RING_SPIN_Z_PER_SEC: f32 = 0.15;
pub const RING_EMISSIVE_BASE: f32 = 0.9;
pub const RING_EMISSIVE_STEP: f32 = 0.2; // dimmer per outer ring
pub const RING_SEGMENTS: usize = 96;
pub const RING_COLOR: [f32; 3] = [0.545, 0.361, 0.965]; // #8b5cf6

// Ground grid
pub const GROUND_Y: f32 = -1.6;
pub const GRID_EXTENT: f32 = 12.0; // half-width of the dotted floor
pub const GRID_SPACING: f32 = 0.5;
pub const GRID_DOT_SCALE: f32 = 0.04;
pub const GRID_COLOR: [f32; 3] = [0.427, 0.157, 0.851]; // #6d28d9
pub const GRID_EMISSIVE: f32 = 0.15;
pub const GRID_MAX_STEPS: usize = 1024; // per side of the origin

// Starfield
pub const STAR_SEED: u64 = 0x5eed_57a2;
pub const STAR_COUNT: usize = 2200;
pub const STAR_RADIUS: f32 = 70.0; // inner edge of the shell
pub const STAR_DEPTH: f32 = 40.0; // shell thickness
pub const STAR_SCALE: f32 = 0.4;
pub const STAR_COLOR: [f32; 3] = [1.0, 1.0, 1.0]; // unsaturated
pub const STAR_EMISSIVE: f32 = 0.4;

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 6.0);
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Parallax
pub const PARALLAX_GAIN_X: f32 = 0.8;
pub const PARALLAX_GAIN_Y: f32 = 0.5;
pub const PARALLAX_SMOOTHING: f32 = 0.05; // per reference frame
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;

// Shine
pub const SHINE_RADIUS_PX: u32 = 600;
pub const SHINE_RGBA: &str = "rgba(167,139,250,0.18)";
pub const SHINE_FADE_PCT: u32 = 40;

// Waitlist
pub const EMAIL_MAX_LEN: usize = 254;

/// Time constant (seconds) that makes frame-time scaled smoothing match the
/// fixed per-frame factor at the reference frame interval.
#[inline]
pub fn parallax_tau_sec() -> f32 {
    -REFERENCE_FRAME_SEC / (1.0 - PARALLAX_SMOOTHING).ln()
}
