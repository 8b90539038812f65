use crate::constants::{SHINE_FADE_PCT, SHINE_RADIUS_PX, SHINE_RGBA};
use crate::pointer::ElementRect;
use glam::Vec2;

/// Pointer offset from the element's top-left corner, in CSS pixels.
///
/// Not clamped: events bubbling up from children may land outside the
/// element, and the container clips the gradient anyway.
#[inline]
pub fn local_offset(client: Vec2, rect: &ElementRect) -> Vec2 {
    client - rect.top_left()
}

/// Follows the cursor across a tilt card and remembers where it left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShineTracker {
    local: Vec2,
}

impl ShineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the pointer position relative to `rect`. Non-finite input is
    /// ignored.
    pub fn on_move(&mut self, client: Vec2, rect: &ElementRect) -> Vec2 {
        let local = local_offset(client, rect);
        if local.is_finite() {
            self.local = local;
        }
        self.local
    }

    /// The shine stays where the cursor left it.
    #[inline]
    pub fn on_leave(&mut self) {}

    #[inline]
    pub fn local(&self) -> Vec2 {
        self.local
    }

    /// Background value for the shine layer; only the X offset moves it.
    pub fn gradient_css(&self) -> String {
        shine_gradient(self.local.x)
    }
}

pub fn shine_gradient(local_x: f32) -> String {
    format!(
        "radial-gradient({SHINE_RADIUS_PX}px circle at {local_x}px 50%, {SHINE_RGBA}, transparent {SHINE_FADE_PCT}%)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_uses_integer_pixels_when_whole() {
        assert_eq!(
            shine_gradient(70.0),
            "radial-gradient(600px circle at 70px 50%, rgba(167,139,250,0.18), transparent 40%)"
        );
    }

    #[test]
    fn fresh_tracker_starts_at_origin() {
        let t = ShineTracker::new();
        assert_eq!(t.local(), Vec2::ZERO);
        assert!(t.gradient_css().contains("at 0px 50%"));
    }

    #[test]
    fn nan_move_keeps_last_value() {
        let rect = ElementRect::new(0.0, 0.0, 100.0, 100.0);
        let mut t = ShineTracker::new();
        t.on_move(Vec2::new(12.0, 4.0), &rect);
        t.on_move(Vec2::new(f32::NAN, 4.0), &rect);
        assert_eq!(t.local(), Vec2::new(12.0, 4.0));
    }
}
