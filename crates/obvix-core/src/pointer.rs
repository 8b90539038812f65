use glam::Vec2;

/// Axis-aligned client-space rectangle of a DOM element, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Map client pixel coordinates to normalized device coordinates over `rect`:
/// x grows right, y grows up, both spanning [-1, 1] across the element.
///
/// Returns `None` for an empty rect, non-finite input, or a point outside
/// the element, so a pointer elsewhere on the page leaves the last sample
/// in place.
#[inline]
pub fn ndc_from_client(client: Vec2, rect: &ElementRect) -> Option<Vec2> {
    if !(rect.width > 0.0 && rect.height > 0.0) || !client.is_finite() {
        return None;
    }
    let x = (client.x - rect.left) / rect.width * 2.0 - 1.0;
    let y = -((client.y - rect.top) / rect.height) * 2.0 + 1.0;
    let ndc = Vec2::new(x, y);
    if ndc.abs().max_element() > 1.0 {
        return None;
    }
    Some(ndc)
}

/// Latest normalized pointer position consumed by the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub ndc: Vec2,
}

impl PointerSample {
    /// Accept a new raw sample. Non-finite input is dropped (the previous
    /// sample stays); accepted samples are clamped to [-1, 1].
    ///
    /// Returns whether the sample was accepted.
    pub fn sanitize(&mut self, raw: Vec2) -> bool {
        if !raw.is_finite() {
            log::debug!("[pointer] dropped non-finite sample {:?}", raw);
            return false;
        }
        self.ndc = raw.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let rect = ElementRect::new(0.0, 0.0, 200.0, 100.0);
        let ndc = ndc_from_client(Vec2::new(100.0, 50.0), &rect).unwrap();
        assert!(ndc.length() < 1e-6);
    }

    #[test]
    fn corners_follow_y_up_convention() {
        let rect = ElementRect::new(10.0, 20.0, 200.0, 100.0);
        let tl = ndc_from_client(Vec2::new(10.0, 20.0), &rect).unwrap();
        assert_eq!(tl, Vec2::new(-1.0, 1.0));
        let br = ndc_from_client(Vec2::new(210.0, 120.0), &rect).unwrap();
        assert_eq!(br, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn empty_rect_or_nan_is_rejected() {
        let empty = ElementRect::new(0.0, 0.0, 0.0, 100.0);
        assert!(ndc_from_client(Vec2::new(1.0, 1.0), &empty).is_none());
        let rect = ElementRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(ndc_from_client(Vec2::new(f32::NAN, 1.0), &rect).is_none());
    }

    #[test]
    fn points_outside_the_element_are_dropped() {
        let rect = ElementRect::new(0.0, 0.0, 1000.0, 800.0);
        assert!(ndc_from_client(Vec2::new(500.0, 3000.0), &rect).is_none());
        assert!(ndc_from_client(Vec2::new(-1.0, 400.0), &rect).is_none());
        assert!(ndc_from_client(Vec2::new(1000.0, 800.0), &rect).is_some());
    }

    #[test]
    fn sanitize_keeps_previous_on_nan_and_clamps() {
        let mut s = PointerSample::default();
        assert!(s.sanitize(Vec2::new(0.25, -0.5)));
        assert!(!s.sanitize(Vec2::new(f32::NAN, 0.0)));
        assert_eq!(s.ndc, Vec2::new(0.25, -0.5));
        assert!(!s.sanitize(Vec2::new(f32::INFINITY, 0.0)));
        assert!(s.sanitize(Vec2::new(3.0, -7.0)));
        assert_eq!(s.ndc, Vec2::new(1.0, -1.0));
    }
}
