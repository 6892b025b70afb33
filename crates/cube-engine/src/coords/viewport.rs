/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, or `1.0` for a degenerate viewport (e.g. minimized window).
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_hd_viewport() {
        let v = Viewport::new(1280.0, 720.0);
        assert!((v.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_is_invalid_and_square() {
        let v = Viewport::new(1280.0, 0.0);
        assert!(!v.is_valid());
        assert_eq!(v.aspect(), 1.0);
    }

    #[test]
    fn non_finite_is_invalid() {
        assert!(!Viewport::new(f32::NAN, 10.0).is_valid());
        assert!(!Viewport::new(10.0, f32::INFINITY).is_valid());
    }
}
