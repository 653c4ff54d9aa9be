//! Mapping between the fixed game viewport and the window surface.
//!
//! The viewport is scaled uniformly and centered; leftover space becomes
//! letterbox bars. Scales of 1 and up snap to whole numbers so pixel art
//! stays crisp. Surface sizes are in logical units (egui points).

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFit {
    pub viewport: Vec2,
    pub scale: f32,
    /// Top-left corner of the game area on the surface.
    pub origin: Vec2,
}

impl ScreenFit {
    pub fn new(viewport: Vec2, surface: Vec2) -> Self {
        if viewport.x <= 0.0 || viewport.y <= 0.0 || surface.x <= 0.0 || surface.y <= 0.0 {
            return Self {
                viewport,
                scale: 1.0,
                origin: Vec2::ZERO,
            };
        }

        let raw = (surface.x / viewport.x).min(surface.y / viewport.y);
        let scale = if raw >= 1.0 { raw.floor() } else { raw };
        let origin = ((surface - viewport * scale) * 0.5).floor();
        Self {
            viewport,
            scale,
            origin,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.viewport * self.scale
    }

    /// Viewport position to surface position.
    pub fn to_screen(&self, position: Vec2) -> Vec2 {
        self.origin + position * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_fills_surface() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(960.0, 720.0));
        assert_eq!(fit.scale, 3.0);
        assert_eq!(fit.origin, Vec2::ZERO);
        assert_eq!(fit.size(), Vec2::new(960.0, 720.0));
    }

    #[test]
    fn wide_surface_gets_side_bars() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(1280.0, 720.0));
        assert_eq!(fit.scale, 3.0);
        assert_eq!(fit.origin, Vec2::new(160.0, 0.0));
    }

    #[test]
    fn fractional_scale_snaps_down() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(800.0, 600.0));
        assert_eq!(fit.scale, 2.0);
        assert_eq!(fit.origin, Vec2::new(80.0, 60.0));
    }

    #[test]
    fn small_surface_shrinks_smoothly() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(160.0, 240.0));
        assert_eq!(fit.scale, 0.5);
        assert_eq!(fit.origin, Vec2::new(0.0, 60.0));
    }

    #[test]
    fn to_screen_offsets_by_letterbox() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(1280.0, 720.0));
        assert_eq!(fit.to_screen(Vec2::new(10.0, 20.0)), Vec2::new(190.0, 60.0));
    }

    #[test]
    fn degenerate_surface_uses_identity() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::ZERO);
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.origin, Vec2::ZERO);
    }
}
