//! Camera window with edge snapping.
//!
//! The viewport shows a `viewport`-sized part of a larger map. Inside the
//! viewport a dead zone, inset by `margin` from each edge, lets the hero move
//! freely. When the hero crosses a dead-zone edge the offset jumps so that the
//! hero sits exactly on that edge again, clamped so the viewport never leaves
//! the map.

use glam::Vec2;

use crate::collision::Aabb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraWindow {
    /// Top-left of the visible part of the map.
    pub offset: Vec2,
    pub viewport: Vec2,
    pub map: Vec2,
    pub margin: Vec2,
}

impl CameraWindow {
    /// Callers are expected to pass a validated configuration
    /// (`viewport <= map`, `2 * margin < viewport`).
    pub fn new(viewport: Vec2, map: Vec2, margin: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
            map,
            margin,
        }
    }

    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Largest offset that keeps the viewport inside the map.
    pub fn max_offset(&self) -> Vec2 {
        self.map - self.viewport
    }

    /// Dead zone in map space for the current offset.
    pub fn window_rect(&self) -> Aabb {
        let size = self.viewport - 2.0 * self.margin;
        Aabb::new(
            self.offset.x + self.margin.x,
            self.offset.y + self.margin.y,
            size.x,
            size.y,
        )
    }

    pub fn update(&mut self, hero: &Aabb) {
        let max = self.max_offset();
        self.offset.x = snap_axis(
            self.offset.x,
            hero.x,
            hero.w,
            self.margin.x,
            self.viewport.x,
            max.x,
        );
        self.offset.y = snap_axis(
            self.offset.y,
            hero.y,
            hero.h,
            self.margin.y,
            self.viewport.y,
            max.y,
        );
    }
}

fn snap_axis(
    offset: f32,
    hero_min: f32,
    hero_size: f32,
    margin: f32,
    viewport: f32,
    max_offset: f32,
) -> f32 {
    let hero_max = hero_min + hero_size;
    if 0.0 < offset && hero_min < offset + margin {
        (hero_min - margin).max(0.0)
    } else if offset < max_offset && hero_max > offset + viewport - margin {
        (hero_max - (viewport - margin)).min(max_offset)
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraWindow {
        CameraWindow::new(
            Vec2::new(320.0, 240.0),
            Vec2::new(640.0, 480.0),
            Vec2::new(100.0, 50.0),
        )
    }

    fn hero(x: f32, y: f32) -> Aabb {
        Aabb::new(x, y, 16.0, 18.0)
    }

    #[test]
    fn dead_zone_does_not_scroll() {
        let mut camera = camera();
        for (x, y) in [(100.0, 50.0), (160.0, 120.0), (204.0, 172.0)] {
            camera.update(&hero(x, y));
            assert_eq!(camera.offset, Vec2::ZERO);
        }
    }

    #[test]
    fn crossing_right_edge_snaps_offset() {
        let mut camera = camera();
        camera.update(&hero(210.0, 120.0));
        // hero right edge 226 - (320 - 100)
        assert_eq!(camera.offset.x, 6.0);
        assert_eq!(camera.offset.y, 0.0);
    }

    #[test]
    fn crossing_bottom_edge_snaps_offset() {
        let mut camera = camera();
        camera.update(&hero(160.0, 200.0));
        // hero bottom 218 - (240 - 50)
        assert_eq!(camera.offset.y, 28.0);
    }

    #[test]
    fn crossing_left_edge_snaps_back() {
        let mut camera = camera();
        camera.offset = Vec2::new(200.0, 100.0);
        camera.update(&hero(250.0, 200.0));
        assert_eq!(camera.offset.x, 150.0);

        camera.update(&hero(20.0, 200.0));
        assert_eq!(camera.offset.x, 0.0);
    }

    #[test]
    fn crossing_top_edge_snaps_back() {
        let mut camera = camera();
        camera.offset = Vec2::new(0.0, 100.0);
        camera.update(&hero(160.0, 120.0));
        assert_eq!(camera.offset.y, 70.0);
    }

    #[test]
    fn left_edge_ignored_at_zero_offset() {
        let mut camera = camera();
        camera.update(&hero(0.0, 0.0));
        assert_eq!(camera.offset, Vec2::ZERO);
    }

    #[test]
    fn offset_is_clamped_at_map_edges() {
        let mut camera = camera();
        camera.update(&hero(624.0, 462.0));
        assert_eq!(camera.offset, Vec2::new(320.0, 240.0));

        // already at the right bound: no further scrolling
        camera.update(&hero(624.0, 462.0));
        assert_eq!(camera.offset, camera.max_offset());
    }

    #[test]
    fn offset_stays_in_range_for_any_hero_position() {
        let mut camera = camera();
        let mut x = 0.0;
        while x <= 624.0 {
            let mut y = 0.0;
            while y <= 462.0 {
                camera.update(&hero(x, y));
                assert!(camera.offset.x >= 0.0 && camera.offset.x <= 320.0);
                assert!(camera.offset.y >= 0.0 && camera.offset.y <= 240.0);
                y += 37.0;
            }
            x += 29.0;
        }
    }

    #[test]
    fn reset_returns_to_origin() {
        let mut camera = camera();
        camera.update(&hero(600.0, 400.0));
        camera.reset();
        assert_eq!(camera.offset, Vec2::ZERO);
    }

    #[test]
    fn window_rect_follows_offset() {
        let mut camera = camera();
        camera.offset = Vec2::new(10.0, 20.0);
        assert_eq!(camera.window_rect(), Aabb::new(110.0, 70.0, 120.0, 140.0));
    }
}
