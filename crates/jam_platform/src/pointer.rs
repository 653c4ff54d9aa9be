//! Pointer and touch positions in logical window pixels.
//!
//! Drag distances are measured in these units, so a drag of a given length
//! feels the same whatever the window size, letterbox scale or display DPI.

use winit::dpi::PhysicalPosition;

pub fn logical_position(position: PhysicalPosition<f64>, scale_factor: f64) -> (f32, f32) {
    let logical = position.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jam_core::movement::{PointerDrag, DEFAULT_POINTER_MIN_DISTANCE};

    fn drag_value(scale_factor: f64, physical_start: f64, physical_end: f64) -> f32 {
        let mut drag = PointerDrag::new(DEFAULT_POINTER_MIN_DISTANCE);
        let (x, y) = logical_position(PhysicalPosition::new(physical_start, 200.0), scale_factor);
        drag.press(x, y);
        let (x, y) = logical_position(PhysicalPosition::new(physical_end, 200.0), scale_factor);
        drag.move_to(x, y);
        drag.direction().0
    }

    #[test]
    fn logical_position_divides_by_scale_factor() {
        assert_eq!(logical_position(PhysicalPosition::new(90.0, 60.0), 3.0), (30.0, 20.0));
        assert_eq!(logical_position(PhysicalPosition::new(90.0, 60.0), 1.0), (90.0, 60.0));
    }

    #[test]
    fn thirty_logical_pixels_saturate_the_drag() {
        // 90 physical pixels on a 3x display is a 30 px drag.
        assert_eq!(drag_value(3.0, 300.0, 390.0), 1.0);
        assert_eq!(drag_value(1.0, 300.0, 330.0), 1.0);
        assert!((drag_value(1.0, 300.0, 315.0) - 0.5).abs() < 1e-6);
    }
}
