pub mod animation;
pub mod camera;
pub mod collision;
pub mod config;
pub mod entity;
pub mod game;
pub mod input;
pub mod movement;
pub mod replay;
pub mod sprite;
pub mod time;

/// Linear interpolation between `min` and `max`, with `t` clamped to `[0, 1]`.
pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    if t < 0.0 {
        return min;
    }
    if t > 1.0 {
        return max;
    }
    min * (1.0 - t) + max * t
}

#[cfg(test)]
mod tests {
    use super::lerp;

    #[test]
    fn lerp_clamps_outside_unit_range() {
        assert_eq!(lerp(0.0, 1.0, -0.5), 0.0);
        assert_eq!(lerp(0.0, 1.0, 1.5), 1.0);
    }

    #[test]
    fn lerp_interpolates_linearly() {
        assert!((lerp(0.0, 1.0, 0.25) - 0.25).abs() < 1e-6);
        assert!((lerp(10.0, 20.0, 0.5) - 15.0).abs() < 1e-6);
    }
}
