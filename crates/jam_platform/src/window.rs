use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Smallest size that still shows the game viewport at 1:1.
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            title: "Game Jam Boilerplate".to_string(),
            width: 960,
            height: 720,
            min_width: 320,
            min_height: 240,
        }
    }
}

impl PlatformConfig {
    /// Window sized to an integer multiple of the game viewport.
    pub fn for_viewport(viewport_width: f32, viewport_height: f32, scale: u32) -> Self {
        let min_width = viewport_width.max(1.0) as u32;
        let min_height = viewport_height.max(1.0) as u32;
        Self {
            width: min_width * scale.max(1),
            height: min_height * scale.max(1),
            min_width,
            min_height,
            ..Self::default()
        }
    }
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &PlatformConfig,
) -> Result<Arc<Window>, String> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
        .with_min_inner_size(winit::dpi::LogicalSize::new(
            config.min_width,
            config.min_height,
        ));

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| format!("Failed to create window: {e}"))?;
    Ok(Arc::new(window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_scales_viewport() {
        let config = PlatformConfig::for_viewport(320.0, 240.0, 3);
        assert_eq!((config.width, config.height), (960, 720));
        assert_eq!((config.min_width, config.min_height), (320, 240));
        assert_eq!(config.title, "Game Jam Boilerplate");
    }

    #[test]
    fn zero_scale_falls_back_to_one() {
        let config = PlatformConfig::for_viewport(200.0, 100.0, 0);
        assert_eq!((config.width, config.height), (200, 100));
    }
}
