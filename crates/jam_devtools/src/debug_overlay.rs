//! egui integration: draws the game scene and, when toggled with F3, a debug
//! window on top of it.
//!
//! egui requires a split render because `egui_wgpu::Renderer::render()` needs
//! a `RenderPass<'static>`, while `begin_render_pass` borrows the encoder:
//!
//!   1. `prepare()` -- run the scene painter and debug UI, tessellate
//!   2. `upload()`  -- upload textures and update GPU buffers (borrows encoder mutably)
//!   3. `paint()`   -- render into a new render pass with `forget_lifetime()`
//!   4. `cleanup()` -- free textures egui no longer references
//!
//! egui sees every window event so the debug window can take clicks while it
//! is shown; the scene layer itself never consumes input.

use glam::Vec2;
use jam_core::game::Game;
use jam_core::time::FrameClock;
use winit::window::Window;

#[derive(Debug, Clone, Default)]
pub struct OverlayStats {
    pub screen_label: String,
    pub countdown_label: String,
    pub entity_count: u32,
    pub hero_position: Option<Vec2>,
    pub camera_offset: Vec2,
    /// Normalized movement input this frame.
    pub axes: (f32, f32),
    /// Current drag position while the pointer or a touch is down.
    pub pointer: Option<(f32, f32)>,
    pub paused: bool,
}

impl OverlayStats {
    pub fn from_game(game: &Game, now_ms: f64) -> Self {
        let tuning = game.config().movement_tuning();
        Self {
            screen_label: game.screen().label().to_string(),
            countdown_label: jam_core::game::countdown_label(game.countdown()),
            entity_count: game.entities().len() as u32,
            hero_position: game.hero().map(|hero| Vec2::new(hero.x, hero.y)),
            camera_offset: game.camera().offset,
            axes: game.input().movement_axes(now_ms, &tuning),
            pointer: game
                .input()
                .is_pointer_down()
                .then(|| game.input().pointer().position()),
            paused: !game.is_running(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverlayActions {
    /// User clicked the pause toggle
    pub toggle_pause: bool,
    /// User clicked "New round"
    pub restart_round: bool,
}

pub struct DebugOverlay {
    pub egui_ctx: egui::Context,
    pub egui_winit_state: egui_winit::State,
    pub egui_renderer: egui_wgpu::Renderer,
    pub visible: bool,
    pub show_camera_window: bool,
}

impl DebugOverlay {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        window: &Window,
    ) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_winit_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1, false);

        Self {
            egui_ctx,
            egui_winit_state,
            egui_renderer,
            visible: false,
            show_camera_window: false,
        }
    }

    pub fn handle_window_event(
        &mut self,
        window: &Window,
        event: &winit::event::WindowEvent,
    ) -> bool {
        let response = self.egui_winit_state.on_window_event(window, event);
        response.consumed
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::info!("Debug overlay: {}", if self.visible { "ON" } else { "OFF" });
    }

    /// Run one egui pass. `paint_scene` draws the game underneath the debug UI.
    pub fn prepare(
        &mut self,
        window: &Window,
        clock: &FrameClock,
        stats: &OverlayStats,
        mut paint_scene: impl FnMut(&egui::Context),
    ) -> (
        Vec<egui::ClippedPrimitive>,
        egui::TexturesDelta,
        OverlayActions,
    ) {
        let mut actions = OverlayActions::default();
        let raw_input = self.egui_winit_state.take_egui_input(window);
        let visible = self.visible;
        let show_camera_window = &mut self.show_camera_window;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            paint_scene(ctx);
            if visible {
                egui::Window::new("Debug")
                    .default_pos([10.0, 10.0])
                    .show(ctx, |ui| {
                        ui.label(format!("FPS: {:.1}", clock.smoothed_fps));
                        ui.label(format!(
                            "Frame time: {:.2} ms",
                            clock.smoothed_frame_time_ms
                        ));
                        ui.label(format!("Frame: {}", clock.frame_count));

                        ui.separator();
                        ui.label(format!("Screen: {}", stats.screen_label));
                        ui.label(format!("Countdown: {}", stats.countdown_label));
                        ui.label(format!("Entities: {}", stats.entity_count));
                        if let Some(hero) = stats.hero_position {
                            ui.label(format!("Hero: ({:.1}, {:.1})", hero.x, hero.y));
                        }
                        ui.label(format!(
                            "Camera: ({:.1}, {:.1})",
                            stats.camera_offset.x, stats.camera_offset.y
                        ));
                        ui.label(format!("Axes: ({:.2}, {:.2})", stats.axes.0, stats.axes.1));
                        match stats.pointer {
                            Some((x, y)) => ui.label(format!("Pointer: down at ({x:.0}, {y:.0})")),
                            None => ui.label("Pointer: up"),
                        };
                        ui.checkbox(show_camera_window, "Show camera window");

                        ui.separator();
                        ui.horizontal(|ui| {
                            let pause_label = if stats.paused { "Resume" } else { "Pause" };
                            if ui.button(pause_label).clicked() {
                                actions.toggle_pause = true;
                            }
                            if ui.button("New round").clicked() {
                                actions.restart_round = true;
                            }
                        });
                        if stats.paused {
                            ui.label("\u{23f8} PAUSED");
                        }
                    });
            }
        });

        self.egui_winit_state
            .handle_platform_output(window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        (primitives, full_output.textures_delta, actions)
    }

    /// Upload textures and update buffers. Call before creating the egui render pass.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        primitives: &[egui::ClippedPrimitive],
        textures_delta: &egui::TexturesDelta,
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.egui_renderer
            .update_buffers(device, queue, encoder, primitives, screen_descriptor);
    }

    /// Render into an existing render pass. Call after `upload()`.
    pub fn paint(
        &self,
        render_pass: &mut wgpu::RenderPass<'static>,
        primitives: &[egui::ClippedPrimitive],
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
    ) {
        self.egui_renderer
            .render(render_pass, primitives, screen_descriptor);
    }

    /// Free textures that egui no longer needs. Call after rendering.
    pub fn cleanup(&mut self, textures_delta: &egui::TexturesDelta) {
        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}
