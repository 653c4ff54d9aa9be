//! Game jam boilerplate -- main loop and application entry point.
//!
//! winit drives the event loop via `ApplicationHandler`. Input events are
//! handed to the game as they arrive, stamped with milliseconds since startup.
//! `RedrawRequested` runs one game frame and renders it:
//!
//!   1. `Game::on_frame()` -- drain queued input, screen transitions, update
//!   2. egui pass -- paint the scene, then the F3 debug window on top
//!   3. submit and present
//!
//! Losing focus or being occluded pauses the game; getting it back resumes.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use jam_core::config::{load_config_from_path, GameConfig};
use jam_core::game::{Game, GameSignal};
use jam_core::input::{InputEvent, Key};
use jam_devtools::{DebugOverlay, OverlayStats};
use jam_platform::PlatformConfig;
use jam_render::gpu_context::CLEAR_COLOR;
use jam_render::{paint_scene, GpuContext, PaintOptions, ScreenFit};

const CONFIG_PATH: &str = "assets/config/game.json";
const WINDOW_SCALE: u32 = 3;

struct GameState {
    window: Arc<Window>,
    gpu: GpuContext,
    debug_overlay: DebugOverlay,
    game: Game,
    started: Instant,
    cursor: Vec2,
    mouse_down: bool,
    active_touch: Option<u64>,
}

impl GameState {
    fn new(window: Arc<Window>, game: Game) -> Result<Self, String> {
        let gpu = GpuContext::new(window.clone())?;
        let debug_overlay = DebugOverlay::new(&gpu.device, gpu.surface_format, &window);
        Ok(Self {
            window,
            gpu,
            debug_overlay,
            game,
            started: Instant::now(),
            cursor: Vec2::ZERO,
            mouse_down: false,
            active_touch: None,
        })
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Physical window position to logical pixels, the unit drag distances use.
    fn to_logical(&self, position: PhysicalPosition<f64>) -> Vec2 {
        let (x, y) = jam_platform::logical_position(position, self.window.scale_factor());
        Vec2::new(x, y)
    }

    fn push_pointer(&mut self, event: InputEvent) {
        let now = self.now_ms();
        self.game.push_event(event, now);
    }

    fn pointer_down(&mut self, p: Vec2) {
        self.push_pointer(InputEvent::PointerDown { x: p.x, y: p.y });
    }

    fn pointer_move(&mut self, p: Vec2) {
        self.push_pointer(InputEvent::PointerMove { x: p.x, y: p.y });
    }

    fn redraw(&mut self) {
        if self.gpu.size.0 == 0 || self.gpu.size.1 == 0 {
            return;
        }

        let now = self.now_ms();
        for signal in self.game.on_frame(now) {
            match signal {
                GameSignal::RoundStarted => log::info!("Signal: round started"),
                GameSignal::RoundEnded => log::info!("Signal: round ended"),
                GameSignal::ShareRequested => {
                    log::info!("Signal: share requested (no share target on desktop)")
                }
            }
        }

        let Some((output, view)) = self.gpu.begin_frame() else {
            return;
        };

        let stats = OverlayStats::from_game(&self.game, now);
        let options = PaintOptions {
            show_camera_window: self.debug_overlay.show_camera_window,
        };
        let render_view = self.game.view();
        let (egui_primitives, egui_textures_delta, overlay_actions) = self.debug_overlay.prepare(
            &self.window,
            self.game.clock(),
            &stats,
            |ctx| {
                let screen = ctx.screen_rect();
                let fit = ScreenFit::new(
                    render_view.viewport,
                    Vec2::new(screen.width(), screen.height()),
                );
                let painter = ctx.layer_painter(egui::LayerId::background());
                paint_scene(&painter, &render_view, &fit, options);
            },
        );

        if overlay_actions.toggle_pause {
            self.game.toggle_pause(now);
        }
        if overlay_actions.restart_round {
            self.game.start_round();
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.size.0, self.gpu.size.1],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });
        }

        self.debug_overlay.upload(
            &self.gpu.device,
            &self.gpu.queue,
            &mut encoder,
            &egui_primitives,
            &egui_textures_delta,
            &screen_descriptor,
        );

        {
            let mut egui_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();

            self.debug_overlay
                .paint(&mut egui_pass, &egui_primitives, &screen_descriptor);
        }

        self.debug_overlay.cleanup(&egui_textures_delta);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

struct App {
    platform: PlatformConfig,
    game_config: GameConfig,
    state: Option<GameState>,
}

impl App {
    fn new(game_config: GameConfig) -> Self {
        Self {
            platform: PlatformConfig::for_viewport(
                game_config.viewport.width,
                game_config.viewport.height,
                WINDOW_SCALE,
            ),
            game_config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let game = match Game::new(self.game_config.clone()) {
            Ok(game) => game,
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
                return;
            }
        };
        let window = match jam_platform::create_window(event_loop, &self.platform) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
                return;
            }
        };
        log::info!(
            "Window created: {}x{}",
            self.platform.width,
            self.platform.height
        );
        match GameState::new(window, game) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        let egui_consumed = state
            .debug_overlay
            .handle_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::Focused(focused) => {
                let now = state.now_ms();
                state.game.set_visible(focused, now);
            }

            WindowEvent::Occluded(occluded) => {
                let now = state.now_ms();
                state.game.set_visible(!occluded, now);
            }

            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return;
                };
                let Some(key) = jam_platform::map_key(key_code) else {
                    return;
                };
                let now = state.now_ms();
                match (key, event.state) {
                    (Key::Escape, ElementState::Pressed) => {
                        log::info!("Escape pressed, exiting.");
                        event_loop.exit();
                    }
                    (Key::F3, ElementState::Pressed) if !event.repeat => {
                        state.debug_overlay.toggle();
                    }
                    (Key::Escape | Key::F3, _) => {}
                    (_, ElementState::Pressed) => state.game.push_event(
                        InputEvent::KeyDown {
                            key,
                            repeat: event.repeat,
                        },
                        now,
                    ),
                    (_, ElementState::Released) => {
                        state.game.push_event(InputEvent::KeyUp { key }, now)
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.cursor = state.to_logical(position);
                if state.mouse_down {
                    state.pointer_move(state.cursor);
                }
            }

            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed if !egui_consumed => {
                    state.mouse_down = true;
                    state.pointer_down(state.cursor);
                }
                ElementState::Released if state.mouse_down => {
                    state.mouse_down = false;
                    state.push_pointer(InputEvent::PointerUp);
                }
                _ => {}
            },

            WindowEvent::Touch(touch) => {
                let position = state.to_logical(touch.location);
                let tracked = state.active_touch == Some(touch.id);
                match touch.phase {
                    TouchPhase::Started if state.active_touch.is_none() && !egui_consumed => {
                        state.active_touch = Some(touch.id);
                        state.pointer_down(position);
                    }
                    TouchPhase::Moved if tracked => state.pointer_move(position),
                    TouchPhase::Ended | TouchPhase::Cancelled if tracked => {
                        state.active_touch = None;
                        state.push_pointer(InputEvent::PointerUp);
                    }
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => state.redraw(),

            _ => {}
        }
    }
}

/// A missing config file means defaults; a broken one is fatal.
fn load_config(path: &Path) -> GameConfig {
    if !path.exists() {
        log::warn!("No config at {}, using defaults", path.display());
        return GameConfig::default();
    }
    match load_config_from_path(path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => panic!("Invalid game config: {e}"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Game jam boilerplate starting...");

    let config = load_config(Path::new(CONFIG_PATH));

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
