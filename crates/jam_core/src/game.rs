//! Top-level game state: screens, round lifecycle, and the per-frame update.
//!
//! Platform code feeds the game in two ways:
//!
//!   1. `push_event()` -- timestamped key and pointer events, queued as they
//!      arrive between frames
//!   2. `on_frame()` -- one call per display frame with a monotonic timestamp;
//!      drains the queue, runs screen transitions, then advances the round
//!
//! Everything the renderer needs afterwards is exposed through `view()`.
//!
//! Entities are only created or dropped by `start_round()`, never during a
//! frame, so collision passes always see a stable list with the hero first.

use std::collections::VecDeque;

use glam::Vec2;

use crate::camera::CameraWindow;
use crate::collision::{self, Aabb};
use crate::config::GameConfig;
use crate::entity::{Entity, EntityKind};
use crate::input::{InputEvent, InputState, Key};
use crate::movement::MovementTuning;
use crate::time::FrameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Title,
    Playing,
    End,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title screen",
            Self::Playing => "game screen",
            Self::End => "end screen",
        }
    }
}

/// Outbound notifications produced by a frame, for the platform to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    RoundStarted,
    RoundEnded,
    /// The share key was released on the end screen.
    ShareRequested,
}

/// Everything a renderer reads after a frame.
#[derive(Debug, Clone)]
pub struct RenderView<'a> {
    pub screen: Screen,
    pub countdown: f32,
    pub countdown_label: String,
    pub camera_offset: Vec2,
    pub camera_window: Aabb,
    pub viewport: Vec2,
    pub map: Vec2,
    pub entities: &'a [Entity],
    pub running: bool,
}

pub struct Game {
    config: GameConfig,
    tuning: MovementTuning,
    screen: Screen,
    countdown: f32,
    entities: Vec<Entity>,
    camera: CameraWindow,
    input: InputState,
    clock: FrameClock,
    pending: VecDeque<(InputEvent, f64)>,
    now_ms: f64,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, String> {
        config.validate()?;
        let tuning = config.movement_tuning();
        let camera = CameraWindow::new(
            config.viewport.to_vec2(),
            config.map.to_vec2(),
            Vec2::new(config.camera_margin.x, config.camera_margin.y),
        );
        Ok(Self {
            countdown: config.round_duration_secs,
            input: InputState::with_tuning(&tuning),
            config,
            tuning,
            screen: Screen::Title,
            entities: Vec::new(),
            camera,
            clock: FrameClock::new(),
            pending: VecDeque::new(),
            now_ms: 0.0,
        })
    }

    /// Queue an input event for the next frame.
    ///
    /// The pause key is loop control rather than game input: it toggles the
    /// loop right away so it also works while no frames are being scheduled.
    pub fn push_event(&mut self, event: InputEvent, timestamp_ms: f64) {
        if let InputEvent::KeyDown {
            key: Key::P,
            repeat: false,
        } = event
        {
            if self.screen == Screen::Playing {
                self.toggle_pause(timestamp_ms);
                return;
            }
        }
        self.pending.push_back((event, timestamp_ms));
    }

    /// Run one frame at `timestamp_ms`. Does nothing while paused.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Vec<GameSignal> {
        let mut signals = Vec::new();
        if !self.clock.is_running() {
            return signals;
        }
        let elapsed = self.clock.tick(timestamp_ms);
        self.now_ms = timestamp_ms;

        while let Some((event, at)) = self.pending.pop_front() {
            self.input.apply(event, at);
        }
        self.process_inputs(&mut signals);
        self.advance(elapsed, &mut signals);
        self.input.end_frame();
        signals
    }

    fn process_inputs(&mut self, signals: &mut Vec<GameSignal>) {
        match self.screen {
            Screen::Title => {
                if self.input.any_key_just_released() || self.input.is_pointer_just_released() {
                    self.start_round();
                    signals.push(GameSignal::RoundStarted);
                }
            }
            Screen::Playing => {
                let axes = self.input.movement_axes(self.now_ms, &self.tuning);
                if let Some(hero) = self.entities.first_mut() {
                    hero.set_velocity(axes);
                }
            }
            Screen::End => {
                if self.input.is_just_released(Key::T) {
                    log::info!("Share requested from end screen");
                    signals.push(GameSignal::ShareRequested);
                }
                let dismissed = self.input.just_released_keys().any(|key| key != Key::T)
                    || self.input.is_pointer_just_released();
                if dismissed {
                    self.screen = Screen::Title;
                }
            }
        }
    }

    /// Advance the round by `elapsed` seconds without touching input.
    pub fn step(&mut self, elapsed: f32) -> Vec<GameSignal> {
        let mut signals = Vec::new();
        self.advance(elapsed, &mut signals);
        signals
    }

    fn advance(&mut self, elapsed: f32, signals: &mut Vec<GameSignal>) {
        if self.screen != Screen::Playing {
            return;
        }

        self.countdown -= elapsed;
        if self.countdown < 0.0 {
            self.screen = Screen::End;
            signals.push(GameSignal::RoundEnded);
            log::info!("Round over");
        }

        let frame_duration = self.config.frame_duration_secs;
        for entity in &mut self.entities {
            entity.update(elapsed, frame_duration);
        }
        collision::resolve_hero_collisions(&mut self.entities);

        if let Some(hero) = self.entities.first_mut() {
            hero.clamp_to(self.config.map.width, self.config.map.height);
            self.camera.update(&hero.aabb());
        }
    }

    /// Reset countdown, camera and entities, and switch to the playing screen.
    pub fn start_round(&mut self) {
        self.countdown = self.config.round_duration_secs;
        self.camera.reset();

        let (hero_x, hero_y) = (self.config.hero_start.0, self.config.hero_start.1);
        self.entities.clear();
        self.entities.push(Entity::new(EntityKind::Hero, hero_x, hero_y));
        self.entities.extend(
            self.config
                .foes
                .iter()
                .map(|spawn| Entity::new(spawn.kind, spawn.x, spawn.y)),
        );
        self.screen = Screen::Playing;
        log::info!(
            "Round started: {} foes, {}s on the clock",
            self.entities.len() - 1,
            self.countdown
        );
    }

    pub fn pause(&mut self) {
        if self.clock.is_running() {
            self.clock.pause();
            log::info!("Game loop PAUSED");
        }
    }

    pub fn resume(&mut self, now_ms: f64) {
        if !self.clock.is_running() {
            self.clock.resume(now_ms);
            log::info!("Game loop RESUMED");
        }
    }

    pub fn toggle_pause(&mut self, now_ms: f64) {
        if self.clock.is_running() {
            self.pause();
        } else {
            self.resume(now_ms);
        }
    }

    /// Pause while hidden (tab switch, minimized window), resume when shown.
    pub fn set_visible(&mut self, visible: bool, now_ms: f64) {
        if visible {
            self.resume(now_ms);
        } else {
            self.pause();
        }
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    pub fn set_countdown(&mut self, seconds: f32) {
        self.countdown = seconds;
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn hero(&self) -> Option<&Entity> {
        self.entities.first()
    }

    pub fn camera(&self) -> &CameraWindow {
        &self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn view(&self) -> RenderView<'_> {
        RenderView {
            screen: self.screen,
            countdown: self.countdown,
            countdown_label: countdown_label(self.countdown),
            camera_offset: self.camera.offset,
            camera_window: self.camera.window_rect(),
            viewport: self.camera.viewport,
            map: self.camera.map,
            entities: &self.entities,
            running: self.clock.is_running(),
        }
    }
}

/// Remaining time as `m:ss`, rounding partial seconds up.
pub fn countdown_label(countdown: f32) -> String {
    let total = countdown.ceil().max(0.0) as u32;
    format!("{}:{:02}", total / 60, total % 60)
}
