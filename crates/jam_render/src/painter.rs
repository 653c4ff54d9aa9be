//! Draws a `RenderView` with egui shapes into the letterboxed game area.
//!
//! Entities are drawn as solid boxes of their collision size; the hero's
//! walk cycle shows as a one-pixel bob on odd sprite sheet columns.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind};
use glam::Vec2;
use jam_core::entity::{Entity, EntityKind};
use jam_core::game::{RenderView, Screen};

use crate::fit::ScreenFit;

const BACKGROUND: Color32 = Color32::from_rgb(0x1d, 0x22, 0x2b);
const MAP_FLOOR: Color32 = Color32::from_rgb(0x2e, 0x3a, 0x36);
const HERO: Color32 = Color32::from_rgb(0xff, 0xcc, 0x33);
const FOE: Color32 = Color32::from_rgb(0xd9, 0x4a, 0x4a);
const TEXT: Color32 = Color32::from_rgb(0xee, 0xee, 0xee);
const DIM_TEXT: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
const CAMERA_WINDOW: Color32 = Color32::from_rgb(0x4a, 0xd9, 0xd9);

#[derive(Debug, Clone, Copy, Default)]
pub struct PaintOptions {
    /// Outline the camera's dead-zone window.
    pub show_camera_window: bool,
}

fn to_pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

/// Surface rectangle for a box given in viewport coordinates.
fn viewport_rect(fit: &ScreenFit, min: Vec2, size: Vec2) -> Rect {
    Rect::from_min_max(to_pos(fit.to_screen(min)), to_pos(fit.to_screen(min + size)))
}

pub fn entity_rect(entity: &Entity, camera_offset: Vec2, fit: &ScreenFit) -> Rect {
    let moving = entity.velocity_x != 0.0 || entity.velocity_y != 0.0;
    let odd_column = entity
        .sprite_frame()
        .is_some_and(|frame| (frame.x / frame.w.max(1)) % 2 == 1);
    let bob = if moving && odd_column {
        1.0
    } else {
        0.0
    };
    let min = Vec2::new(entity.x, entity.y - bob) - camera_offset;
    viewport_rect(fit, min, Vec2::new(entity.w(), entity.h()))
}

fn entity_color(kind: EntityKind) -> Color32 {
    match kind {
        EntityKind::Hero => HERO,
        EntityKind::Foe => FOE,
    }
}

pub fn paint_scene(
    painter: &Painter,
    view: &RenderView<'_>,
    fit: &ScreenFit,
    options: PaintOptions,
) {
    let game_rect = viewport_rect(fit, Vec2::ZERO, view.viewport);
    let painter = painter.with_clip_rect(game_rect);
    painter.rect_filled(game_rect, 0.0, BACKGROUND);

    let text_size = 12.0 * fit.scale;
    let center = game_rect.center();

    match view.screen {
        Screen::Title => {
            painter.text(
                center - egui::vec2(0.0, text_size),
                Align2::CENTER_CENTER,
                "GAME JAM BOILERPLATE",
                FontId::monospace(text_size * 1.5),
                TEXT,
            );
            painter.text(
                center + egui::vec2(0.0, text_size * 1.5),
                Align2::CENTER_CENTER,
                "press any key or tap to start",
                FontId::monospace(text_size),
                DIM_TEXT,
            );
        }
        Screen::Playing => {
            paint_playfield(&painter, view, fit, options);
            painter.text(
                game_rect.right_top() + egui::vec2(-text_size * 0.5, text_size * 0.5),
                Align2::RIGHT_TOP,
                &view.countdown_label,
                FontId::monospace(text_size),
                TEXT,
            );
            if !view.running {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "PAUSED",
                    FontId::monospace(text_size * 1.5),
                    TEXT,
                );
            }
        }
        Screen::End => {
            painter.text(
                center - egui::vec2(0.0, text_size),
                Align2::CENTER_CENTER,
                "TIME'S UP",
                FontId::monospace(text_size * 1.5),
                TEXT,
            );
            painter.text(
                center + egui::vec2(0.0, text_size * 1.5),
                Align2::CENTER_CENTER,
                "T to share, any other key to continue",
                FontId::monospace(text_size),
                DIM_TEXT,
            );
        }
    }
}

fn paint_playfield(
    painter: &Painter,
    view: &RenderView<'_>,
    fit: &ScreenFit,
    options: PaintOptions,
) {
    let offset = view.camera_offset;
    painter.rect_filled(viewport_rect(fit, -offset, view.map), 0.0, MAP_FLOOR);

    // Foes first so the hero stays visible when overlapping.
    for entity in view.entities.iter().rev() {
        painter.rect_filled(
            entity_rect(entity, offset, fit),
            0.0,
            entity_color(entity.kind),
        );
    }

    if options.show_camera_window {
        let window = view.camera_window;
        painter.rect_stroke(
            viewport_rect(
                fit,
                Vec2::new(window.x, window.y) - offset,
                Vec2::new(window.w, window.h),
            ),
            0.0,
            Stroke::new(1.0, CAMERA_WINDOW),
            StrokeKind::Inside,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jam_core::config::GameConfig;
    use jam_core::game::Game;

    fn painted_shape_count(game: &Game, options: PaintOptions) -> usize {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(960.0, 720.0));
            paint_scene(&painter, &game.view(), &fit, options);
        });
        output.shapes.len()
    }

    #[test]
    fn entity_rect_follows_camera_and_scale() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(640.0, 480.0));
        let hero = Entity::new(EntityKind::Hero, 60.0, 40.0);
        let rect = entity_rect(&hero, Vec2::new(50.0, 30.0), &fit);
        assert_eq!(rect.min, Pos2::new(20.0, 20.0));
        assert_eq!(rect.size(), egui::vec2(32.0, 36.0));
    }

    #[test]
    fn moving_hero_bobs_on_odd_sprite_columns() {
        let fit = ScreenFit::new(Vec2::new(320.0, 240.0), Vec2::new(320.0, 240.0));
        let mut hero = Entity::new(EntityKind::Hero, 10.0, 10.0);
        hero.set_velocity((1.0, 0.0));
        hero.animation.frame = 1;
        assert_eq!(entity_rect(&hero, Vec2::ZERO, &fit).min.y, 9.0);
        hero.animation.frame = 2;
        assert_eq!(entity_rect(&hero, Vec2::ZERO, &fit).min.y, 10.0);
        hero.set_velocity((0.0, 0.0));
        hero.animation.frame = 3;
        assert_eq!(entity_rect(&hero, Vec2::ZERO, &fit).min.y, 10.0);
    }

    #[test]
    fn playing_screen_draws_every_entity() {
        let mut game = Game::new(GameConfig::default()).expect("valid config");
        let title_shapes = painted_shape_count(&game, PaintOptions::default());
        game.start_round();
        let playing_shapes = painted_shape_count(&game, PaintOptions::default());
        // background + floor + entities + countdown
        assert!(playing_shapes >= 2 + game.entities().len() + 1);
        assert!(playing_shapes > title_shapes);

        let with_window = painted_shape_count(
            &game,
            PaintOptions {
                show_camera_window: true,
            },
        );
        assert_eq!(with_window, playing_shapes + 1);
    }
}
