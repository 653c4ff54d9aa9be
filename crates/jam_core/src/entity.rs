use serde::Deserialize;

use crate::animation::AnimationState;
use crate::collision::Aabb;
use crate::sprite::{self, Action, SpriteFrame};

/// Scale applied to both velocities when moving diagonally so the combined
/// speed matches axis-aligned travel (cos 45°).
pub const DIAGONAL_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Hero,
    Foe,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[EntityKind::Hero, EntityKind::Foe];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Foe => "foe",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An actor on the map. Position is the top-left corner in map space.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub action: Action,
    pub x: f32,
    pub y: f32,
    w: f32,
    h: f32,
    /// Normalized movement in `[-1, 1]`.
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// Pixels per second at full velocity.
    pub speed: f32,
    pub animation: AnimationState,
}

impl Entity {
    pub fn new(kind: EntityKind, x: f32, y: f32) -> Self {
        let sheet = sprite::sheet(kind);
        let action = Action::default();
        let (w, h) = sheet
            .frames(action)
            .first()
            .map_or((0.0, 0.0), |frame| (frame.w as f32, frame.h as f32));
        Self {
            kind,
            action,
            x,
            y,
            w,
            h,
            velocity_x: 0.0,
            velocity_y: 0.0,
            speed: sheet.speed,
            animation: AnimationState::new(),
        }
    }

    pub fn w(&self) -> f32 {
        self.w
    }

    pub fn h(&self) -> f32 {
        self.h
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.w, self.h)
    }

    pub fn frames(&self) -> &'static [SpriteFrame] {
        sprite::sheet(self.kind).frames(self.action)
    }

    /// Atlas rectangle for the current animation frame.
    pub fn sprite_frame(&self) -> Option<SpriteFrame> {
        self.frames().get(self.animation.frame).copied()
    }

    pub fn set_velocity(&mut self, (x, y): (f32, f32)) {
        self.velocity_x = x.clamp(-1.0, 1.0);
        self.velocity_y = y.clamp(-1.0, 1.0);
    }

    /// Advance animation and position by `dt` seconds.
    pub fn update(&mut self, dt: f32, frame_duration: f32) {
        let frame_count = self.frames().len();
        self.animation.tick(dt, frame_duration, frame_count);

        let scale = if self.velocity_x != 0.0 && self.velocity_y != 0.0 {
            DIAGONAL_SCALE
        } else {
            1.0
        };
        let distance = self.speed * dt * scale;
        self.x += distance * self.velocity_x;
        self.y += distance * self.velocity_y;
    }

    /// Keep the whole box inside a `map_width` x `map_height` map.
    pub fn clamp_to(&mut self, map_width: f32, map_height: f32) {
        if self.x < 0.0 {
            self.x = 0.0;
        } else if self.x > map_width - self.w {
            self.x = map_width - self.w;
        }
        if self.y < 0.0 {
            self.y = 0.0;
        } else if self.y > map_height - self.h {
            self.y = map_height - self.h;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_comes_from_first_sprite_frame() {
        let hero = Entity::new(EntityKind::Hero, 1.0, 2.0);
        assert_eq!((hero.w(), hero.h()), (16.0, 18.0));
        assert_eq!(hero.speed, 100.0);
        let foe = Entity::new(EntityKind::Foe, 0.0, 0.0);
        assert_eq!(foe.speed, 0.0);
    }

    #[test]
    fn axis_aligned_move_covers_full_speed() {
        let mut hero = Entity::new(EntityKind::Hero, 0.0, 0.0);
        hero.set_velocity((1.0, 0.0));
        hero.update(1.0, 0.1);
        assert!((hero.x - 100.0).abs() < 1e-4);
        assert_eq!(hero.y, 0.0);
    }

    #[test]
    fn diagonal_move_is_scaled_by_cos_45() {
        let mut hero = Entity::new(EntityKind::Hero, 0.0, 0.0);
        hero.set_velocity((1.0, 1.0));
        hero.update(1.0, 0.1);
        let expected = 100.0 * std::f32::consts::FRAC_PI_4.cos();
        assert!((hero.x - expected).abs() < 1e-3);
        assert!((hero.y - expected).abs() < 1e-3);
        assert!((hero.x - 70.71).abs() < 0.01);
    }

    #[test]
    fn set_velocity_clamps_components() {
        let mut hero = Entity::new(EntityKind::Hero, 0.0, 0.0);
        hero.set_velocity((3.0, -2.0));
        assert_eq!((hero.velocity_x, hero.velocity_y), (1.0, -1.0));
    }

    #[test]
    fn update_cycles_hero_frames() {
        let mut hero = Entity::new(EntityKind::Hero, 0.0, 0.0);
        for _ in 0..5 {
            hero.update(0.11, 0.1);
        }
        assert_eq!(hero.animation.frame, 0);
        hero.update(0.11, 0.1);
        assert_eq!(hero.animation.frame, 1);
        assert_eq!(hero.sprite_frame().map(|f| f.x), Some(16));
    }

    #[test]
    fn clamp_keeps_box_inside_map() {
        let mut hero = Entity::new(EntityKind::Hero, -5.0, 900.0);
        hero.clamp_to(640.0, 480.0);
        assert_eq!((hero.x, hero.y), (0.0, 462.0));

        hero.x = 700.0;
        hero.y = -1.0;
        hero.clamp_to(640.0, 480.0);
        assert_eq!((hero.x, hero.y), (624.0, 0.0));
    }

    #[test]
    fn kind_parses_from_lowercase_name() {
        let kind: EntityKind = serde_json::from_str("\"foe\"").expect("foe parses");
        assert_eq!(kind, EntityKind::Foe);
        assert!(serde_json::from_str::<EntityKind>("\"dragon\"").is_err());
    }
}
