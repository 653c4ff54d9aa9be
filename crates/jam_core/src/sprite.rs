//! Static sprite table: atlas rectangles and movement speed per entity kind.
//!
//! Lookups go through exhaustive matches on `EntityKind` and `Action`, so a
//! kind without sprites does not compile rather than failing at draw time.

use crate::entity::EntityKind;

/// Rectangle of one animation frame inside the tileset image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Move,
}

#[derive(Debug)]
pub struct SpriteSheet {
    /// Pixels per second at full velocity.
    pub speed: f32,
    pub move_frames: &'static [SpriteFrame],
}

impl SpriteSheet {
    pub fn frames(&self, action: Action) -> &'static [SpriteFrame] {
        match action {
            Action::Move => self.move_frames,
        }
    }
}

const fn frame(x: u32, y: u32) -> SpriteFrame {
    SpriteFrame { x, y, w: 16, h: 18 }
}

static HERO: SpriteSheet = SpriteSheet {
    speed: 100.0,
    move_frames: &[
        frame(0, 0),
        frame(16, 0),
        frame(32, 0),
        frame(48, 0),
        frame(64, 0),
    ],
};

static FOE: SpriteSheet = SpriteSheet {
    speed: 0.0,
    move_frames: &[frame(0, 0)],
};

pub fn sheet(kind: EntityKind) -> &'static SpriteSheet {
    match kind {
        EntityKind::Hero => &HERO,
        EntityKind::Foe => &FOE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_frames_for_every_action() {
        for &kind in EntityKind::ALL {
            assert!(!sheet(kind).frames(Action::Move).is_empty());
        }
    }

    #[test]
    fn hero_walk_cycle_has_five_frames() {
        let frames = sheet(EntityKind::Hero).frames(Action::Move);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[4], SpriteFrame { x: 64, y: 0, w: 16, h: 18 });
    }

    #[test]
    fn foes_do_not_move() {
        assert_eq!(sheet(EntityKind::Foe).speed, 0.0);
        assert_eq!(sheet(EntityKind::Hero).speed, 100.0);
    }
}
